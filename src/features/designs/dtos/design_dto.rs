use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DesignResponseDto {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub is_free: bool,
    /// Preview image reference
    pub image: Option<String>,
    /// Downloadable design file reference, distinct from the preview
    pub file: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Upload form for Swagger UI documentation only; the handler reads the
/// multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreateDesignForm {
    pub title: String,
    /// Parsed as a number; empty means 0
    pub price: Option<String>,
    /// Checkbox-style flag: "on", "true" or "1"
    pub is_free: Option<String>,
    /// Preview image
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: Option<String>,
    /// Downloadable design file
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: Option<String>,
}
