use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PhoneResponseDto {
    pub id: i64,
    #[schema(example = "Pixel 9")]
    pub name: String,
    #[schema(example = 499.99)]
    pub price: f64,
    /// File reference: remote URL or path under `/uploads`
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Upload form for Swagger UI documentation only; the handler reads the
/// multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreatePhoneForm {
    pub name: String,
    /// Parsed as a number; empty means 0
    pub price: Option<String>,
    pub description: Option<String>,
    /// Phone image file
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub image: Option<String>,
}
