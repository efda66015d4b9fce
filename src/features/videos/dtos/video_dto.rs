use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct VideoResponseDto {
    pub id: i64,
    pub title: String,
    /// Video file reference
    pub file: Option<String>,
    /// Poster image reference
    pub poster: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Upload form for Swagger UI documentation only; the handler reads the
/// multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct CreateVideoForm {
    pub title: String,
    /// Video file
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub video: Option<String>,
    /// Poster image (thumbnail)
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub poster: Option<String>,
}
