use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AboutResponseDto {
    pub content: String,
    /// CV file reference
    pub cv_file: Option<String>,
    pub updated_at: DateTime<Utc>,
}

/// Update form for Swagger UI documentation only; the handler reads the
/// multipart body directly.
#[derive(Debug, ToSchema)]
#[allow(dead_code)]
pub struct UpdateAboutForm {
    pub content: Option<String>,
    /// CV file; replaces the stored reference, absent clears it
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub cv: Option<String>,
}
