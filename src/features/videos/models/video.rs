use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::videos::dtos::VideoResponseDto;

#[derive(Debug, Clone, FromRow)]
pub struct Video {
    pub id: i64,
    pub title: String,
    pub file: Option<String>,
    pub poster: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Video> for VideoResponseDto {
    fn from(v: Video) -> Self {
        Self {
            id: v.id,
            title: v.title,
            file: v.file,
            poster: v.poster,
            created_at: v.created_at,
        }
    }
}
