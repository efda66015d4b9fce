use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::about::dtos::AboutResponseDto;

/// The single about record (row id is constrained to 1)
#[derive(Debug, Clone, FromRow)]
pub struct About {
    pub id: i64,
    pub content: String,
    pub cv_file: Option<String>,
    pub updated_at: DateTime<Utc>,
}

impl From<About> for AboutResponseDto {
    fn from(a: About) -> Self {
        Self {
            content: a.content,
            cv_file: a.cv_file,
            updated_at: a.updated_at,
        }
    }
}
