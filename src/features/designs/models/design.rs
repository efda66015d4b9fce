use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::designs::dtos::DesignResponseDto;

/// Database model for a design listing
#[derive(Debug, Clone, FromRow)]
pub struct Design {
    pub id: i64,
    pub title: String,
    pub price: f64,
    pub is_free: bool,
    pub image: Option<String>,
    pub file: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Design> for DesignResponseDto {
    fn from(d: Design) -> Self {
        Self {
            id: d.id,
            title: d.title,
            price: d.price,
            is_free: d.is_free,
            image: d.image,
            file: d.file,
            created_at: d.created_at,
        }
    }
}
