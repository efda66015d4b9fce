use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::features::phones::dtos::PhoneResponseDto;

/// Database model for a phone listing. `image` is a stored file reference:
/// a remote URL or a path relative to the local upload root.
#[derive(Debug, Clone, FromRow)]
pub struct Phone {
    pub id: i64,
    pub name: String,
    pub price: f64,
    pub image: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Phone> for PhoneResponseDto {
    fn from(p: Phone) -> Self {
        Self {
            id: p.id,
            name: p.name,
            price: p.price,
            image: p.image,
            description: p.description,
            created_at: p.created_at,
        }
    }
}
