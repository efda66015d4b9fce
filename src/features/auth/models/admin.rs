use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// Database model for the admin credential row
#[derive(Debug, FromRow)]
#[allow(dead_code)]
pub struct Admin {
    pub id: i64,
    pub username: String,
    pub password_hash: String,
}

/// Verified admin identity carried through request extensions once the
/// session token checks out
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AuthenticatedAdmin {
    pub username: String,
}
