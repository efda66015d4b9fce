use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::auth::dtos::LoginResponseDto;
use crate::features::auth::models::Admin;
use crate::features::auth::services::TokenService;
use crate::shared::constants::{DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};

/// Credential check for the single administrator account.
pub struct AuthService {
    pool: SqlitePool,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(pool: SqlitePool, tokens: Arc<TokenService>) -> Self {
        Self { pool, tokens }
    }

    /// Hex-encoded SHA-256 of the password, the form stored in the admin table
    pub fn hash_password(password: &str) -> String {
        hex::encode(Sha256::digest(password.as_bytes()))
    }

    /// Seed the fixed default credential once, when the admin table is empty.
    pub async fn ensure_default_admin(&self) -> Result<()> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin")
            .fetch_one(&self.pool)
            .await?;

        if count == 0 {
            sqlx::query("INSERT INTO admin (username, password_hash) VALUES (?1, ?2)")
                .bind(DEFAULT_ADMIN_USERNAME)
                .bind(Self::hash_password(DEFAULT_ADMIN_PASSWORD))
                .execute(&self.pool)
                .await?;
            tracing::info!("Seeded default admin credential '{}'", DEFAULT_ADMIN_USERNAME);
        }

        Ok(())
    }

    /// Exact-match check of username and password hash against the stored row
    pub async fn verify_credentials(&self, username: &str, password: &str) -> Result<bool> {
        let row: Option<Admin> = sqlx::query_as(
            "SELECT id, username, password_hash FROM admin WHERE username = ?1 AND password_hash = ?2",
        )
        .bind(username)
        .bind(Self::hash_password(password))
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.is_some())
    }

    /// Check credentials and issue a session token. The failure message never
    /// says which field was wrong.
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponseDto> {
        if !self.verify_credentials(username, password).await? {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        let (token, expires_in) = self.tokens.issue(username)?;
        tracing::info!("Admin '{}' logged in", username);

        Ok(LoginResponseDto {
            token,
            token_type: "Bearer".to_string(),
            expires_in,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::shared::test_helpers::test_pool;
    use std::time::Duration;

    async fn service() -> AuthService {
        let tokens = Arc::new(TokenService::new(&AuthConfig {
            session_secret: "test-secret".to_string(),
            session_ttl: Duration::from_secs(3600),
        }));
        AuthService::new(test_pool().await, tokens)
    }

    #[tokio::test]
    async fn test_seed_is_idempotent() {
        let auth = service().await;
        auth.ensure_default_admin().await.unwrap();
        auth.ensure_default_admin().await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM admin")
            .fetch_one(&auth.pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn test_default_credentials_verify() {
        let auth = service().await;
        auth.ensure_default_admin().await.unwrap();

        assert!(auth.verify_credentials("admin", "changeme").await.unwrap());
        assert!(!auth.verify_credentials("admin", "wrong").await.unwrap());
        assert!(!auth.verify_credentials("root", "changeme").await.unwrap());
    }

    #[tokio::test]
    async fn test_login_issues_token() {
        let auth = service().await;
        auth.ensure_default_admin().await.unwrap();

        let response = auth.login("admin", "changeme").await.unwrap();
        assert_eq!(response.token_type, "Bearer");
        assert!(!response.token.is_empty());
        assert_eq!(auth.tokens.verify(&response.token).unwrap().username, "admin");

        let err = auth.login("admin", "nope").await.unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }
}
