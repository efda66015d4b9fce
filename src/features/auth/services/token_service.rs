use chrono::Utc;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::core::config::AuthConfig;
use crate::core::error::{AppError, Result};
use crate::features::auth::models::AuthenticatedAdmin;

/// Claims carried by a session token: the admin identity and its validity
/// window, nothing else.
#[derive(Debug, Serialize, Deserialize)]
pub struct SessionClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
}

/// Issues and verifies the signed session tokens (HS256) that replace
/// server-side login state.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_secs: i64,
}

impl TokenService {
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.session_secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.session_secret.as_bytes()),
            ttl_secs: config.session_ttl.as_secs() as i64,
        }
    }

    /// Issue a token for the admin. Returns the token and its lifetime in
    /// seconds.
    pub fn issue(&self, username: &str) -> Result<(String, i64)> {
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: username.to_string(),
            iat: now,
            exp: now + self.ttl_secs,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(format!("Failed to sign session token: {}", e)))?;

        Ok((token, self.ttl_secs))
    }

    /// Verify a presented token and recover the admin identity. Any
    /// signature or expiry problem collapses to a generic unauthorized
    /// answer.
    pub fn verify(&self, token: &str) -> Result<AuthenticatedAdmin> {
        let data = decode::<SessionClaims>(token, &self.decoding_key, &Validation::default())
            .map_err(|_| AppError::Unauthorized("Invalid or expired session token".to_string()))?;

        Ok(AuthenticatedAdmin {
            username: data.claims.sub,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn service(secret: &str) -> TokenService {
        TokenService::new(&AuthConfig {
            session_secret: secret.to_string(),
            session_ttl: Duration::from_secs(3600),
        })
    }

    #[test]
    fn test_issue_verify_round_trip() {
        let tokens = service("test-secret");
        let (token, expires_in) = tokens.issue("admin").unwrap();

        assert_eq!(expires_in, 3600);
        let admin = tokens.verify(&token).unwrap();
        assert_eq!(admin.username, "admin");
    }

    #[test]
    fn test_tampered_token_rejected() {
        let tokens = service("test-secret");
        let (token, _) = tokens.issue("admin").unwrap();

        let mut tampered = token.clone();
        tampered.pop();
        assert!(tokens.verify(&tampered).is_err());
        assert!(tokens.verify("not-a-token").is_err());
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let (token, _) = service("secret-a").issue("admin").unwrap();
        assert!(service("secret-b").verify(&token).is_err());
    }

    #[test]
    fn test_expired_token_rejected() {
        let tokens = service("test-secret");
        let now = Utc::now().timestamp();
        let claims = SessionClaims {
            sub: "admin".to_string(),
            iat: now - 7200,
            // Far enough in the past to clear the default validation leeway
            exp: now - 3600,
        };
        let stale = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(tokens.verify(&stale).is_err());
    }
}
