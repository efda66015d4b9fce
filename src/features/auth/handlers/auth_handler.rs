use std::sync::Arc;

use axum::{extract::State, Json};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::auth::dtos::{LoginRequestDto, LoginResponseDto, LogoutResponseDto};
use crate::features::auth::models::AuthenticatedAdmin;
use crate::features::auth::services::AuthService;
use crate::shared::types::ApiResponse;

/// Log in as the administrator
///
/// Exchanges the admin credentials for a signed session token. The error for
/// bad credentials is deliberately generic.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Session token issued", body = ApiResponse<LoginResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(service): State<Arc<AuthService>>,
    AppJson(dto): AppJson<LoginRequestDto>,
) -> Result<Json<ApiResponse<LoginResponseDto>>> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let response = service.login(&dto.username, &dto.password).await?;
    Ok(Json(ApiResponse::success(Some(response), None, None)))
}

/// Log out
///
/// Session tokens are stateless; logging out means the client discards the
/// token. The endpoint exists so the dashboard has an explicit logout action
/// and so a stale token is rejected with a 401 here like everywhere else.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    responses(
        (status = 200, description = "Logged out", body = ApiResponse<LogoutResponseDto>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn logout(admin: AuthenticatedAdmin) -> Result<Json<ApiResponse<LogoutResponseDto>>> {
    tracing::info!("Admin '{}' logged out", admin.username);

    Ok(Json(ApiResponse::success(
        Some(LogoutResponseDto { logged_out: true }),
        Some("Discard the session token".to_string()),
        None,
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::AuthConfig;
    use crate::core::middleware;
    use crate::features::auth::routes;
    use crate::features::auth::services::TokenService;
    use crate::shared::test_helpers::test_pool;
    use axum::Router;
    use axum_test::TestServer;
    use serde_json::json;
    use std::time::Duration;

    async fn server() -> TestServer {
        let tokens = Arc::new(TokenService::new(&AuthConfig {
            session_secret: "test-secret".to_string(),
            session_ttl: Duration::from_secs(3600),
        }));
        let auth = Arc::new(AuthService::new(test_pool().await, Arc::clone(&tokens)));
        auth.ensure_default_admin().await.unwrap();

        let app = Router::new()
            .merge(routes::protected_routes().route_layer(
                axum::middleware::from_fn_with_state(tokens, middleware::auth_middleware),
            ))
            .merge(routes::public_routes(auth));

        TestServer::new(app).unwrap()
    }

    #[tokio::test]
    async fn test_login_with_default_credentials() {
        let server = server().await;

        let response = server
            .post("/api/auth/login")
            .json(&json!({"username": "admin", "password": "changeme"}))
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["success"], true);
        assert!(body["data"]["token"].as_str().unwrap().len() > 20);
    }

    #[tokio::test]
    async fn test_login_rejects_bad_credentials() {
        let server = server().await;

        let response = server
            .post("/api/auth/login")
            .json(&json!({"username": "admin", "password": "wrong"}))
            .await;

        response.assert_status_unauthorized();
        let body: serde_json::Value = response.json();
        // The message must not reveal which field was wrong
        assert_eq!(body["message"], "Invalid username or password");
    }

    #[tokio::test]
    async fn test_logout_requires_token() {
        let server = server().await;

        let response = server.post("/api/auth/logout").await;
        response.assert_status_unauthorized();
    }

    #[tokio::test]
    async fn test_logout_with_token() {
        let server = server().await;

        let login: serde_json::Value = server
            .post("/api/auth/login")
            .json(&json!({"username": "admin", "password": "changeme"}))
            .await
            .json();
        let token = login["data"]["token"].as_str().unwrap().to_string();

        let response = server
            .post("/api/auth/logout")
            .authorization_bearer(token)
            .await;

        response.assert_status_ok();
        let body: serde_json::Value = response.json();
        assert_eq!(body["data"]["logged_out"], true);
    }
}
