use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::auth::handlers;
use crate::features::auth::services::AuthService;

/// Login: the one unauthenticated entry point to the admin surface
pub fn public_routes(service: Arc<AuthService>) -> Router {
    Router::new()
        .route("/api/auth/login", post(handlers::login))
        .with_state(service)
}

/// Logout: mounted behind the auth middleware
pub fn protected_routes() -> Router {
    Router::new().route("/api/auth/logout", post(handlers::logout))
}
