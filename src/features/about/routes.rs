use std::sync::Arc;

use axum::{
    routing::{get, put},
    Router,
};

use crate::features::about::handlers;
use crate::features::about::services::AboutService;

/// Public read surface
pub fn routes(service: Arc<AboutService>) -> Router {
    Router::new()
        .route("/api/about", get(handlers::get_about))
        .with_state(service)
}

/// Admin write surface, mounted behind the auth middleware
pub fn admin_routes(service: Arc<AboutService>) -> Router {
    Router::new()
        .route("/api/admin/about", put(handlers::update_about))
        .with_state(service)
}
