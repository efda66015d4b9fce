use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::designs::handlers;
use crate::features::designs::services::DesignService;

/// Public read surface
pub fn routes(service: Arc<DesignService>) -> Router {
    Router::new()
        .route("/api/designs", get(handlers::list_designs))
        .with_state(service)
}

/// Admin write surface, mounted behind the auth middleware
pub fn admin_routes(service: Arc<DesignService>) -> Router {
    Router::new()
        .route("/api/admin/designs", post(handlers::create_design))
        .with_state(service)
}
