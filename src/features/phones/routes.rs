use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::phones::handlers;
use crate::features::phones::services::PhoneService;

/// Public read surface
pub fn routes(service: Arc<PhoneService>) -> Router {
    Router::new()
        .route("/api/phones", get(handlers::list_phones))
        .with_state(service)
}

/// Admin write surface, mounted behind the auth middleware
pub fn admin_routes(service: Arc<PhoneService>) -> Router {
    Router::new()
        .route("/api/admin/phones", post(handlers::create_phone))
        .with_state(service)
}
