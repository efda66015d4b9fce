use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::features::videos::handlers;
use crate::features::videos::services::VideoService;

/// Public read surface
pub fn routes(service: Arc<VideoService>) -> Router {
    Router::new()
        .route("/api/videos", get(handlers::list_videos))
        .with_state(service)
}

/// Admin write surface, mounted behind the auth middleware
pub fn admin_routes(service: Arc<VideoService>) -> Router {
    Router::new()
        .route("/api/admin/videos", post(handlers::create_video))
        .with_state(service)
}
