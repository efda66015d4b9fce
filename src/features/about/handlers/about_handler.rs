use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};

use crate::core::error::Result;
use crate::features::about::dtos::{AboutResponseDto, UpdateAboutForm};
use crate::features::about::services::AboutService;
use crate::features::auth::models::AuthenticatedAdmin;
use crate::shared::multipart::FormData;
use crate::shared::types::ApiResponse;

/// Get the about page content
///
/// Returns `data: null` until the first update.
#[utoipa::path(
    get,
    path = "/api/about",
    tag = "about",
    responses(
        (status = 200, description = "About record, or null before the first update", body = ApiResponse<AboutResponseDto>)
    )
)]
pub async fn get_about(
    State(service): State<Arc<AboutService>>,
) -> Result<Json<ApiResponse<AboutResponseDto>>> {
    let about = service.get().await?;
    Ok(Json(ApiResponse::success(about, None, None)))
}

/// Update the about page
///
/// Multipart form: `content` text plus an optional `cv` file part. Each
/// update fully replaces the record.
#[utoipa::path(
    put,
    path = "/api/admin/about",
    tag = "about",
    request_body(
        content = UpdateAboutForm,
        content_type = "multipart/form-data",
        description = "About update form",
    ),
    responses(
        (status = 200, description = "About record updated", body = ApiResponse<AboutResponseDto>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn update_about(
    _admin: AuthenticatedAdmin,
    State(service): State<Arc<AboutService>>,
    multipart: Multipart,
) -> Result<Json<ApiResponse<AboutResponseDto>>> {
    let form = FormData::from_multipart(multipart).await?;

    let content = form.text("content").unwrap_or_default().to_string();
    let about = service.update(content, form.file("cv")).await?;

    Ok(Json(ApiResponse::success(
        Some(about),
        Some("About updated".to_string()),
        None,
    )))
}
