use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::features::auth::models::AuthenticatedAdmin;
use crate::features::designs::dtos::{CreateDesignForm, DesignResponseDto};
use crate::features::designs::services::DesignService;
use crate::shared::multipart::FormData;
use crate::shared::types::{ApiResponse, Meta};

/// List designs, newest first
#[utoipa::path(
    get,
    path = "/api/designs",
    tag = "designs",
    responses(
        (status = 200, description = "All designs, newest first", body = ApiResponse<Vec<DesignResponseDto>>)
    )
)]
pub async fn list_designs(
    State(service): State<Arc<DesignService>>,
) -> Result<Json<ApiResponse<Vec<DesignResponseDto>>>> {
    let designs = service.list().await?;
    let total = designs.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(designs),
        None,
        Some(Meta { total }),
    )))
}

/// Create a design
///
/// Multipart form: `title` (required), `price`, `is_free`, plus optional
/// `image` (preview) and `file` (download) parts.
#[utoipa::path(
    post,
    path = "/api/admin/designs",
    tag = "designs",
    request_body(
        content = CreateDesignForm,
        content_type = "multipart/form-data",
        description = "Design upload form",
    ),
    responses(
        (status = 201, description = "Design created", body = ApiResponse<DesignResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_design(
    _admin: AuthenticatedAdmin,
    State(service): State<Arc<DesignService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<DesignResponseDto>>)> {
    let form = FormData::from_multipart(multipart).await?;

    let title = form.required_text("title")?;
    let price = form.price("price")?;
    let is_free = form.flag("is_free");

    let design = service
        .create(title, price, is_free, form.file("image"), form.file("file"))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(design),
            Some("Design uploaded".to_string()),
            None,
        )),
    ))
}
