use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::features::auth::models::AuthenticatedAdmin;
use crate::features::phones::dtos::{CreatePhoneForm, PhoneResponseDto};
use crate::features::phones::services::PhoneService;
use crate::shared::multipart::FormData;
use crate::shared::types::{ApiResponse, Meta};

/// List phones, newest first
#[utoipa::path(
    get,
    path = "/api/phones",
    tag = "phones",
    responses(
        (status = 200, description = "All phones, newest first", body = ApiResponse<Vec<PhoneResponseDto>>)
    )
)]
pub async fn list_phones(
    State(service): State<Arc<PhoneService>>,
) -> Result<Json<ApiResponse<Vec<PhoneResponseDto>>>> {
    let phones = service.list().await?;
    let total = phones.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(phones),
        None,
        Some(Meta { total }),
    )))
}

/// Create a phone
///
/// Multipart form: `name` (required), `price`, `description`, and an optional
/// `image` file part.
#[utoipa::path(
    post,
    path = "/api/admin/phones",
    tag = "phones",
    request_body(
        content = CreatePhoneForm,
        content_type = "multipart/form-data",
        description = "Phone upload form",
    ),
    responses(
        (status = 201, description = "Phone created", body = ApiResponse<PhoneResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_phone(
    _admin: AuthenticatedAdmin,
    State(service): State<Arc<PhoneService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<PhoneResponseDto>>)> {
    let form = FormData::from_multipart(multipart).await?;

    let name = form.required_text("name")?;
    let price = form.price("price")?;
    let description = form
        .text("description")
        .map(str::to_string)
        .filter(|s| !s.is_empty());

    let phone = service
        .create(name, price, description, form.file("image"))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(phone),
            Some("Phone uploaded".to_string()),
            None,
        )),
    ))
}
