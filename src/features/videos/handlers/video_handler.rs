use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::features::auth::models::AuthenticatedAdmin;
use crate::features::videos::dtos::{CreateVideoForm, VideoResponseDto};
use crate::features::videos::services::VideoService;
use crate::shared::multipart::FormData;
use crate::shared::types::{ApiResponse, Meta};

/// List videos, newest first
#[utoipa::path(
    get,
    path = "/api/videos",
    tag = "videos",
    responses(
        (status = 200, description = "All videos, newest first", body = ApiResponse<Vec<VideoResponseDto>>)
    )
)]
pub async fn list_videos(
    State(service): State<Arc<VideoService>>,
) -> Result<Json<ApiResponse<Vec<VideoResponseDto>>>> {
    let videos = service.list().await?;
    let total = videos.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(videos),
        None,
        Some(Meta { total }),
    )))
}

/// Create a video
///
/// Multipart form: `title` (required), optional `video` file part and
/// optional `poster` image part.
#[utoipa::path(
    post,
    path = "/api/admin/videos",
    tag = "videos",
    request_body(
        content = CreateVideoForm,
        content_type = "multipart/form-data",
        description = "Video upload form",
    ),
    responses(
        (status = 201, description = "Video created", body = ApiResponse<VideoResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn create_video(
    _admin: AuthenticatedAdmin,
    State(service): State<Arc<VideoService>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<VideoResponseDto>>)> {
    let form = FormData::from_multipart(multipart).await?;

    let title = form.required_text("title")?;

    let video = service
        .create(title, form.file("video"), form.file("poster"))
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            Some(video),
            Some("Video uploaded".to_string()),
            None,
        )),
    ))
}
