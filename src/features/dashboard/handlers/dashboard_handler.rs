use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::auth::models::AuthenticatedAdmin;
use crate::features::dashboard::dtos::DashboardOverviewDto;
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::ApiResponse;

/// Admin dashboard listing of all records
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "dashboard",
    responses(
        (status = 200, description = "All catalog records", body = ApiResponse<DashboardOverviewDto>),
        (status = 401, description = "Authentication required")
    ),
    security(("bearer_auth" = []))
)]
pub async fn get_overview(
    _admin: AuthenticatedAdmin,
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<ApiResponse<DashboardOverviewDto>>> {
    let overview = service.overview().await?;
    Ok(Json(ApiResponse::success(Some(overview), None, None)))
}
