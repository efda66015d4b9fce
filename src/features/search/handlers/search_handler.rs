use std::sync::Arc;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::core::error::Result;
use crate::features::search::dtos::{SearchQuery, SearchResultsDto};
use crate::features::search::services::SearchService;
use crate::shared::types::ApiResponse;

/// Search phones and designs
///
/// Case-insensitive substring match on phone name and design title. An empty
/// query returns empty lists, not everything.
#[utoipa::path(
    get,
    path = "/api/search",
    tag = "search",
    params(SearchQuery),
    responses(
        (status = 200, description = "Matches per kind", body = ApiResponse<SearchResultsDto>)
    )
)]
pub async fn search(
    State(service): State<Arc<SearchService>>,
    Query(params): Query<SearchQuery>,
) -> Result<Json<ApiResponse<SearchResultsDto>>> {
    let results = service.search(&params.q).await?;
    Ok(Json(ApiResponse::success(Some(results), None, None)))
}
