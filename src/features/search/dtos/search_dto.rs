use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::features::designs::dtos::DesignResponseDto;
use crate::features::phones::dtos::PhoneResponseDto;

#[derive(Debug, Deserialize, IntoParams)]
pub struct SearchQuery {
    /// Substring to match against phone names and design titles
    #[serde(default)]
    pub q: String,
}

/// Per-kind matches; an empty query yields empty lists
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SearchResultsDto {
    pub query: String,
    pub phones: Vec<PhoneResponseDto>,
    pub designs: Vec<DesignResponseDto>,
}
