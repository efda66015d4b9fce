use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::designs::dtos::DesignResponseDto;
use crate::features::phones::dtos::PhoneResponseDto;
use crate::features::videos::dtos::VideoResponseDto;

/// All catalog records, newest first per kind
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardOverviewDto {
    pub phones: Vec<PhoneResponseDto>,
    pub designs: Vec<DesignResponseDto>,
    pub videos: Vec<VideoResponseDto>,
}
