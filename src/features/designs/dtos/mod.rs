mod design_dto;

pub use design_dto::{CreateDesignForm, DesignResponseDto};
