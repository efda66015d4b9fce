mod about_dto;

pub use about_dto::{AboutResponseDto, UpdateAboutForm};
