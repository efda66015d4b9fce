mod phone_dto;

pub use phone_dto::{CreatePhoneForm, PhoneResponseDto};
