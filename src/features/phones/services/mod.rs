mod phone_service;

pub use phone_service::PhoneService;
