mod phone_handler;

pub use phone_handler::*;
