mod about_handler;

pub use about_handler::*;
