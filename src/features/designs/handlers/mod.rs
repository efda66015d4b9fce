mod design_handler;

pub use design_handler::*;
