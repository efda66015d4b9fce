//! About-page feature.
//!
//! One record, updated in place: the about text plus an optional CV file
//! reference. Reads return nothing until the first update.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::AboutService;
