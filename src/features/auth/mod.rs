//! Admin authentication feature.
//!
//! A single administrator identity gates the write surface. Login checks the
//! presented credentials against the stored hash and issues a signed session
//! token; protected routes verify it per request.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Auth | Description |
//! |--------|----------|------|-------------|
//! | POST | `/api/auth/login` | No | Exchange credentials for a session token |
//! | POST | `/api/auth/logout` | Yes | Discard the session token client-side |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use services::{AuthService, TokenService};
