#[cfg(test)]
use crate::features::auth::models::AuthenticatedAdmin;

#[cfg(test)]
use axum::{extract::Request, middleware::Next, response::Response, Router};

#[cfg(test)]
use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};

/// In-memory SQLite pool with the crate's migrations applied. One connection
/// only: each `:memory:` connection is its own database.
#[cfg(test)]
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory pool");

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .expect("migrations");

    pool
}

#[cfg(test)]
pub fn test_admin() -> AuthenticatedAdmin {
    AuthenticatedAdmin {
        username: "admin".to_string(),
    }
}

#[cfg(test)]
#[allow(dead_code)]
async fn inject_admin_middleware(mut request: Request, next: Next) -> Response {
    request.extensions_mut().insert(test_admin());
    next.run(request).await
}

/// Wrap a router so every request carries the admin identity, bypassing the
/// token check in handler tests.
#[cfg(test)]
#[allow(dead_code)]
pub fn with_admin_auth(router: Router) -> Router {
    router.layer(axum::middleware::from_fn(inject_admin_middleware))
}
