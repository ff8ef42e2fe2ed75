//! API routes module

pub mod ping;
pub mod products;

use axum::Router;

use crate::config::Config;

/// Create all API routes, relative to the `/api` prefix
pub fn routes(config: &Config) -> Router {
    Router::new()
        .nest("/products", products::router(config))
        .merge(ping::router())
}
