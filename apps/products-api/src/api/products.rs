//! Products API routes

use axum::{middleware::from_fn_with_state, Router};
use axum_helpers::{bearer_auth_middleware, TokenVerifier};
use domain_products::{handlers, InMemoryProductRepository, ProductService};

use crate::config::Config;

/// Create products router, guarded by bearer auth when it is enabled
pub fn router(config: &Config) -> Router {
    let service = ProductService::new(InMemoryProductRepository::new())
        .with_store_timeout(config.store_timeout);
    let verifier = TokenVerifier::new(config.auth.clone());

    handlers::router(service).layer(from_fn_with_state(verifier, bearer_auth_middleware))
}
