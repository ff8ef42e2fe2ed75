//! Bearer-token authentication against an RSA public key.
//!
//! This module provides:
//! - [`AuthConfig`], loaded from `AUTH_ENABLED` and `JWT_SECRET_KEY`
//! - [`TokenVerifier`], which checks one `Authorization` header value
//! - [`bearer_auth_middleware`], which applies the verifier to every request of a router
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::auth::{AuthConfig, TokenVerifier, bearer_auth_middleware};
//! use core_config::FromEnv;
//!
//! let verifier = TokenVerifier::new(AuthConfig::from_env()?);
//! let protected = Router::new()
//!     .route("/products", get(handler))
//!     .layer(axum::middleware::from_fn_with_state(verifier, bearer_auth_middleware));
//! ```

pub mod config;
pub mod jwt;
pub mod middleware;

pub use config::AuthConfig;
pub use jwt::{Claims, TokenVerifier};
pub use middleware::bearer_auth_middleware;
