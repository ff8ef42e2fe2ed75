//! # Axum Helpers
//!
//! The request pipeline shared by the workspace's HTTP services.
//!
//! ## Modules
//!
//! - **[`auth`]**: bearer-token verification against an RSA public key
//! - **[`validation`]**: declarative field rules for JSON payloads
//! - **[`pagination`]**: `limit`/`offset` resolution and extractor
//! - **[`errors`]**: error taxonomy and the response envelope
//! - **[`extractors`]**: extractors with envelope-shaped rejections
//! - **[`http`]**: CORS and security headers
//! - **[`server`]**: router assembly, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum_helpers::{CorsConfig, create_router, create_production_app};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! let api_routes = Router::new(); // domain routers, state applied
//! let router = create_router::<ApiDoc>(api_routes, &CorsConfig::permissive());
//! create_production_app(router, &ServerConfig::default(), Duration::from_secs(5), async {}).await?;
//! ```

pub mod auth;
pub mod errors;
pub mod extractors;
pub mod http;
pub mod pagination;
pub mod server;
pub mod validation;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

pub use auth::{AuthConfig, Claims, TokenVerifier, bearer_auth_middleware};
pub use errors::{ErrorKind, ErrorMessage, Outcome, RecordedError, ResponseEnvelope};
pub use extractors::JsonBody;
pub use http::{CorsConfig, security_headers};
pub use pagination::{Pagination, PaginationMeta, PaginationParams};
pub use server::{
    HealthResponse, ShutdownCoordinator, create_production_app, create_router, health_router,
    serve_with_shutdown,
};
pub use validation::{FieldRule, FieldViolation, Schema, ValidationErrorSet};
