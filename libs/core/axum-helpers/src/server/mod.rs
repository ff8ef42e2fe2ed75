//! Server infrastructure module.
//!
//! This module provides:
//! - Router assembly with OpenAPI documentation and common middleware
//! - The `/health` liveness endpoint
//! - Graceful shutdown coordination with a bounded cleanup phase
//!
//! # Example
//!
//! ```ignore
//! use axum_helpers::server::{create_production_app, create_router, health_router};
//! use core_config::app_info;
//!
//! let router = create_router::<ApiDoc>(api_routes, &cors).merge(health_router(app_info!()));
//! create_production_app(router, &server_config, Duration::from_secs(5), async {}).await?;
//! ```

pub mod app;
pub mod health;
pub mod shutdown;

pub use app::{create_production_app, create_router, serve_with_shutdown};
pub use health::{HealthResponse, health_router};
pub use shutdown::ShutdownCoordinator;
