//! Products Domain
//!
//! CRUD over a product catalogue, exposed as an axum router whose responses
//! all share the `{status, data, pagination, errors}` envelope.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, id parsing
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Field rules, patch merging, store deadline
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + in-memory implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, request bodies
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_products::{handlers, InMemoryProductRepository, ProductService};
//! use std::time::Duration;
//!
//! let service = ProductService::new(InMemoryProductRepository::new())
//!     .with_store_timeout(Duration::from_secs(5));
//! let router: axum::Router = handlers::router(service);
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod schema;
pub mod service;

// Re-export commonly used types
pub use error::{ProductError, ProductResult};
pub use handlers::ApiDoc;
pub use models::{Product, ProductInput, ProductPatch};
pub use repository::{InMemoryProductRepository, ProductRepository};
pub use schema::ProductSchemas;
pub use service::ProductService;
