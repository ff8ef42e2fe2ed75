use super::shutdown::ShutdownCoordinator;
use crate::errors::handlers::{method_not_allowed, not_found};
use crate::http::{CorsConfig, security_headers};
use axum::{Router, middleware};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::compression::CompressionLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tower_http::LatencyUnit;
use tracing::{Level, info, warn};
use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;
use utoipa_redoc::{Redoc, Servable as RedocServable};
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

/// Combines domain routers with documentation and cross-cutting middleware.
///
/// This function sets up:
/// - OpenAPI documentation (Swagger UI, ReDoc, RapiDoc, Scalar)
/// - API routes nested under `/api`
/// - envelope-shaped 404 and 405 fallbacks
/// - request tracing, security headers, CORS and compression
///
/// Domain routers apply their own state (and auth layer) before being passed in.
pub fn create_router<T>(apis: Router, cors: &CorsConfig) -> Router
where
    T: OpenApi + 'static,
{
    if cors.is_permissive() {
        info!("CORS allows any origin");
    } else {
        info!(origins = ?cors.allowed_origins, "CORS configured");
    }

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .merge(Redoc::with_url("/redoc", T::openapi()))
        .merge(RapiDoc::new("/api-docs/openapi.json").path("/rapidoc"))
        .merge(Scalar::with_url("/scalar", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .latency_unit(LatencyUnit::Millis),
                ),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(cors.layer())
        .layer(CompressionLayer::new())
}

/// Binds the configured address and serves until SIGINT or SIGTERM.
///
/// See [`serve_with_shutdown`] for the shutdown sequence.
pub async fn create_production_app<F>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(server_config.address()).await?;
    let coordinator = ShutdownCoordinator::new();

    let signals = coordinator.clone();
    let signal_task = tokio::spawn(async move { signals.wait_for_signal().await });

    let result = serve_with_shutdown(listener, router, coordinator, shutdown_timeout, cleanup).await;
    signal_task.abort();
    result
}

/// Serves `router` on `listener` until `coordinator` initiates shutdown.
///
/// In-flight requests are allowed to finish, then `cleanup` runs with
/// `shutdown_timeout` as its budget. Cleanup that overruns is abandoned.
pub async fn serve_with_shutdown<F>(
    listener: TcpListener,
    router: Router,
    coordinator: ShutdownCoordinator,
    shutdown_timeout: Duration,
    cleanup: F,
) -> io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    info!("Server starting on {}", listener.local_addr()?);

    let stop = coordinator.clone();
    let serve_result = axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(async move { stop.wait_for_shutdown().await })
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        });

    info!(timeout = ?shutdown_timeout, "running shutdown cleanup");
    match tokio::time::timeout(shutdown_timeout, cleanup).await {
        Ok(()) => info!("cleanup completed"),
        Err(_) => warn!(timeout = ?shutdown_timeout, "cleanup exceeded timeout, forcing shutdown"),
    }

    serve_result
}
