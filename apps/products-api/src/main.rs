//! Products API - REST server

use axum_helpers::server::{create_production_app, health_router};
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

mod api;
mod config;
mod openapi;

use config::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    info!(
        auth_enabled = config.auth.enabled,
        store_timeout = ?config.store_timeout,
        "Loaded configuration"
    );

    // Build REST router
    let api_routes = api::routes(&config);
    let router = axum_helpers::create_router::<openapi::ApiDoc>(api_routes, &config.cors);
    let app = router.merge(health_router(config.app));

    info!(
        "Starting {} v{} on {}",
        config.app.name,
        config.app.version,
        config.server.address()
    );

    create_production_app(app, &config.server, config.shutdown_timeout, async {
        info!("Shutting down: releasing product store");
    })
    .await
    .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Products API shutdown complete");
    Ok(())
}
