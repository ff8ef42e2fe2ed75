//! Configuration for Products API

use axum_helpers::{AuthConfig, CorsConfig};
use core_config::{app_info, env_duration_secs, server::ServerConfig, AppInfo, FromEnv};
use std::time::Duration;

pub use core_config::Environment;

const DEFAULT_STORE_TIMEOUT_SECS: u64 = 5;
const DEFAULT_SHUTDOWN_TIMEOUT_SECS: u64 = 5;

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    pub server: ServerConfig,
    pub auth: AuthConfig,
    pub cors: CorsConfig,
    pub environment: Environment,
    /// Deadline for every product store call
    pub store_timeout: Duration,
    /// Budget for cleanup once the server has stopped accepting requests
    pub shutdown_timeout: Duration,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        Ok(Self {
            app: app_info!(),
            server: ServerConfig::from_env()?,
            auth: AuthConfig::from_env()?,
            cors: CorsConfig::from_env()?,
            environment: Environment::from_env(),
            store_timeout: env_duration_secs("STORE_TIMEOUT_SECS", DEFAULT_STORE_TIMEOUT_SECS)?,
            shutdown_timeout: env_duration_secs(
                "SHUTDOWN_TIMEOUT_SECS",
                DEFAULT_SHUTDOWN_TIMEOUT_SECS,
            )?,
        })
    }
}
