use axum::http::{HeaderValue, Method, header};
use core_config::{ConfigError, FromEnv};
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Allowed CORS origins.
///
/// Loaded from `CORS_ALLOWED_ORIGIN` as a comma-separated list. When the
/// variable is unset or empty any origin is allowed, without credentials.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: Vec<HeaderValue>,
}

impl CorsConfig {
    pub fn permissive() -> Self {
        Self::default()
    }

    pub fn is_permissive(&self) -> bool {
        self.allowed_origins.is_empty()
    }

    /// Builds the layer:
    /// - methods GET, POST, PUT, DELETE, PATCH, OPTIONS
    /// - headers Content-Type, Authorization, Accept
    /// - credentials only when origins are listed
    /// - 1 hour max age
    pub fn layer(&self) -> CorsLayer {
        if self.is_permissive() {
            return CorsLayer::permissive();
        }

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.allowed_origins.clone()))
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PUT,
                Method::DELETE,
                Method::PATCH,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
            .allow_credentials(true)
            .max_age(Duration::from_secs(3600))
    }
}

impl FromEnv for CorsConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let raw = std::env::var("CORS_ALLOWED_ORIGIN").unwrap_or_default();

        let allowed_origins = raw
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(HeaderValue::from_str)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: e.to_string(),
            })?;

        Ok(Self { allowed_origins })
    }
}
