//! Bearer authentication settings.
//!
//! Implements `FromEnv` from `core_config` like the other config structs.

use core_config::{ConfigError, FromEnv, env_or_default};

/// Bearer authentication configuration.
///
/// Loaded from environment variables:
/// - `AUTH_ENABLED`: exactly `"true"` turns verification on; any other value or unset leaves it off
/// - `JWT_SECRET_KEY`: base64 encoding of a PEM RSA public key
///
/// The key is not decoded here. A bad key only surfaces when a request is
/// verified, as a 401.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthConfig {
    pub enabled: bool,
    pub public_key: String,
}

impl AuthConfig {
    pub fn disabled() -> Self {
        Self::default()
    }

    pub fn enabled(public_key: impl Into<String>) -> Self {
        Self {
            enabled: true,
            public_key: public_key.into(),
        }
    }
}

impl FromEnv for AuthConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            enabled: env_or_default("AUTH_ENABLED", "") == "true",
            public_key: env_or_default("JWT_SECRET_KEY", ""),
        })
    }
}
