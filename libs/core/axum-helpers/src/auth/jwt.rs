use base64::{Engine as _, engine::general_purpose::STANDARD};
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::config::AuthConfig;
use crate::errors::ErrorKind;

/// Claims of a verified bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,
    /// Expiry, seconds since the epoch
    pub exp: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<u64>,
    /// Any further claims, kept as sent
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Verifies `Authorization: Bearer <token>` headers against an RSA public key.
///
/// Holds no per-request state. The key is decoded on every call so a key
/// problem is reported per request rather than at startup.
#[derive(Clone)]
pub struct TokenVerifier {
    config: AuthConfig,
    validation: Validation,
}

impl TokenVerifier {
    pub fn new(config: AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.algorithms = vec![Algorithm::RS256, Algorithm::RS384, Algorithm::RS512];
        validation.leeway = 0;
        validation.validate_nbf = true;

        Self { config, validation }
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    /// Checks a raw `Authorization` header value.
    ///
    /// Returns `Ok(None)` when authentication is disabled, whatever the
    /// header holds. Otherwise the checks run in a fixed order and the first
    /// failure is returned: header presence, header shape, key decoding,
    /// key parsing, token signature and expiry.
    pub fn verify(&self, header: Option<&str>) -> Result<Option<Claims>, ErrorKind> {
        if !self.config.enabled {
            return Ok(None);
        }

        let header = header
            .filter(|h| !h.is_empty())
            .ok_or(ErrorKind::AuthHeaderMissing)?;
        let token = bearer_token(header).ok_or(ErrorKind::AuthHeaderMalformed)?;

        let pem = STANDARD.decode(&self.config.public_key).map_err(|e| {
            tracing::warn!(error = %e, "JWT_SECRET_KEY is not valid base64");
            ErrorKind::KeyDecodeFailed
        })?;
        let key = DecodingKey::from_rsa_pem(&pem).map_err(|e| {
            tracing::warn!(error = %e, "JWT_SECRET_KEY is not a PEM RSA public key");
            ErrorKind::KeyParseFailed
        })?;

        let data = decode::<Claims>(token, &key, &self.validation).map_err(|e| {
            tracing::debug!(error = %e, "bearer token rejected");
            ErrorKind::TokenInvalid
        })?;

        Ok(Some(data.claims))
    }
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("enabled", &self.config.enabled)
            .field("algorithms", &self.validation.algorithms)
            .finish()
    }
}

/// Splits on single spaces and requires exactly `Bearer` and one token.
fn bearer_token(header: &str) -> Option<&str> {
    let mut parts = header.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Some(token),
        _ => None,
    }
}
