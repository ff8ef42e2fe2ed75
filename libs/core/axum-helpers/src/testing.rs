//! RSA key material and token minting for tests.
//!
//! Enabled with the `test-utils` feature. Keys are generated once per test
//! binary since 2048-bit generation is slow in debug builds.

use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::Utc;
use jsonwebtoken::{Algorithm, EncodingKey, Header, encode};
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::{RsaPrivateKey, RsaPublicKey};
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::LazyLock;

use crate::auth::AuthConfig;

static TEST_KEYS: LazyLock<TestKeys> = LazyLock::new(TestKeys::generate);
static OTHER_KEYS: LazyLock<TestKeys> = LazyLock::new(TestKeys::generate);

/// Key pair the services under test are configured to trust.
pub fn test_keys() -> &'static TestKeys {
    &TEST_KEYS
}

/// A second, unrelated key pair.
pub fn other_keys() -> &'static TestKeys {
    &OTHER_KEYS
}

/// `{ "sub": "test-user", "iat": now, "exp": now + seconds }`
pub fn claims_expiring_in(seconds: i64) -> Value {
    let now = Utc::now().timestamp();
    json!({ "sub": "test-user", "iat": now, "exp": now + seconds })
}

pub struct TestKeys {
    private_pem: String,
    public_pem: String,
}

impl TestKeys {
    fn generate() -> Self {
        let mut rng = rand::thread_rng();
        let private = RsaPrivateKey::new(&mut rng, 2048).expect("generate RSA key");
        let private_pem = private
            .to_pkcs8_pem(LineEnding::LF)
            .expect("encode private key")
            .to_string();
        let public_pem = RsaPublicKey::from(&private)
            .to_public_key_pem(LineEnding::LF)
            .expect("encode public key");

        Self {
            private_pem,
            public_pem,
        }
    }

    /// Value for `JWT_SECRET_KEY`.
    pub fn public_key_b64(&self) -> String {
        STANDARD.encode(&self.public_pem)
    }

    pub fn auth_config(&self) -> AuthConfig {
        AuthConfig::enabled(self.public_key_b64())
    }

    pub fn sign_with<C: Serialize>(&self, algorithm: Algorithm, claims: &C) -> String {
        let key = EncodingKey::from_rsa_pem(self.private_pem.as_bytes()).expect("load private key");
        encode(&Header::new(algorithm), claims, &key).expect("sign token")
    }

    /// RS256 token for `sub`, valid for an hour.
    pub fn token_for(&self, sub: &str) -> String {
        let mut claims = claims_expiring_in(3600);
        claims["sub"] = json!(sub);
        self.sign_with(Algorithm::RS256, &claims)
    }

    /// `Authorization` header value carrying a valid token.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token_for("test-user"))
    }
}
