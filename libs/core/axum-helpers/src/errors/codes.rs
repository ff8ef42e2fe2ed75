//! Closed taxonomy of the failures the request pipeline can report.
//!
//! Each kind carries:
//! - a client-facing message (its `Display`)
//! - a stable machine name (e.g. `"AUTH_HEADER_MISSING"`)
//! - the HTTP status it maps to
//!
//! # Example
//!
//! ```rust
//! use axum::http::StatusCode;
//! use axum_helpers::errors::ErrorKind;
//!
//! let kind = ErrorKind::InvalidLimit;
//! assert_eq!(kind.as_str(), "INVALID_LIMIT");
//! assert_eq!(kind.status(), StatusCode::BAD_REQUEST);
//! assert_eq!(
//!     kind.to_string(),
//!     "invalid limit parameter, limit must be in the range of [1, 100]"
//! );
//! ```

use axum::http::StatusCode;
use serde::Serialize;
use strum::{EnumIter, IntoStaticStr};
use thiserror::Error;
use utoipa::ToSchema;

use super::messages;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Error, Serialize, ToSchema, IntoStaticStr, EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    // Bearer authentication (401)
    #[error("{}", messages::AUTH_HEADER_MISSING)]
    AuthHeaderMissing,

    #[error("{}", messages::AUTH_HEADER_MALFORMED)]
    AuthHeaderMalformed,

    #[error("{}", messages::KEY_DECODE_FAILED)]
    KeyDecodeFailed,

    #[error("{}", messages::KEY_PARSE_FAILED)]
    KeyParseFailed,

    #[error("{}", messages::TOKEN_INVALID)]
    TokenInvalid,

    // Request input (400)
    #[error("{}", messages::FIELD_REQUIRED)]
    FieldRequired,

    #[error("{}", messages::FIELD_OUT_OF_RANGE)]
    FieldOutOfRange,

    #[error("{}", messages::INVALID_LIMIT)]
    InvalidLimit,

    #[error("{}", messages::INVALID_OFFSET)]
    InvalidOffset,

    // Resource and store
    #[error("{}", messages::NOT_FOUND_RESOURCE)]
    ResourceNotFound,

    #[error("{}", messages::INTERNAL_ERROR)]
    StoreFailure,
}

impl ErrorKind {
    /// Stable machine-readable name, used in logs.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::AuthHeaderMissing
            | Self::AuthHeaderMalformed
            | Self::KeyDecodeFailed
            | Self::KeyParseFailed
            | Self::TokenInvalid => StatusCode::UNAUTHORIZED,
            Self::FieldRequired
            | Self::FieldOutOfRange
            | Self::InvalidLimit
            | Self::InvalidOffset => StatusCode::BAD_REQUEST,
            Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::StoreFailure => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn is_auth_failure(&self) -> bool {
        self.status() == StatusCode::UNAUTHORIZED
    }
}
