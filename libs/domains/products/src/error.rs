use axum::http::StatusCode;
use axum_helpers::{ErrorKind, Outcome, RecordedError, ValidationErrorSet};
use std::time::Duration;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("product not found")]
    NotFound(Uuid),

    #[error("invalid product id")]
    InvalidId(String),

    #[error(transparent)]
    Validation(#[from] ValidationErrorSet),

    #[error("no fields to update")]
    NoFieldsToUpdate,

    #[error("store operation timed out after {0:?}")]
    Timeout(Duration),

    /// Failure reported by the store, passed through verbatim.
    #[error("{0}")]
    Store(String),
}

pub type ProductResult<T> = Result<T, ProductError>;

impl ProductError {
    /// Pipeline kind for errors that are not request-input problems.
    pub fn kind(&self) -> Option<ErrorKind> {
        match self {
            ProductError::NotFound(_) => Some(ErrorKind::ResourceNotFound),
            ProductError::Timeout(_) | ProductError::Store(_) => Some(ErrorKind::StoreFailure),
            ProductError::InvalidId(_)
            | ProductError::Validation(_)
            | ProductError::NoFieldsToUpdate => None,
        }
    }

    /// Explicit status for classified errors; `None` lets the envelope default to 500.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ProductError::NotFound(_) => Some(StatusCode::NOT_FOUND),
            ProductError::InvalidId(_)
            | ProductError::Validation(_)
            | ProductError::NoFieldsToUpdate => Some(StatusCode::BAD_REQUEST),
            ProductError::Timeout(_) | ProductError::Store(_) => None,
        }
    }
}

/// Convert ProductError to an envelope outcome for handler responses
impl<T> From<ProductError> for Outcome<T> {
    fn from(err: ProductError) -> Self {
        let status = err.status();
        let outcome = match err {
            ProductError::Validation(set) => Outcome::failure(set),
            other => Outcome::failure(RecordedError::generic(other)),
        };

        match status {
            Some(status) => outcome.with_status(status),
            None => outcome,
        }
    }
}
