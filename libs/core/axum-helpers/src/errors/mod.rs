//! Error taxonomy and the response envelope every endpoint answers with.
//!
//! Handlers and middleware never write bodies directly. They return an
//! [`Outcome`] (explicit status, data, pagination and at most one
//! [`RecordedError`]) and the envelope builder turns it into
//!
//! ```json
//! { "status": 400, "errors": [{ "message": "name is required" }] }
//! ```

pub mod codes;
pub mod envelope;
pub mod handlers;
pub mod messages;
pub mod responses;

pub use codes::ErrorKind;
pub use envelope::{Outcome, ResponseEnvelope};

use serde::{Deserialize, Serialize};
use std::fmt;
use utoipa::ToSchema;

use crate::validation::ValidationErrorSet;

/// One entry of the envelope's `errors` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error attached to a request, in one of the three shapes the envelope understands.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedError {
    /// Expanded to one message per violation, in evaluation order.
    Validation(ValidationErrorSet),
    /// Rendered verbatim, in order.
    Messages(Vec<String>),
    /// A single message.
    Generic(String),
}

impl RecordedError {
    pub fn generic(error: impl fmt::Display) -> Self {
        Self::Generic(error.to_string())
    }

    /// Normalizes into the `errors` list; never returns an empty list.
    pub fn into_messages(self) -> Vec<ErrorMessage> {
        let list: Vec<_> = match self {
            Self::Validation(set) => set
                .into_iter()
                .map(|violation| ErrorMessage::new(violation.message))
                .collect(),
            Self::Messages(messages) => messages.into_iter().map(ErrorMessage::new).collect(),
            Self::Generic(message) => vec![ErrorMessage::new(message)],
        };

        if list.is_empty() {
            vec![ErrorMessage::new(messages::INTERNAL_ERROR)]
        } else {
            list
        }
    }
}

impl From<ErrorKind> for RecordedError {
    fn from(kind: ErrorKind) -> Self {
        Self::generic(kind)
    }
}

impl From<ValidationErrorSet> for RecordedError {
    fn from(set: ValidationErrorSet) -> Self {
        Self::Validation(set)
    }
}

impl From<Vec<String>> for RecordedError {
    fn from(messages: Vec<String>) -> Self {
        Self::Messages(messages)
    }
}
