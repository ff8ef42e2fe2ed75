use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::{ErrorKind, Outcome, RecordedError, messages};

/// Fallback for unmatched routes.
pub async fn not_found() -> Response {
    Outcome::<()>::from(ErrorKind::ResourceNotFound).into_response()
}

/// Fallback for known routes hit with an unsupported method.
pub async fn method_not_allowed() -> Response {
    Outcome::<()>::failure(RecordedError::generic(messages::METHOD_NOT_ALLOWED))
        .with_status(StatusCode::METHOD_NOT_ALLOWED)
        .into_response()
}
