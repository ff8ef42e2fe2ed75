//! Raw JSON body extractor for schema-validated endpoints.

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::Value;

use crate::errors::{Outcome, RecordedError};

/// Request body parsed as untyped JSON.
///
/// The value is handed to a [`Schema`](crate::validation::Schema) so field
/// rules can see absent and null fields before the payload is typed. The
/// body is decoded whatever its `Content-Type`; a body that is not valid
/// JSON is rejected with a 400 envelope.
///
/// # Example
/// ```ignore
/// async fn create(State(schema): State<Arc<Schema>>, JsonBody(payload): JsonBody) -> Outcome<Item> {
///     match schema.validate::<Item>(&payload) { ... }
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct JsonBody(pub Value);

impl<S> FromRequest<S> for JsonBody
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            tracing::info!(error = %rejection.body_text(), "unreadable request body");
            Outcome::<()>::failure(RecordedError::Generic(rejection.body_text()))
                .with_status(rejection.status())
                .into_response()
        })?;

        serde_json::from_slice(&bytes).map(JsonBody).map_err(|e| {
            tracing::info!(error = %e, "rejected request body");
            Outcome::<()>::failure(RecordedError::Generic(format!(
                "failed to parse the request body as JSON: {e}"
            )))
            .with_status(StatusCode::BAD_REQUEST)
            .into_response()
        })
    }
}
