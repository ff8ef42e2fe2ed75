//! Builds the single JSON envelope every response is rendered through.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use super::{ErrorKind, ErrorMessage, RecordedError};
use crate::pagination::PaginationMeta;

/// Body emitted when the envelope itself cannot be serialized.
const SERIALIZATION_FALLBACK: &str =
    r#"{"status":500,"errors":[{"message":"an unexpected error occurred"}]}"#;

/// Wire shape of every response body.
///
/// Absent parts are omitted rather than rendered as `null`. When an error is
/// present `data` and `pagination` are always omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseEnvelope<T> {
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginationMeta>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorMessage>>,
}

impl<T> ResponseEnvelope<T> {
    /// Status resolution: an explicit status always wins, otherwise 500 when
    /// an error was recorded and 200 when none was.
    pub fn build(
        status: Option<StatusCode>,
        data: Option<T>,
        pagination: Option<PaginationMeta>,
        error: Option<RecordedError>,
    ) -> Self {
        match error {
            Some(error) => Self {
                status: status.unwrap_or(StatusCode::INTERNAL_SERVER_ERROR).as_u16(),
                data: None,
                pagination: None,
                errors: Some(error.into_messages()),
            },
            None => Self {
                status: status.unwrap_or(StatusCode::OK).as_u16(),
                data,
                pagination,
                errors: None,
            },
        }
    }

    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn is_error(&self) -> bool {
        self.errors.is_some()
    }
}

/// Everything a handler or middleware decided about a request.
///
/// ```rust
/// use axum::http::StatusCode;
/// use axum_helpers::errors::Outcome;
///
/// let created = Outcome::data(vec!["lamp"]).with_status(StatusCode::CREATED);
/// let envelope = created.into_envelope();
/// assert_eq!(envelope.status, 201);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Outcome<T> {
    status: Option<StatusCode>,
    data: Option<T>,
    pagination: Option<PaginationMeta>,
    error: Option<RecordedError>,
}

impl<T> Default for Outcome<T> {
    fn default() -> Self {
        Self {
            status: None,
            data: None,
            pagination: None,
            error: None,
        }
    }
}

impl<T> Outcome<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data(data: T) -> Self {
        Self::new().with_data(data)
    }

    pub fn failure(error: impl Into<RecordedError>) -> Self {
        Self::new().with_error(error)
    }

    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_data(mut self, data: T) -> Self {
        self.data = Some(data);
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationMeta) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_error(mut self, error: impl Into<RecordedError>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    pub fn error(&self) -> Option<&RecordedError> {
        self.error.as_ref()
    }

    pub fn into_envelope(self) -> ResponseEnvelope<T> {
        ResponseEnvelope::build(self.status, self.data, self.pagination, self.error)
    }
}

impl Outcome<()> {
    /// Success without a body.
    pub fn no_content() -> Self {
        Self::new().with_status(StatusCode::NO_CONTENT)
    }
}

impl<T> From<ErrorKind> for Outcome<T> {
    fn from(kind: ErrorKind) -> Self {
        Self::failure(kind).with_status(kind.status())
    }
}

impl<T: Serialize> IntoResponse for Outcome<T> {
    fn into_response(self) -> Response {
        let envelope = self.into_envelope();
        let status = envelope.status_code();

        if status.is_server_error() {
            tracing::error!(status = envelope.status, errors = ?envelope.errors, "request failed");
        }

        if status == StatusCode::NO_CONTENT || status == StatusCode::NOT_MODIFIED {
            return status.into_response();
        }

        match serde_json::to_vec(&envelope) {
            Ok(body) => (
                status,
                [(header::CONTENT_TYPE, "application/json")],
                body,
            )
                .into_response(),
            Err(e) => {
                tracing::error!(error = %e, "failed to serialize response envelope");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    [(header::CONTENT_TYPE, "application/json")],
                    SERIALIZATION_FALLBACK,
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::messages;
    use crate::pagination::PaginationParams;
    use crate::validation::{FieldRule, Schema};
    use http_body_util::BodyExt;
    use serde_json::{Value, json};
    use std::collections::BTreeMap;

    fn to_json<T: Serialize>(outcome: Outcome<T>) -> Value {
        serde_json::to_value(outcome.into_envelope()).unwrap()
    }

    async fn body_of(response: Response) -> Vec<u8> {
        response
            .into_body()
            .collect()
            .await
            .unwrap()
            .to_bytes()
            .to_vec()
    }

    #[test]
    fn test_no_data_no_errors() {
        assert_eq!(to_json(Outcome::<Value>::new()), json!({ "status": 200 }));
    }

    #[test]
    fn test_data_only() {
        assert_eq!(
            to_json(Outcome::data(json!({ "id": 1 }))),
            json!({ "status": 200, "data": { "id": 1 } })
        );
    }

    #[test]
    fn test_explicit_status_wins() {
        let outcome = Outcome::data(json!([1])).with_status(StatusCode::CREATED);
        assert_eq!(to_json(outcome)["status"], 201);
    }

    #[test]
    fn test_error_without_status_defaults_to_500() {
        let outcome = Outcome::<Value>::failure(RecordedError::generic("store unavailable"));
        assert_eq!(
            to_json(outcome),
            json!({ "status": 500, "errors": [{ "message": "store unavailable" }] })
        );
    }

    #[test]
    fn test_error_drops_data_and_pagination() {
        let outcome = Outcome::data(json!([1, 2]))
            .with_pagination(PaginationMeta::new(PaginationParams::default(), 2, 2))
            .with_error(RecordedError::generic("boom"))
            .with_status(StatusCode::BAD_GATEWAY);

        assert_eq!(
            to_json(outcome),
            json!({ "status": 502, "errors": [{ "message": "boom" }] })
        );
    }

    #[test]
    fn test_validation_error_expands() {
        let schema = Schema::new()
            .field(FieldRule::new("name").required())
            .field(FieldRule::new("price").required().gt(0.0));
        let errors = schema.check(&json!({ "price": -2 })).unwrap_err();
        let outcome = Outcome::<Value>::failure(errors).with_status(StatusCode::BAD_REQUEST);

        assert_eq!(
            to_json(outcome),
            json!({
                "status": 400,
                "errors": [
                    { "message": "name is required" },
                    { "message": "price must be greater than 0" }
                ]
            })
        );
    }

    #[test]
    fn test_error_kind_carries_its_status() {
        let outcome = Outcome::<Value>::from(ErrorKind::AuthHeaderMissing);
        assert_eq!(
            to_json(outcome),
            json!({ "status": 401, "errors": [{ "message": "authorization header is missing" }] })
        );
    }

    #[test]
    fn test_list_with_pagination() {
        let meta = PaginationMeta::new(PaginationParams { limit: 2, offset: 0 }, 3, 2);
        let outcome = Outcome::data(vec!["a", "b"]).with_pagination(meta);

        assert_eq!(
            to_json(outcome),
            json!({
                "status": 200,
                "data": ["a", "b"],
                "pagination": { "limit": 2, "offset": 0, "total": 3, "count": 2 }
            })
        );
    }

    #[test]
    fn test_serialization_is_idempotent() {
        let outcome = Outcome::data(json!({ "b": 2, "a": 1 }))
            .with_pagination(PaginationMeta::new(PaginationParams::default(), 1, 1));

        let first = serde_json::to_vec(&outcome.clone().into_envelope()).unwrap();
        let second = serde_json::to_vec(&outcome.into_envelope()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_field_order_is_fixed() {
        let meta = PaginationMeta::new(PaginationParams::default(), 0, 0);
        let outcome = Outcome::data(Vec::<u8>::new()).with_pagination(meta);
        let text = serde_json::to_string(&outcome.into_envelope()).unwrap();
        assert_eq!(
            text,
            r#"{"status":200,"data":[],"pagination":{"limit":10,"offset":0,"total":0,"count":0}}"#
        );
    }

    #[tokio::test]
    async fn test_into_response_sets_status_and_content_type() {
        let response = Outcome::data(json!("pong")).into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let body: Value = serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body, json!({ "status": 200, "data": "pong" }));
    }

    #[tokio::test]
    async fn test_no_content_has_empty_body() {
        let response = Outcome::no_content().into_response();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(body_of(response).await.is_empty());
    }

    #[tokio::test]
    async fn test_unserializable_data_falls_back_to_500() {
        let mut data = BTreeMap::new();
        data.insert((1u8, 2u8), "tuple keys cannot be JSON object keys");

        let response = Outcome::data(data).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body: ResponseEnvelope<Value> =
            serde_json::from_slice(&body_of(response).await).unwrap();
        assert_eq!(body.status, 500);
        assert_eq!(
            body.errors,
            Some(vec![ErrorMessage::new(messages::INTERNAL_ERROR)])
        );
    }
}
