//! Reusable OpenAPI response types for envelope-shaped errors.

use serde::Serialize;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::{ToResponse, ToSchema};

use super::ErrorMessage;

/// Envelope as rendered for a failed request.
#[derive(Serialize, ToSchema)]
pub struct ErrorEnvelope {
    /// HTTP status, repeated in the body
    pub status: u16,
    /// One entry per error, in order
    pub errors: Vec<ErrorMessage>,
}

#[derive(ToResponse)]
#[response(
    description = "Bad Request - validation or parameter error",
    content_type = "application/json",
    example = json!({
        "status": 400,
        "errors": [
            { "message": "name is required" },
            { "message": "price must be greater than 0" }
        ]
    })
)]
pub struct BadRequestResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Unauthorized - bearer token missing or rejected",
    content_type = "application/json",
    example = json!({
        "status": 401,
        "errors": [{ "message": "invalid token" }]
    })
)]
pub struct UnauthorizedResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({
        "status": 404,
        "errors": [{ "message": "product not found" }]
    })
)]
pub struct NotFoundResponse(pub ErrorEnvelope);

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({
        "status": 500,
        "errors": [{ "message": "an unexpected error occurred" }]
    })
)]
pub struct InternalServerErrorResponse(pub ErrorEnvelope);
