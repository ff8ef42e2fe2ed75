//! Liveness probe under the API prefix

use axum::{routing::get, Router};
use axum_helpers::Outcome;

/// Always answers with `data: "pong"`
#[utoipa::path(
    get,
    path = "/api/ping",
    tag = "Health",
    responses(
        (status = 200, description = "Service is up")
    )
)]
pub async fn ping() -> Outcome<&'static str> {
    Outcome::data("pong")
}

pub fn router() -> Router {
    Router::new().route("/ping", get(ping))
}
