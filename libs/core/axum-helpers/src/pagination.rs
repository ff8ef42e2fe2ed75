//! `limit`/`offset` query parameters for list endpoints.
//!
//! Missing parameters take their defaults; present ones must parse and be in
//! range. Out-of-range values are rejected rather than clamped.

use axum::{
    extract::{FromRequestParts, Query},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::errors::{ErrorKind, Outcome, RecordedError, messages};

pub const DEFAULT_LIMIT: u32 = 10;
pub const MAX_LIMIT: u32 = 100;
pub const DEFAULT_OFFSET: u64 = 0;

/// Validated window into a listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationParams {
    pub limit: u32,
    pub offset: u64,
}

impl Default for PaginationParams {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            offset: DEFAULT_OFFSET,
        }
    }
}

/// Resolves raw query values into [`PaginationParams`].
///
/// `None` means the parameter was not sent. A present but empty value is
/// invalid, as is anything outside `1..=100` for `limit` or below zero for
/// `offset`.
pub fn resolve(limit: Option<&str>, offset: Option<&str>) -> Result<PaginationParams, ErrorKind> {
    let limit = match limit {
        None => DEFAULT_LIMIT,
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .and_then(|n| u32::try_from(n).ok())
            .filter(|n| (1..=MAX_LIMIT).contains(n))
            .ok_or(ErrorKind::InvalidLimit)?,
    };

    let offset = match offset {
        None => DEFAULT_OFFSET,
        Some(raw) => raw
            .parse::<i64>()
            .ok()
            .and_then(|n| u64::try_from(n).ok())
            .ok_or(ErrorKind::InvalidOffset)?,
    };

    Ok(PaginationParams { limit, offset })
}

/// `pagination` object of a list response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PaginationMeta {
    pub limit: u32,
    pub offset: u64,
    /// Items in the whole collection.
    pub total: u64,
    /// Items in this page.
    pub count: u64,
}

impl PaginationMeta {
    pub fn new(params: PaginationParams, total: u64, count: usize) -> Self {
        Self {
            limit: params.limit,
            offset: params.offset,
            total,
            count: count as u64,
        }
    }
}

/// Raw query string shape, kept as text so parse failures map to our own errors.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page size, 1 to 100 (default 10)
    pub limit: Option<String>,
    /// Items to skip, 0 or more (default 0)
    pub offset: Option<String>,
}

/// Extractor yielding resolved [`PaginationParams`].
///
/// Rejects with a 400 envelope.
///
/// ```ignore
/// async fn list(Pagination(page): Pagination) -> Outcome<Vec<Item>> { ... }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination(pub PaginationParams);

impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<PaginationQuery>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(error = %rejection.body_text(), "unparseable pagination query");
                Outcome::<()>::failure(RecordedError::generic(messages::INVALID_QUERY))
                    .with_status(StatusCode::BAD_REQUEST)
                    .into_response()
            })?;

        resolve(query.limit.as_deref(), query.offset.as_deref())
            .map(Pagination)
            .map_err(|kind| Outcome::<()>::from(kind).into_response())
    }
}
