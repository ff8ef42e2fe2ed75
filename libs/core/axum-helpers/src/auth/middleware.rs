use super::jwt::TokenVerifier;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::errors::{ErrorKind, Outcome};

/// Bearer authentication middleware.
///
/// Passes every request through when authentication is disabled. Otherwise
/// rejects with a 401 envelope before the handler runs, or inserts the
/// verified [`Claims`](super::Claims) into the request extensions.
///
/// # Example
///
/// ```ignore
/// use axum::middleware::from_fn_with_state;
/// use axum_helpers::auth::{AuthConfig, TokenVerifier, bearer_auth_middleware};
///
/// let verifier = TokenVerifier::new(AuthConfig::from_env()?);
/// let protected = products_router.layer(from_fn_with_state(verifier, bearer_auth_middleware));
/// ```
pub async fn bearer_auth_middleware(
    State(verifier): State<TokenVerifier>,
    mut request: Request,
    next: Next,
) -> Response {
    let verified = match request.headers().get(AUTHORIZATION) {
        None => verifier.verify(None),
        Some(value) => match value.to_str() {
            Ok(header) => verifier.verify(Some(header)),
            Err(_) if verifier.is_enabled() => Err(ErrorKind::AuthHeaderMalformed),
            Err(_) => Ok(None),
        },
    };

    match verified {
        Ok(Some(claims)) => {
            request.extensions_mut().insert(claims);
            next.run(request).await
        }
        Ok(None) => next.run(request).await,
        Err(kind) => {
            tracing::debug!(
                reason = kind.as_str(),
                method = %request.method(),
                path = %request.uri().path(),
                "bearer authentication rejected"
            );
            Outcome::<()>::from(kind).into_response()
        }
    }
}
