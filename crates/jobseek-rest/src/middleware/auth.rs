//! Authentication middleware.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{header::AUTHORIZATION, Request},
    middleware::Next,
    response::Response,
};
use jobseek_security::TokenVerifier;
use serde::Deserialize;
use std::sync::Arc;
use tracing::debug;

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub token_verifier: Arc<TokenVerifier>,
}

impl AuthMiddlewareState {
    #[must_use]
    pub fn new(token_verifier: Arc<TokenVerifier>) -> Self {
        Self { token_verifier }
    }
}

#[derive(Deserialize)]
struct TokenQuery {
    token: Option<String>,
}

/// Verifies the bearer token and stores the caller's identity in the
/// request extensions.
///
/// Browsers cannot set headers on a websocket upgrade, so a `token` query
/// parameter is accepted when the header is absent. Requests without a
/// usable token pass through unauthenticated; handlers that need a caller
/// reject them via [`AuthenticatedUser`](crate::extractors::AuthenticatedUser).
pub async fn auth_middleware(
    State(state): State<AuthMiddlewareState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(token) = bearer_token(&request) {
        match state.token_verifier.verify(&token) {
            Ok(identity) => {
                debug!(user_id = %identity.user_id, role = %identity.role, "Authenticated request");
                request.extensions_mut().insert(identity);
            }
            Err(e) => {
                debug!("Token rejected: {}", e);
            }
        }
    }

    next.run(request).await
}

fn bearer_token(request: &Request<Body>) -> Option<String> {
    let header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::to_string);

    header.or_else(|| {
        Query::<TokenQuery>::try_from_uri(request.uri())
            .ok()
            .and_then(|Query(query)| query.token)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str, header: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(header) = header {
            builder = builder.header(AUTHORIZATION, header);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn test_bearer_header_wins_over_query() {
        let req = request("/chat/ws?token=from-query", Some("Bearer from-header"));
        assert_eq!(bearer_token(&req).as_deref(), Some("from-header"));
    }

    #[test]
    fn test_query_token_fallback() {
        let req = request("/chat/ws?token=abc", None);
        assert_eq!(bearer_token(&req).as_deref(), Some("abc"));
    }

    #[test]
    fn test_non_bearer_scheme_is_ignored() {
        let req = request("/chat/messages", Some("Basic dXNlcjpwYXNz"));
        assert_eq!(bearer_token(&req), None);
    }
}
