//! Auth Middleware
//!
//! Middleware requiring a valid bearer token on protected routes.

use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use std::sync::Arc;

use platform::bearer::extract_bearer_token;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct TokenVerifierState {
    tokens: Arc<TokenService>,
}

impl TokenVerifierState {
    pub fn new(config: Arc<AuthConfig>) -> Self {
        Self {
            tokens: Arc::new(TokenService::new(config)),
        }
    }
}

/// Identity of the verified caller, stored in request extensions
///
/// Downstream handlers currently use this only as an authorization gate,
/// but the decoded identity is available to them.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: String,
    pub username: String,
}

/// Middleware that requires a valid bearer token
///
/// Rejects with 401 when the Authorization header is absent, malformed,
/// or carries a token that fails signature/expiry validation. On success
/// the decoded claims are attached to the request as [`AuthenticatedUser`].
pub async fn require_bearer_token(
    State(state): State<TokenVerifierState>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, Response> {
    let token = extract_bearer_token(req.headers())
        .ok_or_else(|| AuthError::MissingToken.into_response())?;

    let claims = state
        .tokens
        .verify(&token)
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(AuthenticatedUser {
        user_id: claims.sub,
        username: claims.username,
    });

    Ok(next.run(req).await)
}
