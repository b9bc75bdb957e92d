/**
 * Token Gate
 *
 * Protected routes sit behind `require_token`. The decision itself is the
 * pure function `check_bearer`, which looks only at the request headers and
 * the token service:
 *
 * - no Authorization header, or no token after the scheme: `MissingToken` (401)
 * - a token that fails verification: `InvalidToken` (400)
 * - otherwise the decoded claims
 *
 * The token is the second space-separated segment of the header value; the
 * scheme word itself is not checked.
 */

use std::sync::Arc;

use axum::{
    extract::{FromRequestParts, Request, State},
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};

use crate::backend::auth::sessions::{Claims, TokenService};
use crate::backend::error::BackendError;

/// Why the gate refused a request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthDenial {
    MissingToken,
    InvalidToken,
}

/// Outcome of the token gate
pub type AuthResult = Result<Claims, AuthDenial>;

impl From<AuthDenial> for BackendError {
    fn from(denial: AuthDenial) -> Self {
        match denial {
            AuthDenial::MissingToken => BackendError::MissingToken,
            AuthDenial::InvalidToken => BackendError::InvalidToken,
        }
    }
}

/// Authenticated user data extracted from the token
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthenticatedUser {
    pub user_id: String,
}

/// Token carried by the Authorization header, if any
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .split(' ')
        .nth(1)
        .filter(|token| !token.is_empty())
}

/// Decide whether a request may pass
pub fn check_bearer(headers: &HeaderMap, tokens: &TokenService) -> AuthResult {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::warn!("Missing Authorization token");
        AuthDenial::MissingToken
    })?;

    tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {}", e);
        AuthDenial::InvalidToken
    })
}

/// Authentication middleware
///
/// Runs `check_bearer` and, on success, stores an `AuthenticatedUser` in
/// the request extensions before calling the handler.
pub async fn require_token(
    State(tokens): State<Arc<TokenService>>,
    mut request: Request,
    next: Next,
) -> Result<Response, BackendError> {
    let claims = check_bearer(request.headers(), &tokens)?;

    request
        .extensions_mut()
        .insert(AuthenticatedUser { user_id: claims.id });

    Ok(next.run(request).await)
}

/// Axum extractor for the user set by `require_token`
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                BackendError::MissingToken
            })
    }
}
