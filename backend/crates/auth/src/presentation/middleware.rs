//! Auth Middleware
//!
//! Bearer-token middleware for protected routes. On success the decoded
//! user id is attached to the request extensions; downstream handlers
//! treat it as the sole source of "who is asking" and never trust a
//! user id from a request body.

use std::sync::Arc;

use axum::extract::{FromRequestParts, Request, State};
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use kernel::id::UserId;

use crate::application::token::TokenService;
use crate::error::AuthError;

/// Middleware state
#[derive(Clone)]
pub struct AuthMiddlewareState {
    pub tokens: Arc<TokenService>,
}

/// Identity attached to authenticated requests
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: UserId,
}

/// Middleware that requires a valid bearer token
///
/// Missing or non-Bearer Authorization headers stop the request before
/// any verification work; invalid/expired tokens stop it after.
pub async fn require_bearer(
    State(state): State<AuthMiddlewareState>,
    mut req: Request,
    next: Next,
) -> Result<Response, Response> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AuthError::TokenMissing.into_response())?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or_else(|| AuthError::TokenMissing.into_response())?;

    let user_id = state
        .tokens
        .verify(token)
        .map_err(|e| e.into_response())?;

    req.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(req).await)
}

/// Axum extractor for the authenticated user
///
/// Usable in any handler behind [`require_bearer`]; rejects with 401 if
/// the middleware did not run.
pub struct AuthUser(pub AuthenticatedUser);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or(AuthError::TokenMissing)
    }
}

impl AuthUser {
    /// The verified user id
    pub fn user_id(&self) -> &UserId {
        &self.0.user_id
    }
}
