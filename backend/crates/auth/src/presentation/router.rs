//! Auth Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::repository::UserRepository;
use crate::presentation::handlers::{self, AuthAppState};
use crate::presentation::middleware::{AuthMiddlewareState, require_bearer};

/// Create the Auth router for any repository implementation
///
/// `/signup` and `/signin` are public; the profile routes sit behind the
/// bearer middleware.
pub fn auth_router<R>(repo: Arc<R>, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        repo,
        config,
        tokens: tokens.clone(),
    };

    let mw_state = AuthMiddlewareState { tokens };

    Router::new()
        .route(
            "/profile",
            get(handlers::get_profile::<R>).put(handlers::update_profile::<R>),
        )
        .route_layer(middleware::from_fn_with_state(mw_state, require_bearer))
        .route("/signup", post(handlers::sign_up::<R>))
        .route("/signin", post(handlers::sign_in::<R>))
        .with_state(state)
}
