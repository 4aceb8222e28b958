//! Registry Routers
//!
//! Every route here requires a bearer token; the middleware comes from
//! the auth crate so the whole API shares one verification path.

use axum::{
    Router, middleware,
    routing::{delete, get, post},
};
use std::sync::Arc;

use auth::application::token::TokenService;
use auth::presentation::middleware::{AuthMiddlewareState, require_bearer};

use crate::domain::repository::{AnimalRepository, TicketRepository};
use crate::presentation::handlers::{self, RegistryAppState};

/// Create the /animals router
pub fn animals_router<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: AnimalRepository + Clone + Send + Sync + 'static,
{
    let state = RegistryAppState { repo };
    let mw_state = AuthMiddlewareState { tokens };

    Router::new()
        .route(
            "/",
            get(handlers::list_animals::<R>).post(handlers::create_animal::<R>),
        )
        .route("/{id}", delete(handlers::delete_animal::<R>))
        .route_layer(middleware::from_fn_with_state(mw_state, require_bearer))
        .with_state(state)
}

/// Create the /feedback router (support tickets)
pub fn tickets_router<R>(repo: Arc<R>, tokens: Arc<TokenService>) -> Router
where
    R: TicketRepository + Clone + Send + Sync + 'static,
{
    let state = RegistryAppState { repo };
    let mw_state = AuthMiddlewareState { tokens };

    Router::new()
        .route("/", post(handlers::submit_ticket::<R>))
        .route("/my-feedback", get(handlers::my_tickets::<R>))
        .route("/all", get(handlers::all_tickets::<R>))
        .route_layer(middleware::from_fn_with_state(mw_state, require_bearer))
        .with_state(state)
}
