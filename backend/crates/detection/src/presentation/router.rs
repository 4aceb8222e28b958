//! Detection Router

use axum::{
    Router, middleware,
    routing::{get, post},
};
use std::sync::Arc;

use auth::application::token::TokenService;
use auth::presentation::middleware::{AuthMiddlewareState, require_bearer};
use registry::domain::repository::{AnimalRepository, FeedbackRepository};

use crate::application::gateway::PredictionGateway;
use crate::presentation::handlers::{self, DetectionAppState};

/// Create the /breed-detection router; every route requires a bearer
/// token
pub fn detection_router<R>(
    gateway: Arc<PredictionGateway>,
    repo: Arc<R>,
    tokens: Arc<TokenService>,
) -> Router
where
    R: AnimalRepository + FeedbackRepository + Clone + Send + Sync + 'static,
{
    let state = DetectionAppState { gateway, repo };
    let mw_state = AuthMiddlewareState { tokens };

    Router::new()
        .route("/detect", post(handlers::detect::<R>))
        .route("/feedback", post(handlers::submit_feedback::<R>))
        .route("/feedback/stats", get(handlers::feedback_stats::<R>))
        .route(
            "/feedback/breed-stats",
            get(handlers::breed_stats::<R>),
        )
        .route("/register-bpa", post(handlers::register_bpa::<R>))
        .route_layer(middleware::from_fn_with_state(mw_state, require_bearer))
        .with_state(state)
}
