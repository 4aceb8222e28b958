//! HTTP Handlers

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use std::sync::Arc;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::application::{
    ProfileUpdateInput, ProfileUseCase, SignInInput, SignInUseCase, SignUpInput, SignUpUseCase,
};
use crate::domain::repository::UserRepository;
use crate::error::AuthResult;
use crate::presentation::dto::{
    AuthResponse, ProfileResponse, SignInRequest, SignUpRequest, UpdateProfileRequest,
    UpdateProfileResponse, UserResponse,
};
use crate::presentation::middleware::AuthUser;

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AuthConfig>,
    pub tokens: Arc<TokenService>,
}

// ============================================================================
// Sign Up
// ============================================================================

/// POST /auth/signup
pub async fn sign_up<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignUpRequest>,
) -> AuthResult<(StatusCode, Json<AuthResponse>)>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignUpUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let input = SignUpInput {
        name: req.name,
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User created successfully".to_string(),
            user: UserResponse::from(&output.user),
            token: output.token,
        }),
    ))
}

// ============================================================================
// Sign In
// ============================================================================

/// POST /auth/signin
pub async fn sign_in<R>(
    State(state): State<AuthAppState<R>>,
    Json(req): Json<SignInRequest>,
) -> AuthResult<Json<AuthResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = SignInUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.tokens.clone(),
    );

    let input = SignInInput {
        email: req.email,
        password: req.password,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(AuthResponse {
        message: "Sign in successful".to_string(),
        user: UserResponse::from(&output.user),
        token: output.token,
    }))
}

// ============================================================================
// Profile
// ============================================================================

/// GET /auth/profile
pub async fn get_profile<R>(
    State(state): State<AuthAppState<R>>,
    auth: AuthUser,
) -> AuthResult<Json<ProfileResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ProfileUseCase::new(state.repo.clone());

    let user = use_case.get(auth.user_id()).await?;

    Ok(Json(ProfileResponse {
        user: UserResponse::from(&user),
    }))
}

/// PUT /auth/profile
pub async fn update_profile<R>(
    State(state): State<AuthAppState<R>>,
    auth: AuthUser,
    Json(req): Json<UpdateProfileRequest>,
) -> AuthResult<Json<UpdateProfileResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = ProfileUseCase::new(state.repo.clone());

    let input = ProfileUpdateInput {
        name: req.name,
        phone: req.phone,
        location: req.location,
    };

    let user = use_case.update(auth.user_id(), input).await?;

    Ok(Json(UpdateProfileResponse {
        message: "Profile updated successfully".to_string(),
        user: UserResponse::from(&user),
    }))
}
