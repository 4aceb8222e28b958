//! Sign In Use Case
//!
//! Authenticates a user and issues a fresh bearer token.
//!
//! "Unknown email" and "wrong password" produce the same
//! `InvalidCredentials` failure so the response never reveals which
//! one happened.

use std::sync::Arc;

use chrono::Utc;
use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign in input
pub struct SignInInput {
    pub email: String,
    pub password: String,
}

/// Sign in output
#[derive(Debug)]
pub struct SignInOutput {
    pub user: User,
    pub token: String,
}

/// Sign in use case
pub struct SignInUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<R> SignInUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<AuthConfig>, tokens: Arc<TokenService>) -> Self {
        Self {
            repo,
            config,
            tokens,
        }
    }

    pub async fn execute(&self, input: SignInInput) -> AuthResult<SignInOutput> {
        if input.email.trim().is_empty() || input.password.is_empty() {
            return Err(AuthError::MissingFields("Email and password are required"));
        }

        // A malformed email cannot match an account; same failure as a
        // wrong password
        let email = Email::new(input.email).map_err(|_| AuthError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        // No policy check here; the password is only compared
        let password = ClearTextPassword::for_verification(input.password);
        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(AuthError::InvalidCredentials);
        }

        let mut user: User = user;
        let now = Utc::now();
        self.repo.record_login(&user.user_id, now).await?;
        user.record_login();

        let token = self.tokens.issue(&user.user_id);

        tracing::info!(user_id = %user.user_id, "User signed in");

        Ok(SignInOutput { user, token })
    }
}
