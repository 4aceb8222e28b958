//! Sign Up Use Case
//!
//! Creates a new user account and issues its first bearer token.

use std::sync::Arc;

use platform::password::ClearTextPassword;

use crate::application::config::AuthConfig;
use crate::application::token::TokenService;
use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

/// Sign up input
pub struct SignUpInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Sign up output
pub struct SignUpOutput {
    pub user: User,
    pub token: String,
}

/// Sign up use case
pub struct SignUpUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<AuthConfig>,
    tokens: Arc<TokenService>,
}

impl<R> SignUpUseCase<R>
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

    pub async fn execute(&self, input: SignUpInput) -> AuthResult<SignUpOutput> {
        if input.name.trim().is_empty()
            || input.email.trim().is_empty()
            || input.password.is_empty()
        {
            return Err(AuthError::MissingFields(
                "Name, email, and password are required",
            ));
        }

        let email = Email::new(input.email)?;

        // Validate and hash password
        let password = ClearTextPassword::new(input.password)?;
        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| AuthError::Internal(e.to_string()))?;

        // Check uniqueness before the insert so the common case gets a
        // clean conflict; the store enforces it again underneath
        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailTaken);
        }

        let user = User::new(input.name.trim().to_string(), email, password_hash);
        let user = self.repo.insert(user).await?;

        let token = self.tokens.issue(&user.user_id);

        tracing::info!(
            user_id = %user.user_id,
            email = %user.email,
            "User signed up"
        );

        Ok(SignUpOutput { user, token })
    }
}
