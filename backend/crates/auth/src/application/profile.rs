//! Profile Use Case
//!
//! Reads and updates the authenticated user's profile. The user id
//! always comes from the verified token, never from the request body.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};

/// Profile update input; absent fields are left unchanged
#[derive(Default)]
pub struct ProfileUpdateInput {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
}

/// Profile use case
pub struct ProfileUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
}

impl<R> ProfileUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Fetch the profile for a verified user id
    pub async fn get(&self, user_id: &UserId) -> AuthResult<User> {
        self.repo
            .find_by_id(user_id)
            .await?
            .ok_or(AuthError::UserNotFound)
    }

    /// Apply a partial profile update and return the updated user
    pub async fn update(
        &self,
        user_id: &UserId,
        input: ProfileUpdateInput,
    ) -> AuthResult<User> {
        let mut user = self.get(user_id).await?;

        user.apply_profile_update(input.name, input.phone, input.location);
        self.repo.update_profile(&user).await?;

        tracing::info!(user_id = %user.user_id, "Profile updated");

        Ok(user)
    }
}
