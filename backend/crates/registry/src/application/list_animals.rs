//! List Animals Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::animal::Animal;
use crate::domain::repository::AnimalRepository;
use crate::error::RegistryResult;

/// List animals use case
pub struct ListAnimalsUseCase<R>
where
    R: AnimalRepository,
{
    repo: Arc<R>,
}

impl<R> ListAnimalsUseCase<R>
where
    R: AnimalRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The caller's animals, newest first
    pub async fn execute(&self, user_id: &UserId) -> RegistryResult<Vec<Animal>> {
        self.repo.list_for_user(user_id).await
    }
}
