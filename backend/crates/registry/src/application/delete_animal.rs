//! Delete Animal Use Case
//!
//! Ownership and existence are one check: a missing id and someone
//! else's id produce the same `AnimalNotFound`.

use std::sync::Arc;

use kernel::id::{AnimalId, UserId};

use crate::domain::repository::AnimalRepository;
use crate::error::{RegistryError, RegistryResult};

/// Delete animal use case
pub struct DeleteAnimalUseCase<R>
where
    R: AnimalRepository,
{
    repo: Arc<R>,
}

impl<R> DeleteAnimalUseCase<R>
where
    R: AnimalRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: &UserId, animal_id: &AnimalId) -> RegistryResult<()> {
        let deleted = self.repo.delete_owned(user_id, animal_id).await?;

        if !deleted {
            return Err(RegistryError::AnimalNotFound);
        }

        tracing::info!(
            user_id = %user_id,
            animal_id = %animal_id,
            "Animal deleted"
        );

        Ok(())
    }
}
