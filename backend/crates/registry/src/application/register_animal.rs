//! Register Animal Use Case
//!
//! Validates and persists an animal registration. Used by both the
//! plain animals endpoint and the breed-detection BPA registration.

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::entity::animal::{Animal, AnimalDraft};
use crate::domain::repository::AnimalRepository;
use crate::domain::value_object::breed_rating::validate_ratings;
use crate::domain::value_object::{AnimalType, BreedRating, Gender};
use crate::error::{RegistryError, RegistryResult};

/// Register animal input; required fields arrive as options so their
/// absence maps to a 400, not a deserialization failure
pub struct RegisterAnimalInput {
    pub breed: Option<String>,
    pub animal_type: Option<String>,
    pub age: Option<i64>,
    pub gender: Option<String>,
    pub tag_id: Option<String>,
    pub location: Option<String>,
    pub owner_name: Option<String>,
    pub notes: Option<String>,
    pub image_uri: Option<String>,
    pub confidence: Option<i32>,
    pub feedback_id: Option<String>,
    pub breed_ratings: Vec<BreedRating>,
    pub registration_date: Option<DateTime<Utc>>,
}

/// Register animal use case
pub struct RegisterAnimalUseCase<R>
where
    R: AnimalRepository,
{
    repo: Arc<R>,
}

impl<R> RegisterAnimalUseCase<R>
where
    R: AnimalRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: RegisterAnimalInput,
    ) -> RegistryResult<Animal> {
        let breed = required_text(input.breed)?;
        let animal_type = AnimalType::from_str(&required_text(input.animal_type)?)?;
        let gender = Gender::from_str(&required_text(input.gender)?)?;
        let tag_id = required_text(input.tag_id)?;

        let age = input.age.ok_or(RegistryError::MissingFields)?;
        if age <= 0 {
            return Err(RegistryError::Validation(
                "age must be a positive integer".to_string(),
            ));
        }
        let age = i32::try_from(age)
            .map_err(|_| RegistryError::Validation("age is out of range".to_string()))?;

        validate_ratings(&input.breed_ratings)?;

        let animal = Animal::new(
            user_id.clone(),
            AnimalDraft {
                breed,
                animal_type,
                age,
                gender,
                tag_id,
                location: input.location,
                owner_name: input.owner_name,
                notes: input.notes,
                image_uri: input.image_uri,
                confidence: input.confidence,
                feedback_id: input.feedback_id,
                breed_ratings: input.breed_ratings,
                registration_date: input.registration_date,
            },
        );

        let animal = self.repo.insert(animal).await?;

        tracing::info!(
            user_id = %animal.user_id,
            animal_id = %animal.animal_id,
            tag_id = %animal.tag_id,
            "Animal registered"
        );

        Ok(animal)
    }
}

fn required_text(value: Option<String>) -> RegistryResult<String> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(RegistryError::MissingFields),
    }
}
