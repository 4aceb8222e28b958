//! Animal Entity
//!
//! A registered animal. Ownership is a plain foreign reference checked
//! at query time; there is no join-level enforcement.

use chrono::{DateTime, Utc};
use kernel::id::{AnimalId, UserId};

use crate::domain::value_object::{AnimalType, BreedRating, Gender};

/// Fields supplied by the caller when registering an animal
#[derive(Debug, Clone)]
pub struct AnimalDraft {
    pub breed: String,
    pub animal_type: AnimalType,
    pub age: i32,
    pub gender: Gender,
    pub tag_id: String,
    pub location: Option<String>,
    pub owner_name: Option<String>,
    pub notes: Option<String>,
    pub image_uri: Option<String>,
    /// Prediction confidence at registration time, integer percent
    pub confidence: Option<i32>,
    /// Back-reference to the feedback record that led to registration
    pub feedback_id: Option<String>,
    pub breed_ratings: Vec<BreedRating>,
    pub registration_date: Option<DateTime<Utc>>,
}

/// Animal entity
#[derive(Debug, Clone)]
pub struct Animal {
    pub animal_id: AnimalId,
    pub user_id: UserId,
    pub breed: String,
    pub animal_type: AnimalType,
    pub age: i32,
    pub gender: Gender,
    /// Ear-tag identifier, unique across all animals
    pub tag_id: String,
    pub location: Option<String>,
    pub owner_name: Option<String>,
    pub notes: Option<String>,
    pub image_uri: Option<String>,
    pub confidence: Option<i32>,
    pub feedback_id: Option<String>,
    pub breed_ratings: Vec<BreedRating>,
    pub registration_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Animal {
    /// Create a new animal owned by `user_id`; registrationDate defaults
    /// to now when the draft does not carry one
    pub fn new(user_id: UserId, draft: AnimalDraft) -> Self {
        let now = Utc::now();

        Self {
            animal_id: AnimalId::new(),
            user_id,
            breed: draft.breed,
            animal_type: draft.animal_type,
            age: draft.age,
            gender: draft.gender,
            tag_id: draft.tag_id,
            location: draft.location,
            owner_name: draft.owner_name,
            notes: draft.notes,
            image_uri: draft.image_uri,
            confidence: draft.confidence,
            feedback_id: draft.feedback_id,
            breed_ratings: draft.breed_ratings,
            registration_date: draft.registration_date.unwrap_or(now),
            created_at: now,
            updated_at: now,
        }
    }
}
