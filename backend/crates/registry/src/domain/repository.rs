//! Repository Traits
//!
//! Interfaces for record persistence. Implementations live in the
//! infrastructure layer: Postgres, in-memory, and the failover wrapper.

use kernel::id::{AnimalId, UserId};

use crate::domain::entity::{
    animal::Animal, prediction_feedback::PredictionFeedback, support_ticket::SupportTicket,
};
use crate::error::RegistryResult;

/// Per-user prediction accuracy totals
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackStats {
    pub total_predictions: i64,
    pub correct_predictions: i64,
    pub average_rating: f64,
    /// correct / total, as a percentage
    pub accuracy: f64,
}

impl FeedbackStats {
    pub fn empty() -> Self {
        Self {
            total_predictions: 0,
            correct_predictions: 0,
            average_rating: 0.0,
            accuracy: 0.0,
        }
    }
}

/// Aggregate of a user's 0-10 ratings for one breed
#[derive(Debug, Clone, PartialEq)]
pub struct BreedRatingStats {
    pub breed: String,
    pub average_rating: f64,
    pub total_ratings: i64,
    pub max_rating: i32,
    pub min_rating: i32,
}

/// Animal repository trait
#[trait_variant::make(AnimalRepository: Send)]
pub trait LocalAnimalRepository {
    /// Insert a new animal, enforcing tagId uniqueness
    /// (`DuplicateTagId` on collision). Returns the stored animal.
    async fn insert(&self, animal: Animal) -> RegistryResult<Animal>;

    /// All animals owned by `user_id`, newest first
    async fn list_for_user(&self, user_id: &UserId) -> RegistryResult<Vec<Animal>>;

    /// Delete an animal if and only if it exists and is owned by
    /// `user_id`; returns whether anything was deleted. Existence and
    /// ownership are one check, so callers cannot tell the cases apart.
    async fn delete_owned(&self, user_id: &UserId, animal_id: &AnimalId) -> RegistryResult<bool>;
}

/// Prediction feedback repository trait
#[trait_variant::make(FeedbackRepository: Send)]
pub trait LocalFeedbackRepository {
    /// Insert a feedback record. Returns the stored record.
    async fn insert(&self, feedback: PredictionFeedback) -> RegistryResult<PredictionFeedback>;

    /// Accuracy totals over the user's feedback
    async fn stats_for_user(&self, user_id: &UserId) -> RegistryResult<FeedbackStats>;

    /// Per-breed rating aggregates, highest average first
    async fn breed_stats_for_user(
        &self,
        user_id: &UserId,
    ) -> RegistryResult<Vec<BreedRatingStats>>;
}

/// Support ticket repository trait
#[trait_variant::make(TicketRepository: Send)]
pub trait LocalTicketRepository {
    /// Insert a ticket. Returns the stored ticket.
    async fn insert(&self, ticket: SupportTicket) -> RegistryResult<SupportTicket>;

    /// The caller's tickets, newest first
    async fn list_for_user(&self, user_id: &UserId) -> RegistryResult<Vec<SupportTicket>>;

    /// Every ticket, newest first
    async fn list_all(&self) -> RegistryResult<Vec<SupportTicket>>;
}
