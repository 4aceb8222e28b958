//! Record Feedback Use Case
//!
//! Persists a user's verdict on a breed prediction. `isCorrect` is
//! derived here from the top prediction; the client never supplies it.

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::prediction_feedback::PredictionFeedback;
use crate::domain::repository::FeedbackRepository;
use crate::domain::value_object::breed_rating::validate_ratings;
use crate::domain::value_object::{BreedPrediction, BreedRating, HeatmapData};
use crate::error::{RegistryError, RegistryResult};

/// Star rating bounds (1-5)
const MIN_USER_RATING: i32 = 1;
const MAX_USER_RATING: i32 = 5;

/// Record feedback input
pub struct RecordFeedbackInput {
    pub image_uri: Option<String>,
    pub predicted_breeds: Vec<BreedPrediction>,
    pub user_selected_breed: Option<String>,
    pub user_rating: Option<i32>,
    pub user_comments: Option<String>,
    pub breed_ratings: Vec<BreedRating>,
    pub heatmap_data: Option<HeatmapData>,
}

/// Record feedback use case
pub struct RecordFeedbackUseCase<R>
where
    R: FeedbackRepository,
{
    repo: Arc<R>,
}

impl<R> RecordFeedbackUseCase<R>
where
    R: FeedbackRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: RecordFeedbackInput,
    ) -> RegistryResult<PredictionFeedback> {
        let image_uri = match input.image_uri {
            Some(uri) if !uri.trim().is_empty() => uri,
            _ => return Err(RegistryError::MissingFields),
        };
        let user_selected_breed = match input.user_selected_breed {
            Some(breed) if !breed.trim().is_empty() => breed,
            _ => return Err(RegistryError::MissingFields),
        };
        let user_rating = input.user_rating.ok_or(RegistryError::MissingFields)?;

        if input.predicted_breeds.is_empty() {
            return Err(RegistryError::MissingFields);
        }

        if !(MIN_USER_RATING..=MAX_USER_RATING).contains(&user_rating) {
            return Err(RegistryError::Validation(format!(
                "userRating must be between {} and {}",
                MIN_USER_RATING, MAX_USER_RATING
            )));
        }

        validate_ratings(&input.breed_ratings)?;

        let feedback = PredictionFeedback::new(
            user_id.clone(),
            image_uri,
            input.predicted_breeds,
            user_selected_breed,
            user_rating,
            input.user_comments,
            input.breed_ratings,
            input.heatmap_data,
        );

        let feedback = self.repo.insert(feedback).await?;

        tracing::info!(
            user_id = %feedback.user_id,
            feedback_id = %feedback.feedback_id,
            is_correct = feedback.is_correct,
            "Prediction feedback recorded"
        );

        Ok(feedback)
    }
}
