//! Prediction Feedback Entity
//!
//! A user's verdict on one breed prediction. Immutable once created.

use chrono::{DateTime, Utc};
use kernel::id::{FeedbackId, UserId};

use crate::domain::value_object::{BreedPrediction, BreedRating, HeatmapData};

/// Prediction feedback entity
#[derive(Debug, Clone)]
pub struct PredictionFeedback {
    pub feedback_id: FeedbackId,
    pub user_id: UserId,
    pub image_uri: String,
    /// Predictions as shown to the user, rank order preserved
    pub predicted_breeds: Vec<BreedPrediction>,
    pub user_selected_breed: String,
    /// Star rating, 1-5
    pub user_rating: i32,
    pub user_comments: Option<String>,
    /// Per-breed 0-10 ratings; a separate scale from confidence
    pub breed_ratings: Vec<BreedRating>,
    pub heatmap_data: Option<HeatmapData>,
    /// Whether the top prediction matched the user's selection.
    /// Always computed server-side.
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

impl PredictionFeedback {
    /// Create a feedback record, deriving `is_correct` from the top
    /// prediction rather than anything the client claims
    pub fn new(
        user_id: UserId,
        image_uri: String,
        predicted_breeds: Vec<BreedPrediction>,
        user_selected_breed: String,
        user_rating: i32,
        user_comments: Option<String>,
        breed_ratings: Vec<BreedRating>,
        heatmap_data: Option<HeatmapData>,
    ) -> Self {
        let is_correct = predicted_breeds
            .first()
            .map(|p| p.breed == user_selected_breed)
            .unwrap_or(false);

        Self {
            feedback_id: FeedbackId::new(),
            user_id,
            image_uri,
            predicted_breeds,
            user_selected_breed,
            user_rating,
            user_comments,
            breed_ratings,
            heatmap_data,
            is_correct,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn predictions() -> Vec<BreedPrediction> {
        vec![
            BreedPrediction {
                breed: "Gir (Cattle)".to_string(),
                confidence: 92,
                rank: 1,
            },
            BreedPrediction {
                breed: "Sahiwal (Cattle)".to_string(),
                confidence: 5,
                rank: 2,
            },
        ]
    }

    #[test]
    fn test_is_correct_follows_top_prediction() {
        let correct = PredictionFeedback::new(
            UserId::from_counter(1),
            "data:image/jpeg;base64,x".to_string(),
            predictions(),
            "Gir (Cattle)".to_string(),
            5,
            None,
            vec![],
            None,
        );
        assert!(correct.is_correct);

        let wrong = PredictionFeedback::new(
            UserId::from_counter(1),
            "data:image/jpeg;base64,x".to_string(),
            predictions(),
            "Sahiwal (Cattle)".to_string(),
            2,
            None,
            vec![],
            None,
        );
        assert!(!wrong.is_correct);
    }

    #[test]
    fn test_empty_predictions_are_never_correct() {
        let feedback = PredictionFeedback::new(
            UserId::from_counter(1),
            "data:image/jpeg;base64,x".to_string(),
            vec![],
            "Gir (Cattle)".to_string(),
            3,
            None,
            vec![],
            None,
        );
        assert!(!feedback.is_correct);
    }
}
