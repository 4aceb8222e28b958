//! API DTOs (Data Transfer Objects)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use registry::domain::entity::prediction_feedback::PredictionFeedback;
use registry::domain::repository::{BreedRatingStats, FeedbackStats};
use registry::domain::value_object::{BreedPrediction, BreedRating, HeatmapData};

use crate::application::gateway::PredictionResult;

// ============================================================================
// Detect
// ============================================================================

/// Envelope for the detect endpoint
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectResponse {
    pub success: bool,
    pub data: DetectData,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectData {
    /// Data URI of the uploaded image, echoed back for display
    pub image_uri: String,
    pub predictions: Vec<BreedPrediction>,
    pub heatmap_data: HeatmapData,
    /// Seconds spent by the model
    pub processing_time: f64,
}

impl DetectResponse {
    pub fn new(image_uri: String, result: PredictionResult) -> Self {
        Self {
            success: true,
            data: DetectData {
                image_uri,
                predictions: result.predictions,
                heatmap_data: result.heatmap_data,
                processing_time: result.processing_time,
            },
        }
    }
}

// ============================================================================
// Prediction feedback
// ============================================================================

/// Feedback submission request
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitFeedbackRequest {
    pub image_uri: Option<String>,
    #[serde(default)]
    pub predicted_breeds: Vec<BreedPrediction>,
    pub user_selected_breed: Option<String>,
    pub user_rating: Option<i32>,
    pub user_comments: Option<String>,
    #[serde(default)]
    pub breed_ratings: Vec<BreedRating>,
    pub heatmap_data: Option<HeatmapData>,
}

/// Stored feedback wire shape
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackResponse {
    pub id: String,
    pub user_id: String,
    pub image_uri: String,
    pub predicted_breeds: Vec<BreedPrediction>,
    pub user_selected_breed: String,
    pub user_rating: i32,
    pub user_comments: Option<String>,
    pub breed_ratings: Vec<BreedRating>,
    pub heatmap_data: Option<HeatmapData>,
    pub is_correct: bool,
    pub created_at: DateTime<Utc>,
}

impl From<&PredictionFeedback> for FeedbackResponse {
    fn from(feedback: &PredictionFeedback) -> Self {
        Self {
            id: feedback.feedback_id.as_str().to_string(),
            user_id: feedback.user_id.as_str().to_string(),
            image_uri: feedback.image_uri.clone(),
            predicted_breeds: feedback.predicted_breeds.clone(),
            user_selected_breed: feedback.user_selected_breed.clone(),
            user_rating: feedback.user_rating,
            user_comments: feedback.user_comments.clone(),
            breed_ratings: feedback.breed_ratings.clone(),
            heatmap_data: feedback.heatmap_data.clone(),
            is_correct: feedback.is_correct,
            created_at: feedback.created_at,
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Per-user accuracy totals
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStatsResponse {
    pub total_predictions: i64,
    pub correct_predictions: i64,
    pub average_rating: f64,
    pub accuracy: f64,
}

impl From<FeedbackStats> for FeedbackStatsResponse {
    fn from(stats: FeedbackStats) -> Self {
        Self {
            total_predictions: stats.total_predictions,
            correct_predictions: stats.correct_predictions,
            average_rating: stats.average_rating,
            accuracy: stats.accuracy,
        }
    }
}

/// Per-breed 0-10 rating aggregate
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BreedStatsResponse {
    pub breed: String,
    pub average_rating: f64,
    pub total_ratings: i64,
    pub max_rating: i32,
    pub min_rating: i32,
}

impl From<BreedRatingStats> for BreedStatsResponse {
    fn from(stats: BreedRatingStats) -> Self {
        Self {
            breed: stats.breed,
            average_rating: stats.average_rating,
            total_ratings: stats.total_ratings,
            max_rating: stats.max_rating,
            min_rating: stats.min_rating,
        }
    }
}
