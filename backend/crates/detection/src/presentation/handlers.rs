//! HTTP Handlers

use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::sync::Arc;

use auth::presentation::middleware::AuthUser;
use registry::application::{
    FeedbackStatsUseCase, RecordFeedbackInput, RecordFeedbackUseCase, RegisterAnimalUseCase,
};
use registry::domain::repository::{AnimalRepository, FeedbackRepository};
use registry::presentation::dto::{AnimalResponse, CreateAnimalRequest};
use registry::presentation::handlers::register_input;

use crate::application::gateway::PredictionGateway;
use crate::error::{DetectionError, DetectionResult};
use crate::presentation::dto::{
    BreedStatsResponse, DetectResponse, FeedbackResponse, FeedbackStatsResponse,
    SubmitFeedbackRequest,
};

/// Shared state for detection handlers
#[derive(Clone)]
pub struct DetectionAppState<R>
where
    R: Clone + Send + Sync + 'static,
{
    pub gateway: Arc<PredictionGateway>,
    pub repo: Arc<R>,
}

// ============================================================================
// Detect
// ============================================================================

/// POST /breed-detection/detect
///
/// Multipart upload with an `image` field. The response is always 200
/// with a rank-ordered prediction list; an unreachable model degrades
/// to the fallback set inside the gateway.
pub async fn detect<R>(
    State(state): State<DetectionAppState<R>>,
    auth: AuthUser,
    multipart: Multipart,
) -> DetectionResult<Json<DetectResponse>>
where
    R: Clone + Send + Sync + 'static,
{
    let (bytes, content_type) = read_image_field(multipart).await?;

    let result = state.gateway.predict(&bytes).await;

    // Echo the upload back as a data URI; cloud storage is out of scope
    let image_uri = format!("data:{};base64,{}", content_type, STANDARD.encode(&bytes));

    let top_breed = result
        .predictions
        .first()
        .map(|p| p.breed.as_str())
        .unwrap_or("none");
    tracing::info!(
        user_id = %auth.user_id(),
        image_bytes = bytes.len(),
        top_breed = %top_breed,
        "Breed detection completed"
    );

    Ok(Json(DetectResponse::new(image_uri, result)))
}

/// Pull the image field out of the multipart body
async fn read_image_field(mut multipart: Multipart) -> DetectionResult<(Vec<u8>, String)> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| DetectionError::Upload(e.to_string()))?
    {
        if field.name() != Some("image") {
            continue;
        }

        let content_type = field
            .content_type()
            .map(|ct| ct.to_string())
            .unwrap_or_default();

        if !content_type.starts_with("image/") {
            return Err(DetectionError::NotAnImage);
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| DetectionError::Upload(e.to_string()))?;

        return Ok((bytes.to_vec(), content_type));
    }

    Err(DetectionError::MissingImage)
}

// ============================================================================
// Feedback
// ============================================================================

/// POST /breed-detection/feedback
pub async fn submit_feedback<R>(
    State(state): State<DetectionAppState<R>>,
    auth: AuthUser,
    Json(req): Json<SubmitFeedbackRequest>,
) -> DetectionResult<(StatusCode, Json<FeedbackResponse>)>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = RecordFeedbackUseCase::new(state.repo.clone());

    let input = RecordFeedbackInput {
        image_uri: req.image_uri,
        predicted_breeds: req.predicted_breeds,
        user_selected_breed: req.user_selected_breed,
        user_rating: req.user_rating,
        user_comments: req.user_comments,
        breed_ratings: req.breed_ratings,
        heatmap_data: req.heatmap_data,
    };

    let feedback = use_case.execute(auth.user_id(), input).await?;

    Ok((StatusCode::CREATED, Json(FeedbackResponse::from(&feedback))))
}

/// GET /breed-detection/feedback/stats
pub async fn feedback_stats<R>(
    State(state): State<DetectionAppState<R>>,
    auth: AuthUser,
) -> DetectionResult<Json<FeedbackStatsResponse>>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = FeedbackStatsUseCase::new(state.repo.clone());

    let stats = use_case.stats(auth.user_id()).await?;

    Ok(Json(FeedbackStatsResponse::from(stats)))
}

/// GET /breed-detection/feedback/breed-stats
pub async fn breed_stats<R>(
    State(state): State<DetectionAppState<R>>,
    auth: AuthUser,
) -> DetectionResult<Json<Vec<BreedStatsResponse>>>
where
    R: FeedbackRepository + Clone + Send + Sync + 'static,
{
    let use_case = FeedbackStatsUseCase::new(state.repo.clone());

    let stats = use_case.breed_stats(auth.user_id()).await?;

    Ok(Json(stats.into_iter().map(BreedStatsResponse::from).collect()))
}

// ============================================================================
// BPA registration
// ============================================================================

/// POST /breed-detection/register-bpa
///
/// Finalizes a detection by registering the animal; same semantics as
/// POST /animals, including the tagId conflict.
pub async fn register_bpa<R>(
    State(state): State<DetectionAppState<R>>,
    auth: AuthUser,
    Json(req): Json<CreateAnimalRequest>,
) -> DetectionResult<(StatusCode, Json<AnimalResponse>)>
where
    R: AnimalRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterAnimalUseCase::new(state.repo.clone());

    let animal = use_case
        .execute(auth.user_id(), register_input(req))
        .await?;

    Ok((StatusCode::CREATED, Json(AnimalResponse::from(&animal))))
}
