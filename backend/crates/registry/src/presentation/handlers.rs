//! HTTP Handlers

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use std::sync::Arc;

use auth::presentation::middleware::AuthUser;
use kernel::id::AnimalId;

use crate::application::{
    DeleteAnimalUseCase, ListAnimalsUseCase, ListTicketsUseCase, RegisterAnimalInput,
    RegisterAnimalUseCase, SubmitTicketInput, SubmitTicketUseCase,
};
use crate::domain::repository::{AnimalRepository, TicketRepository};
use crate::error::RegistryResult;
use crate::presentation::dto::{
    AnimalResponse, CreateAnimalRequest, DeleteAnimalResponse, SubmitTicketRequest, TicketResponse,
};

/// Shared state for registry handlers
#[derive(Clone)]
pub struct RegistryAppState<R>
where
    R: Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
}

// ============================================================================
// Animals
// ============================================================================

/// GET /animals
pub async fn list_animals<R>(
    State(state): State<RegistryAppState<R>>,
    auth: AuthUser,
) -> RegistryResult<Json<Vec<AnimalResponse>>>
where
    R: AnimalRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListAnimalsUseCase::new(state.repo.clone());

    let animals = use_case.execute(auth.user_id()).await?;

    Ok(Json(animals.iter().map(AnimalResponse::from).collect()))
}

/// POST /animals
pub async fn create_animal<R>(
    State(state): State<RegistryAppState<R>>,
    auth: AuthUser,
    Json(req): Json<CreateAnimalRequest>,
) -> RegistryResult<(StatusCode, Json<AnimalResponse>)>
where
    R: AnimalRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterAnimalUseCase::new(state.repo.clone());

    let animal = use_case
        .execute(auth.user_id(), register_input(req))
        .await?;

    Ok((StatusCode::CREATED, Json(AnimalResponse::from(&animal))))
}

/// DELETE /animals/{id}
pub async fn delete_animal<R>(
    State(state): State<RegistryAppState<R>>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> RegistryResult<Json<DeleteAnimalResponse>>
where
    R: AnimalRepository + Clone + Send + Sync + 'static,
{
    let use_case = DeleteAnimalUseCase::new(state.repo.clone());

    use_case
        .execute(auth.user_id(), &AnimalId::from_string(id))
        .await?;

    Ok(Json(DeleteAnimalResponse { ok: true }))
}

/// Map the wire request into use-case input
pub fn register_input(req: CreateAnimalRequest) -> RegisterAnimalInput {
    RegisterAnimalInput {
        breed: req.breed,
        animal_type: req.animal_type,
        age: req.age,
        gender: req.gender,
        tag_id: req.tag_id,
        location: req.location,
        owner_name: req.owner_name,
        notes: req.notes,
        image_uri: req.image_uri,
        confidence: req.confidence,
        feedback_id: req.feedback_id,
        breed_ratings: req.breed_ratings,
        registration_date: req.registration_date,
    }
}

// ============================================================================
// Support tickets
// ============================================================================

/// POST /feedback
pub async fn submit_ticket<R>(
    State(state): State<RegistryAppState<R>>,
    auth: AuthUser,
    Json(req): Json<SubmitTicketRequest>,
) -> RegistryResult<(StatusCode, Json<TicketResponse>)>
where
    R: TicketRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitTicketUseCase::new(state.repo.clone());

    let input = SubmitTicketInput {
        kind: req.kind,
        subject: req.subject,
        message: req.message,
        user_email: req.user_email,
        user_name: req.user_name,
        timestamp: req.timestamp,
    };

    let ticket = use_case.execute(auth.user_id(), input).await?;

    Ok((StatusCode::CREATED, Json(TicketResponse::from(&ticket))))
}

/// GET /feedback/my-feedback
pub async fn my_tickets<R>(
    State(state): State<RegistryAppState<R>>,
    auth: AuthUser,
) -> RegistryResult<Json<Vec<TicketResponse>>>
where
    R: TicketRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListTicketsUseCase::new(state.repo.clone());

    let tickets = use_case.for_user(auth.user_id()).await?;

    Ok(Json(tickets.iter().map(TicketResponse::from).collect()))
}

/// GET /feedback/all
///
/// Open to every authenticated user; the admin gate the mobile app
/// assumes does not exist yet.
pub async fn all_tickets<R>(
    State(state): State<RegistryAppState<R>>,
    _auth: AuthUser,
) -> RegistryResult<Json<Vec<TicketResponse>>>
where
    R: TicketRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListTicketsUseCase::new(state.repo.clone());

    let tickets = use_case.all().await?;

    Ok(Json(tickets.iter().map(TicketResponse::from).collect()))
}
