//! PostgreSQL Repository Implementations

use std::str::FromStr;

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_unique_violation;
use kernel::id::{AnimalId, FeedbackId, TicketId, UserId};
use sqlx::PgPool;
use sqlx::types::Json;

use crate::domain::entity::{
    animal::Animal, prediction_feedback::PredictionFeedback, support_ticket::SupportTicket,
};
use crate::domain::repository::{
    AnimalRepository, BreedRatingStats, FeedbackRepository, FeedbackStats, TicketRepository,
};
use crate::domain::value_object::{
    AnimalType, BreedPrediction, BreedRating, Gender, HeatmapData, TicketKind, TicketStatus,
};
use crate::error::{RegistryError, RegistryResult};

/// PostgreSQL-backed registry repository
#[derive(Clone)]
pub struct PgRegistryRepository {
    pool: PgPool,
}

impl PgRegistryRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Animal Repository Implementation
// ============================================================================

impl AnimalRepository for PgRegistryRepository {
    async fn insert(&self, animal: Animal) -> RegistryResult<Animal> {
        let result = sqlx::query(
            r#"
            INSERT INTO animals (
                animal_id,
                user_id,
                breed,
                animal_type,
                age,
                gender,
                tag_id,
                location,
                owner_name,
                notes,
                image_uri,
                confidence,
                feedback_id,
                breed_ratings,
                registration_date,
                created_at,
                updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17)
            "#,
        )
        .bind(animal.animal_id.as_str())
        .bind(animal.user_id.as_str())
        .bind(&animal.breed)
        .bind(animal.animal_type.as_str())
        .bind(animal.age)
        .bind(animal.gender.as_str())
        .bind(&animal.tag_id)
        .bind(&animal.location)
        .bind(&animal.owner_name)
        .bind(&animal.notes)
        .bind(&animal.image_uri)
        .bind(animal.confidence)
        .bind(&animal.feedback_id)
        .bind(Json(&animal.breed_ratings))
        .bind(animal.registration_date)
        .bind(animal.created_at)
        .bind(animal.updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(animal),
            Err(e) if is_unique_violation(&e) => Err(RegistryError::DuplicateTagId),
            Err(e) => Err(e.into()),
        }
    }

    async fn list_for_user(&self, user_id: &UserId) -> RegistryResult<Vec<Animal>> {
        let rows = sqlx::query_as::<_, AnimalRow>(
            r#"
            SELECT
                animal_id,
                user_id,
                breed,
                animal_type,
                age,
                gender,
                tag_id,
                location,
                owner_name,
                notes,
                image_uri,
                confidence,
                feedback_id,
                breed_ratings,
                registration_date,
                created_at,
                updated_at
            FROM animals
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_animal()).collect()
    }

    async fn delete_owned(&self, user_id: &UserId, animal_id: &AnimalId) -> RegistryResult<bool> {
        let deleted = sqlx::query("DELETE FROM animals WHERE animal_id = $1 AND user_id = $2")
            .bind(animal_id.as_str())
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(deleted > 0)
    }
}

// ============================================================================
// Feedback Repository Implementation
// ============================================================================

impl FeedbackRepository for PgRegistryRepository {
    async fn insert(&self, feedback: PredictionFeedback) -> RegistryResult<PredictionFeedback> {
        sqlx::query(
            r#"
            INSERT INTO prediction_feedback (
                feedback_id,
                user_id,
                image_uri,
                predicted_breeds,
                user_selected_breed,
                user_rating,
                user_comments,
                breed_ratings,
                heatmap_data,
                is_correct,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
            "#,
        )
        .bind(feedback.feedback_id.as_str())
        .bind(feedback.user_id.as_str())
        .bind(&feedback.image_uri)
        .bind(Json(&feedback.predicted_breeds))
        .bind(&feedback.user_selected_breed)
        .bind(feedback.user_rating)
        .bind(&feedback.user_comments)
        .bind(Json(&feedback.breed_ratings))
        .bind(feedback.heatmap_data.as_ref().map(Json))
        .bind(feedback.is_correct)
        .bind(feedback.created_at)
        .execute(&self.pool)
        .await?;

        Ok(feedback)
    }

    async fn stats_for_user(&self, user_id: &UserId) -> RegistryResult<FeedbackStats> {
        let row = sqlx::query_as::<_, StatsRow>(
            r#"
            SELECT
                COUNT(*) AS total_predictions,
                COUNT(*) FILTER (WHERE is_correct) AS correct_predictions,
                COALESCE(AVG(user_rating::float8), 0) AS average_rating
            FROM prediction_feedback
            WHERE user_id = $1
            "#,
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_stats())
    }

    async fn breed_stats_for_user(
        &self,
        user_id: &UserId,
    ) -> RegistryResult<Vec<BreedRatingStats>> {
        let rows = sqlx::query_as::<_, BreedStatsRow>(
            r#"
            SELECT
                elem->>'breed' AS breed,
                AVG((elem->>'rating')::float8) AS average_rating,
                COUNT(*) AS total_ratings,
                MAX((elem->>'rating')::int) AS max_rating,
                MIN((elem->>'rating')::int) AS min_rating
            FROM prediction_feedback,
                 jsonb_array_elements(breed_ratings) AS elem
            WHERE user_id = $1
            GROUP BY elem->>'breed'
            ORDER BY average_rating DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_stats()).collect())
    }
}

// ============================================================================
// Ticket Repository Implementation
// ============================================================================

impl TicketRepository for PgRegistryRepository {
    async fn insert(&self, ticket: SupportTicket) -> RegistryResult<SupportTicket> {
        sqlx::query(
            r#"
            INSERT INTO support_tickets (
                ticket_id,
                user_id,
                kind,
                subject,
                message,
                user_email,
                user_name,
                submitted_at,
                status,
                created_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(ticket.ticket_id.as_str())
        .bind(ticket.user_id.as_str())
        .bind(ticket.kind.as_str())
        .bind(&ticket.subject)
        .bind(&ticket.message)
        .bind(&ticket.user_email)
        .bind(&ticket.user_name)
        .bind(ticket.submitted_at)
        .bind(ticket.status.as_str())
        .bind(ticket.created_at)
        .execute(&self.pool)
        .await?;

        Ok(ticket)
    }

    async fn list_for_user(&self, user_id: &UserId) -> RegistryResult<Vec<SupportTicket>> {
        let rows = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT
                ticket_id,
                user_id,
                kind,
                subject,
                message,
                user_email,
                user_name,
                submitted_at,
                status,
                created_at
            FROM support_tickets
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_ticket()).collect()
    }

    async fn list_all(&self) -> RegistryResult<Vec<SupportTicket>> {
        let rows = sqlx::query_as::<_, TicketRow>(
            r#"
            SELECT
                ticket_id,
                user_id,
                kind,
                subject,
                message,
                user_email,
                user_name,
                submitted_at,
                status,
                created_at
            FROM support_tickets
            ORDER BY created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_ticket()).collect()
    }
}

// ============================================================================
// Row types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct AnimalRow {
    animal_id: String,
    user_id: String,
    breed: String,
    animal_type: String,
    age: i32,
    gender: String,
    tag_id: String,
    location: Option<String>,
    owner_name: Option<String>,
    notes: Option<String>,
    image_uri: Option<String>,
    confidence: Option<i32>,
    feedback_id: Option<String>,
    breed_ratings: Json<Vec<BreedRating>>,
    registration_date: DateTime<Utc>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AnimalRow {
    fn into_animal(self) -> RegistryResult<Animal> {
        let animal_type = AnimalType::from_str(&self.animal_type)
            .map_err(|_| RegistryError::Internal(format!("Invalid animal_type: {}", self.animal_type)))?;
        let gender = Gender::from_str(&self.gender)
            .map_err(|_| RegistryError::Internal(format!("Invalid gender: {}", self.gender)))?;

        Ok(Animal {
            animal_id: AnimalId::from_string(self.animal_id),
            user_id: UserId::from_string(self.user_id),
            breed: self.breed,
            animal_type,
            age: self.age,
            gender,
            tag_id: self.tag_id,
            location: self.location,
            owner_name: self.owner_name,
            notes: self.notes,
            image_uri: self.image_uri,
            confidence: self.confidence,
            feedback_id: self.feedback_id,
            breed_ratings: self.breed_ratings.0,
            registration_date: self.registration_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

#[derive(sqlx::FromRow)]
struct StatsRow {
    total_predictions: i64,
    correct_predictions: i64,
    average_rating: f64,
}

impl StatsRow {
    fn into_stats(self) -> FeedbackStats {
        let accuracy = if self.total_predictions > 0 {
            (self.correct_predictions as f64 / self.total_predictions as f64) * 100.0
        } else {
            0.0
        };

        FeedbackStats {
            total_predictions: self.total_predictions,
            correct_predictions: self.correct_predictions,
            average_rating: self.average_rating,
            accuracy,
        }
    }
}

#[derive(sqlx::FromRow)]
struct BreedStatsRow {
    breed: String,
    average_rating: f64,
    total_ratings: i64,
    max_rating: i32,
    min_rating: i32,
}

impl BreedStatsRow {
    fn into_stats(self) -> BreedRatingStats {
        BreedRatingStats {
            breed: self.breed,
            average_rating: self.average_rating,
            total_ratings: self.total_ratings,
            max_rating: self.max_rating,
            min_rating: self.min_rating,
        }
    }
}

#[derive(sqlx::FromRow)]
struct TicketRow {
    ticket_id: String,
    user_id: String,
    kind: String,
    subject: String,
    message: String,
    user_email: Option<String>,
    user_name: Option<String>,
    submitted_at: DateTime<Utc>,
    status: String,
    created_at: DateTime<Utc>,
}

impl TicketRow {
    fn into_ticket(self) -> RegistryResult<SupportTicket> {
        let kind = TicketKind::from_str(&self.kind)
            .map_err(|_| RegistryError::Internal(format!("Invalid ticket kind: {}", self.kind)))?;
        let status = TicketStatus::from_str(&self.status)?;

        Ok(SupportTicket {
            ticket_id: TicketId::from_string(self.ticket_id),
            user_id: UserId::from_string(self.user_id),
            kind,
            subject: self.subject,
            message: self.message,
            user_email: self.user_email,
            user_name: self.user_name,
            submitted_at: self.submitted_at,
            status,
            created_at: self.created_at,
        })
    }
}
