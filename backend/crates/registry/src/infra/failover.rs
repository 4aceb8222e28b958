//! Failover Repository
//!
//! Per-operation selection between the Postgres and in-memory record
//! stores. Every call tries the durable store first; only
//! connection-class failures fall back, so conflicts and validation
//! failures keep their meaning regardless of backend, and a recovered
//! database is used again on the very next call.

use kernel::error::conversions::is_connection_error;
use kernel::id::{AnimalId, UserId};
use sqlx::PgPool;

use crate::domain::entity::{
    animal::Animal, prediction_feedback::PredictionFeedback, support_ticket::SupportTicket,
};
use crate::domain::repository::{
    AnimalRepository, BreedRatingStats, FeedbackRepository, FeedbackStats, TicketRepository,
};
use crate::error::{RegistryError, RegistryResult};
use crate::infra::memory::MemoryRegistryRepository;
use crate::infra::postgres::PgRegistryRepository;

/// Whether an error means the durable store is unreachable
fn store_unreachable(err: &RegistryError) -> bool {
    match err {
        RegistryError::Database(e) => is_connection_error(e),
        _ => false,
    }
}

/// Per-call failover between Postgres and the in-memory store
#[derive(Clone)]
pub struct FailoverRegistryRepository {
    pg: Option<PgRegistryRepository>,
    memory: MemoryRegistryRepository,
}

impl FailoverRegistryRepository {
    pub fn new(pool: Option<PgPool>) -> Self {
        Self {
            pg: pool.map(PgRegistryRepository::new),
            memory: MemoryRegistryRepository::new(),
        }
    }

    /// Build a memory-only repository (no database configured)
    pub fn memory_only() -> Self {
        Self::new(None)
    }
}

macro_rules! with_failover {
    ($self:ident, $op:literal, |$repo:ident| $call:expr) => {
        match &$self.pg {
            Some($repo) => match $call {
                Err(e) if store_unreachable(&e) => {
                    tracing::warn!(
                        operation = $op,
                        error = %e,
                        "Database unreachable, serving from in-memory record store"
                    );
                    let $repo = &$self.memory;
                    $call
                }
                other => other,
            },
            None => {
                let $repo = &$self.memory;
                $call
            }
        }
    };
}

impl AnimalRepository for FailoverRegistryRepository {
    async fn insert(&self, animal: Animal) -> RegistryResult<Animal> {
        with_failover!(self, "animals.insert", |repo| AnimalRepository::insert(
            repo,
            animal.clone()
        )
        .await)
    }

    async fn list_for_user(&self, user_id: &UserId) -> RegistryResult<Vec<Animal>> {
        with_failover!(self, "animals.list_for_user", |repo| AnimalRepository::list_for_user(
            repo, user_id
        )
        .await)
    }

    async fn delete_owned(&self, user_id: &UserId, animal_id: &AnimalId) -> RegistryResult<bool> {
        with_failover!(self, "animals.delete_owned", |repo| repo
            .delete_owned(user_id, animal_id)
            .await)
    }
}

impl FeedbackRepository for FailoverRegistryRepository {
    async fn insert(&self, feedback: PredictionFeedback) -> RegistryResult<PredictionFeedback> {
        with_failover!(self, "feedback.insert", |repo| FeedbackRepository::insert(
            repo,
            feedback.clone()
        )
        .await)
    }

    async fn stats_for_user(&self, user_id: &UserId) -> RegistryResult<FeedbackStats> {
        with_failover!(self, "feedback.stats_for_user", |repo| repo
            .stats_for_user(user_id)
            .await)
    }

    async fn breed_stats_for_user(
        &self,
        user_id: &UserId,
    ) -> RegistryResult<Vec<BreedRatingStats>> {
        with_failover!(self, "feedback.breed_stats_for_user", |repo| repo
            .breed_stats_for_user(user_id)
            .await)
    }
}

impl TicketRepository for FailoverRegistryRepository {
    async fn insert(&self, ticket: SupportTicket) -> RegistryResult<SupportTicket> {
        with_failover!(self, "tickets.insert", |repo| TicketRepository::insert(
            repo,
            ticket.clone()
        )
        .await)
    }

    async fn list_for_user(&self, user_id: &UserId) -> RegistryResult<Vec<SupportTicket>> {
        with_failover!(self, "tickets.list_for_user", |repo| TicketRepository::list_for_user(
            repo, user_id
        )
        .await)
    }

    async fn list_all(&self) -> RegistryResult<Vec<SupportTicket>> {
        with_failover!(self, "tickets.list_all", |repo| repo.list_all().await)
    }
}
