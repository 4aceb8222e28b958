//! In-Memory Repository Implementations
//!
//! Fallback store used when the database is unreachable: ordered
//! in-process lists behind a mutex, with identifiers synthesized from
//! monotonically increasing counters. Volatile and instance-local by
//! design.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use kernel::id::{AnimalId, FeedbackId, TicketId, UserId};

use crate::domain::entity::{
    animal::Animal, prediction_feedback::PredictionFeedback, support_ticket::SupportTicket,
};
use crate::domain::repository::{
    AnimalRepository, BreedRatingStats, FeedbackRepository, FeedbackStats, TicketRepository,
};
use crate::error::{RegistryError, RegistryResult};

#[derive(Default)]
struct MemoryRecords {
    animals: Vec<Animal>,
    feedback: Vec<PredictionFeedback>,
    tickets: Vec<SupportTicket>,
    next_animal_id: u64,
    next_feedback_id: u64,
    next_ticket_id: u64,
}

/// In-memory registry repository
#[derive(Clone, Default)]
pub struct MemoryRegistryRepository {
    inner: Arc<Mutex<MemoryRecords>>,
}

impl MemoryRegistryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> RegistryResult<MutexGuard<'_, MemoryRecords>> {
        self.inner
            .lock()
            .map_err(|_| RegistryError::Internal("In-memory record store lock poisoned".to_string()))
    }

    /// Number of stored animals (test support)
    pub fn animal_count(&self) -> usize {
        self.inner.lock().map(|g| g.animals.len()).unwrap_or(0)
    }
}

impl AnimalRepository for MemoryRegistryRepository {
    async fn insert(&self, mut animal: Animal) -> RegistryResult<Animal> {
        let mut store = self.lock()?;

        if store.animals.iter().any(|a| a.tag_id == animal.tag_id) {
            return Err(RegistryError::DuplicateTagId);
        }

        store.next_animal_id += 1;
        animal.animal_id = AnimalId::from_counter(store.next_animal_id);

        store.animals.push(animal.clone());
        Ok(animal)
    }

    async fn list_for_user(&self, user_id: &UserId) -> RegistryResult<Vec<Animal>> {
        let store = self.lock()?;

        let mut animals: Vec<Animal> = store
            .animals
            .iter()
            .filter(|a| &a.user_id == user_id)
            .cloned()
            .collect();
        animals.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(animals)
    }

    async fn delete_owned(&self, user_id: &UserId, animal_id: &AnimalId) -> RegistryResult<bool> {
        let mut store = self.lock()?;

        let position = store
            .animals
            .iter()
            .position(|a| &a.animal_id == animal_id && &a.user_id == user_id);

        match position {
            Some(index) => {
                store.animals.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

impl FeedbackRepository for MemoryRegistryRepository {
    async fn insert(&self, mut feedback: PredictionFeedback) -> RegistryResult<PredictionFeedback> {
        let mut store = self.lock()?;

        store.next_feedback_id += 1;
        feedback.feedback_id = FeedbackId::from_counter(store.next_feedback_id);

        store.feedback.push(feedback.clone());
        Ok(feedback)
    }

    async fn stats_for_user(&self, user_id: &UserId) -> RegistryResult<FeedbackStats> {
        let store = self.lock()?;

        let records: Vec<&PredictionFeedback> = store
            .feedback
            .iter()
            .filter(|f| &f.user_id == user_id)
            .collect();

        if records.is_empty() {
            return Ok(FeedbackStats::empty());
        }

        let total = records.len() as i64;
        let correct = records.iter().filter(|f| f.is_correct).count() as i64;
        let rating_sum: i64 = records.iter().map(|f| f.user_rating as i64).sum();

        Ok(FeedbackStats {
            total_predictions: total,
            correct_predictions: correct,
            average_rating: rating_sum as f64 / total as f64,
            accuracy: (correct as f64 / total as f64) * 100.0,
        })
    }

    async fn breed_stats_for_user(
        &self,
        user_id: &UserId,
    ) -> RegistryResult<Vec<BreedRatingStats>> {
        let store = self.lock()?;

        // breed -> (sum, count, max, min)
        let mut groups: BTreeMap<String, (i64, i64, i32, i32)> = BTreeMap::new();

        for feedback in store.feedback.iter().filter(|f| &f.user_id == user_id) {
            for rating in &feedback.breed_ratings {
                let entry = groups
                    .entry(rating.breed.clone())
                    .or_insert((0, 0, i32::MIN, i32::MAX));
                entry.0 += rating.rating as i64;
                entry.1 += 1;
                entry.2 = entry.2.max(rating.rating);
                entry.3 = entry.3.min(rating.rating);
            }
        }

        let mut stats: Vec<BreedRatingStats> = groups
            .into_iter()
            .map(|(breed, (sum, count, max, min))| BreedRatingStats {
                breed,
                average_rating: sum as f64 / count as f64,
                total_ratings: count,
                max_rating: max,
                min_rating: min,
            })
            .collect();

        stats.sort_by(|a, b| {
            b.average_rating
                .partial_cmp(&a.average_rating)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        Ok(stats)
    }
}

impl TicketRepository for MemoryRegistryRepository {
    async fn insert(&self, mut ticket: SupportTicket) -> RegistryResult<SupportTicket> {
        let mut store = self.lock()?;

        store.next_ticket_id += 1;
        ticket.ticket_id = TicketId::from_counter(store.next_ticket_id);

        store.tickets.push(ticket.clone());
        Ok(ticket)
    }

    async fn list_for_user(&self, user_id: &UserId) -> RegistryResult<Vec<SupportTicket>> {
        let store = self.lock()?;

        let mut tickets: Vec<SupportTicket> = store
            .tickets
            .iter()
            .filter(|t| &t.user_id == user_id)
            .cloned()
            .collect();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(tickets)
    }

    async fn list_all(&self) -> RegistryResult<Vec<SupportTicket>> {
        let store = self.lock()?;

        let mut tickets: Vec<SupportTicket> = store.tickets.to_vec();
        tickets.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(tickets)
    }
}
