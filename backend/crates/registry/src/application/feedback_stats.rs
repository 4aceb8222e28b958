//! Feedback Statistics Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::{BreedRatingStats, FeedbackRepository, FeedbackStats};
use crate::error::RegistryResult;

/// Feedback statistics use case
pub struct FeedbackStatsUseCase<R>
where
    R: FeedbackRepository,
{
    repo: Arc<R>,
}

impl<R> FeedbackStatsUseCase<R>
where
    R: FeedbackRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Accuracy totals over the user's feedback
    pub async fn stats(&self, user_id: &UserId) -> RegistryResult<FeedbackStats> {
        self.repo.stats_for_user(user_id).await
    }

    /// Per-breed rating aggregates, highest average first
    pub async fn breed_stats(&self, user_id: &UserId) -> RegistryResult<Vec<BreedRatingStats>> {
        self.repo.breed_stats_for_user(user_id).await
    }
}
