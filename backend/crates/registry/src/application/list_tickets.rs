//! List Tickets Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::entity::support_ticket::SupportTicket;
use crate::domain::repository::TicketRepository;
use crate::error::RegistryResult;

/// List tickets use case
pub struct ListTicketsUseCase<R>
where
    R: TicketRepository,
{
    repo: Arc<R>,
}

impl<R> ListTicketsUseCase<R>
where
    R: TicketRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// The caller's own tickets, newest first
    pub async fn for_user(&self, user_id: &UserId) -> RegistryResult<Vec<SupportTicket>> {
        self.repo.list_for_user(user_id).await
    }

    /// Every ticket, newest first.
    ///
    /// Any authenticated user can call this; there is no admin gate.
    /// Known access gap: closing it needs an admin role model first,
    /// not a quiet permission check here.
    pub async fn all(&self) -> RegistryResult<Vec<SupportTicket>> {
        self.repo.list_all().await
    }
}
