//! Submit Ticket Use Case

use std::str::FromStr;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::entity::support_ticket::SupportTicket;
use crate::domain::repository::TicketRepository;
use crate::domain::value_object::TicketKind;
use crate::error::{RegistryError, RegistryResult};

/// Submit ticket input
pub struct SubmitTicketInput {
    pub kind: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub timestamp: Option<DateTime<Utc>>,
}

/// Submit ticket use case
pub struct SubmitTicketUseCase<R>
where
    R: TicketRepository,
{
    repo: Arc<R>,
}

impl<R> SubmitTicketUseCase<R>
where
    R: TicketRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(
        &self,
        user_id: &UserId,
        input: SubmitTicketInput,
    ) -> RegistryResult<SupportTicket> {
        let kind = match input.kind {
            Some(kind) if !kind.trim().is_empty() => TicketKind::from_str(&kind)?,
            _ => return Err(RegistryError::MissingFields),
        };
        let subject = match input.subject {
            Some(subject) if !subject.trim().is_empty() => subject,
            _ => return Err(RegistryError::MissingFields),
        };
        let message = match input.message {
            Some(message) if !message.trim().is_empty() => message,
            _ => return Err(RegistryError::MissingFields),
        };

        let ticket = SupportTicket::new(
            user_id.clone(),
            kind,
            subject,
            message,
            input.user_email,
            input.user_name,
            input.timestamp,
        );

        let ticket = self.repo.insert(ticket).await?;

        tracing::info!(
            user_id = %ticket.user_id,
            ticket_id = %ticket.ticket_id,
            kind = %ticket.kind,
            "Support ticket submitted"
        );

        Ok(ticket)
    }
}
