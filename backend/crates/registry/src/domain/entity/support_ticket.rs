//! Support Ticket Entity
//!
//! Generic user feedback (bug reports, feature requests). Append-only.

use chrono::{DateTime, Utc};
use kernel::id::{TicketId, UserId};

use crate::domain::value_object::{TicketKind, TicketStatus};

/// Support ticket entity
#[derive(Debug, Clone)]
pub struct SupportTicket {
    pub ticket_id: TicketId,
    pub user_id: UserId,
    pub kind: TicketKind,
    pub subject: String,
    pub message: String,
    /// Submitter contact details as supplied at submission time
    pub user_email: Option<String>,
    pub user_name: Option<String>,
    pub submitted_at: DateTime<Utc>,
    pub status: TicketStatus,
    pub created_at: DateTime<Utc>,
}

impl SupportTicket {
    /// Create a pending ticket; submittedAt defaults to now
    pub fn new(
        user_id: UserId,
        kind: TicketKind,
        subject: String,
        message: String,
        user_email: Option<String>,
        user_name: Option<String>,
        submitted_at: Option<DateTime<Utc>>,
    ) -> Self {
        let now = Utc::now();

        Self {
            ticket_id: TicketId::new(),
            user_id,
            kind,
            subject,
            message,
            user_email,
            user_name,
            submitted_at: submitted_at.unwrap_or(now),
            status: TicketStatus::default(),
            created_at: now,
        }
    }
}
