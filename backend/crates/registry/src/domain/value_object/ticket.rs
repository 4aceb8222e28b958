//! Support Ticket Value Objects

use std::str::FromStr;

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::error::RegistryError;

/// Category of a support ticket
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketKind {
    #[display("general")]
    General,
    #[display("bug")]
    Bug,
    #[display("feature")]
    Feature,
}

impl TicketKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TicketKind::General => "general",
            TicketKind::Bug => "bug",
            TicketKind::Feature => "feature",
        }
    }
}

impl FromStr for TicketKind {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "general" => Ok(TicketKind::General),
            "bug" => Ok(TicketKind::Bug),
            "feature" => Ok(TicketKind::Feature),
            other => Err(RegistryError::Validation(format!(
                "type must be general, bug, or feature, got '{}'",
                other
            ))),
        }
    }
}

/// Lifecycle state of a support ticket; new tickets are pending
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketStatus {
    #[default]
    #[display("pending")]
    Pending,
    #[display("resolved")]
    Resolved,
}

impl TicketStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Pending => "pending",
            TicketStatus::Resolved => "resolved",
        }
    }
}

impl FromStr for TicketStatus {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TicketStatus::Pending),
            "resolved" => Ok(TicketStatus::Resolved),
            other => Err(RegistryError::Internal(format!(
                "Unknown ticket status '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse() {
        assert_eq!("bug".parse::<TicketKind>().unwrap(), TicketKind::Bug);
        assert!("urgent".parse::<TicketKind>().is_err());
    }

    #[test]
    fn test_status_default_is_pending() {
        assert_eq!(TicketStatus::default(), TicketStatus::Pending);
        assert_eq!(TicketStatus::Pending.as_str(), "pending");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&TicketKind::Feature).unwrap(),
            "\"feature\""
        );
        assert_eq!(
            serde_json::to_string(&TicketStatus::Pending).unwrap(),
            "\"pending\""
        );
    }
}
