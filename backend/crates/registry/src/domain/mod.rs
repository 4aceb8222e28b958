//! Domain Layer
//!
//! Contains entities, value objects, and repository traits.

pub mod entity;
pub mod repository;
pub mod value_object;

// Re-exports
pub use entity::{animal::Animal, prediction_feedback::PredictionFeedback, support_ticket::SupportTicket};
pub use repository::{AnimalRepository, FeedbackRepository, TicketRepository};
