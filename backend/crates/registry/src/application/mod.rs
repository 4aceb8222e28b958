//! Application Layer
//!
//! Use cases for animals, prediction feedback, and support tickets.

pub mod delete_animal;
pub mod feedback_stats;
pub mod list_animals;
pub mod list_tickets;
pub mod record_feedback;
pub mod register_animal;
pub mod submit_ticket;

// Re-exports
pub use delete_animal::DeleteAnimalUseCase;
pub use feedback_stats::FeedbackStatsUseCase;
pub use list_animals::ListAnimalsUseCase;
pub use list_tickets::ListTicketsUseCase;
pub use record_feedback::{RecordFeedbackInput, RecordFeedbackUseCase};
pub use register_animal::{RegisterAnimalInput, RegisterAnimalUseCase};
pub use submit_ticket::{SubmitTicketInput, SubmitTicketUseCase};
