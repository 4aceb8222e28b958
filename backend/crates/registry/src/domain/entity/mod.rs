pub mod animal;
pub mod prediction_feedback;
pub mod support_ticket;

pub use animal::Animal;
pub use prediction_feedback::PredictionFeedback;
pub use support_ticket::SupportTicket;
