pub mod animal_type;
pub mod breed_rating;
pub mod gender;
pub mod prediction;
pub mod ticket;

pub use animal_type::AnimalType;
pub use breed_rating::BreedRating;
pub use gender::Gender;
pub use prediction::{BreedPrediction, HeatmapData};
pub use ticket::{TicketKind, TicketStatus};
