//! Presentation Layer
//!
//! HTTP handlers, DTOs, and the /breed-detection router.

pub mod dto;
pub mod handlers;
pub mod router;

pub use handlers::DetectionAppState;
pub use router::detection_router;
