//! Detection Backend Module
//!
//! The prediction gateway and the /breed-detection routes built on it.
//!
//! ## Availability Model
//! The external model is consumed as an opaque HTTP endpoint with a
//! bounded timeout. Any failure - timeout, non-2xx, malformed body -
//! degrades to a deterministic canned prediction instead of an error,
//! so the capture flow in the field always completes. Do not convert
//! that policy into a hard error.

pub mod application;
pub mod error;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::GatewayConfig;
pub use application::gateway::{PredictionGateway, PredictionResult};
pub use error::{DetectionError, DetectionResult};
pub use presentation::router::detection_router;
