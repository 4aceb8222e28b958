//! Application Layer
//!
//! The prediction gateway and its configuration.

pub mod config;
pub mod gateway;

pub use config::GatewayConfig;
pub use gateway::{PredictionGateway, PredictionResult};
