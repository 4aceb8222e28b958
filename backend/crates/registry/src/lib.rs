//! Registry Backend Module
//!
//! The record store behind every authenticated route: animal
//! registrations, breed-prediction feedback, and support tickets.
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases
//! - `infra/` - Postgres, in-memory, and failover store implementations
//! - `presentation/` - HTTP handlers, DTOs, routers
//!
//! ## Invariants
//! - `tagId` is unique across all animals; a duplicate insert surfaces
//!   as a conflict, not a generic failure
//! - Ownership checks are folded into existence checks: deleting an
//!   animal you do not own reports 404, never 403
//! - `isCorrect` on prediction feedback is computed server-side, never
//!   trusted from the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use error::{RegistryError, RegistryResult};
pub use infra::failover::FailoverRegistryRepository;
pub use presentation::router::{animals_router, tickets_router};
