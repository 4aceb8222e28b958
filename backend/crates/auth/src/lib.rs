//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository traits
//! - `application/` - Use cases and application services
//! - `infra/` - Postgres, in-memory, and failover store implementations
//! - `presentation/` - HTTP handlers, DTOs, router, middleware
//!
//! ## Features
//! - User signup/signin with email + password
//! - Signed, time-limited bearer tokens (HMAC-SHA256, 7-day expiry)
//! - Profile read/update for the authenticated user
//!
//! ## Availability Model
//! - Every store operation goes through a failover repository: Postgres
//!   first, the in-process list when the database is unreachable
//! - In-memory data is volatile and instance-local; that tradeoff is
//!   intentional and must not be papered over with synchronization

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use application::config::AuthConfig;
pub use application::token::TokenService;
pub use error::{AuthError, AuthResult};
pub use infra::failover::FailoverUserRepository;
pub use presentation::middleware::{AuthMiddlewareState, AuthUser, AuthenticatedUser};
pub use presentation::router::auth_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
