//! Infrastructure Layer
//!
//! Store implementations: Postgres, in-memory fallback, and the
//! failover wrapper that picks between them per call.

pub mod failover;
pub mod memory;
pub mod postgres;

pub use failover::FailoverUserRepository;
pub use memory::MemoryUserRepository;
pub use postgres::PgUserRepository;
