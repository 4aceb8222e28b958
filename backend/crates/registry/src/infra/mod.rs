//! Infrastructure Layer
//!
//! Store implementations: Postgres, in-memory fallback, and the
//! failover wrapper that picks between them per call.

pub mod failover;
pub mod memory;
pub mod postgres;

pub use failover::FailoverRegistryRepository;
pub use memory::MemoryRegistryRepository;
pub use postgres::PgRegistryRepository;
