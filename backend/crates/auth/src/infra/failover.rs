//! Failover Repository
//!
//! Selects between the Postgres and in-memory backends per operation,
//! not once at startup: every call tries the durable store first, so a
//! recovered database is picked up automatically with no restart.
//!
//! Only connection-class failures trigger the fallback. Domain failures
//! (duplicate email, row mapping errors) surface to the caller unchanged
//! no matter which backend produced them.

use chrono::{DateTime, Utc};
use kernel::error::conversions::is_connection_error;
use kernel::id::UserId;
use sqlx::PgPool;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};
use crate::infra::memory::MemoryUserRepository;
use crate::infra::postgres::PgUserRepository;

/// Whether an error means the durable store is unreachable
fn store_unreachable(err: &AuthError) -> bool {
    match err {
        AuthError::Database(e) => is_connection_error(e),
        _ => false,
    }
}

/// Per-call failover between Postgres and the in-memory store
#[derive(Clone)]
pub struct FailoverUserRepository {
    pg: Option<PgUserRepository>,
    memory: MemoryUserRepository,
}

impl FailoverUserRepository {
    pub fn new(pool: Option<PgPool>) -> Self {
        Self {
            pg: pool.map(PgUserRepository::new),
            memory: MemoryUserRepository::new(),
        }
    }

    /// Build a memory-only repository (no database configured)
    pub fn memory_only() -> Self {
        Self::new(None)
    }
}

macro_rules! with_failover {
    ($self:ident, $op:literal, |$repo:ident| $call:expr) => {
        match &$self.pg {
            Some($repo) => match $call {
                Err(e) if store_unreachable(&e) => {
                    tracing::warn!(
                        operation = $op,
                        error = %e,
                        "Database unreachable, serving from in-memory user store"
                    );
                    let $repo = &$self.memory;
                    $call
                }
                other => other,
            },
            None => {
                let $repo = &$self.memory;
                $call
            }
        }
    };
}

impl UserRepository for FailoverUserRepository {
    async fn insert(&self, user: User) -> AuthResult<User> {
        with_failover!(self, "users.insert", |repo| repo
            .insert(user.clone())
            .await)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        with_failover!(self, "users.find_by_email", |repo| repo
            .find_by_email(email)
            .await)
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        with_failover!(self, "users.find_by_id", |repo| repo
            .find_by_id(user_id)
            .await)
    }

    async fn update_profile(&self, user: &User) -> AuthResult<()> {
        with_failover!(self, "users.update_profile", |repo| repo
            .update_profile(user)
            .await)
    }

    async fn record_login(&self, user_id: &UserId, at: DateTime<Utc>) -> AuthResult<()> {
        with_failover!(self, "users.record_login", |repo| repo
            .record_login(user_id, at)
            .await)
    }
}
