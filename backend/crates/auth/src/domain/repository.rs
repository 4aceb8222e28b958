//! Repository Traits
//!
//! Interfaces for credential persistence. Implementations live in the
//! infrastructure layer: Postgres, in-memory, and the failover wrapper
//! that selects between them per call.

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::value_object::email::Email;
use crate::error::AuthResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Insert a new user, enforcing email uniqueness (`EmailTaken` on
    /// collision). Returns the stored user; the backend may assign its
    /// own identifier.
    async fn insert(&self, user: User) -> AuthResult<User>;

    /// Find user by email
    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>>;

    /// Persist profile-field changes (name, phone, location)
    async fn update_profile(&self, user: &User) -> AuthResult<()>;

    /// Record a successful login. The in-memory backend treats this as a
    /// no-op; only the durable store tracks last-login times.
    async fn record_login(&self, user_id: &UserId, at: DateTime<Utc>) -> AuthResult<()>;
}
