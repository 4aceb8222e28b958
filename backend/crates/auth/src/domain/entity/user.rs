//! User Entity
//!
//! Account record for a livestock owner. The password never leaves this
//! entity as anything but an Argon2id hash.

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::value_object::email::Email;

/// User entity
#[derive(Debug, Clone)]
pub struct User {
    /// Identifier; UUID from the durable store or `mem-<n>` from the
    /// in-memory fallback
    pub user_id: UserId,
    /// Display name
    pub name: String,
    /// Unique, lowercased email address
    pub email: Email,
    /// Argon2id PHC hash; excluded from every API response
    pub password_hash: HashedPassword,
    /// Profile image reference
    pub profile_image: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    /// Count of registered animals
    pub total_animals: i64,
    /// Last successful login time
    pub last_login_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user, as at signup time
    pub fn new(name: String, email: Email, password_hash: HashedPassword) -> Self {
        let now = Utc::now();

        Self {
            user_id: UserId::new(),
            name,
            email,
            password_hash,
            profile_image: None,
            phone: None,
            location: None,
            total_animals: 0,
            last_login_at: Some(now),
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// Record successful login
    pub fn record_login(&mut self) {
        let now = Utc::now();
        self.last_login_at = Some(now);
        self.updated_at = now;
    }

    /// Apply a profile update; absent fields are left untouched
    pub fn apply_profile_update(
        &mut self,
        name: Option<String>,
        phone: Option<String>,
        location: Option<String>,
    ) {
        if let Some(name) = name {
            self.name = name;
        }
        if let Some(phone) = phone {
            self.phone = Some(phone);
        }
        if let Some(location) = location {
            self.location = Some(location);
        }
        self.updated_at = Utc::now();
    }
}
