//! In-Memory Repository Implementation
//!
//! Fallback store used when the database is unreachable: an ordered
//! in-process list behind a mutex, with identifiers synthesized from a
//! monotonically increasing counter. Data is lost on restart and is not
//! shared across instances; that is the documented tradeoff, not a bug
//! to fix here.

use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use kernel::id::UserId;

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::email::Email;
use crate::error::{AuthError, AuthResult};

#[derive(Default)]
struct MemoryUsers {
    users: Vec<User>,
    next_id: u64,
}

/// In-memory user repository
#[derive(Clone, Default)]
pub struct MemoryUserRepository {
    inner: Arc<Mutex<MemoryUsers>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AuthResult<MutexGuard<'_, MemoryUsers>> {
        self.inner
            .lock()
            .map_err(|_| AuthError::Internal("In-memory user store lock poisoned".to_string()))
    }

    /// Number of stored users (test support)
    pub fn len(&self) -> usize {
        self.inner.lock().map(|g| g.users.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl UserRepository for MemoryUserRepository {
    async fn insert(&self, mut user: User) -> AuthResult<User> {
        let mut store = self.lock()?;

        if store.users.iter().any(|u| u.email == user.email) {
            return Err(AuthError::EmailTaken);
        }

        store.next_id += 1;
        user.user_id = UserId::from_counter(store.next_id);

        store.users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let store = self.lock()?;
        Ok(store.users.iter().find(|u| &u.email == email).cloned())
    }

    async fn find_by_id(&self, user_id: &UserId) -> AuthResult<Option<User>> {
        let store = self.lock()?;
        Ok(store.users.iter().find(|u| &u.user_id == user_id).cloned())
    }

    async fn update_profile(&self, user: &User) -> AuthResult<()> {
        let mut store = self.lock()?;

        match store.users.iter_mut().find(|u| u.user_id == user.user_id) {
            Some(stored) => {
                *stored = user.clone();
                Ok(())
            }
            None => Err(AuthError::UserNotFound),
        }
    }

    async fn record_login(&self, _user_id: &UserId, _at: DateTime<Utc>) -> AuthResult<()> {
        // Last-login tracking is a durable-store concern only
        Ok(())
    }
}
