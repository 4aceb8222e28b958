//! Common ID Types
//!
//! Type-safe ID wrappers for domain entities.
//!
//! Identifiers are string-backed rather than `Uuid`-backed: the durable
//! store assigns UUID v4 strings, while the in-memory fallback store
//! assigns counter-based `mem-<n>` identifiers. Both travel through the
//! same typed wrapper.

use std::fmt;
use std::marker::PhantomData;
use uuid::Uuid;

use serde::{Deserialize, Serialize};

/// Prefix of identifiers assigned by the in-memory fallback store.
pub const MEMORY_ID_PREFIX: &str = "mem-";

/// Generic typed ID wrapper
///
/// Usage:
/// ```
/// use kernel::id::{Id, markers};
/// type UserId = Id<markers::User>;
/// ```
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id<T> {
    value: String,
    #[serde(skip)]
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    /// Create a new random ID (UUID v4)
    pub fn new() -> Self {
        Self::from_string(Uuid::new_v4().to_string())
    }

    /// Create a counter-assigned ID for the in-memory store
    pub fn from_counter(n: u64) -> Self {
        Self::from_string(format!("{}{}", MEMORY_ID_PREFIX, n))
    }

    /// Wrap an existing identifier string
    pub fn from_string(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            _marker: PhantomData,
        }
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Convert into the underlying string
    pub fn into_string(self) -> String {
        self.value
    }

    /// Whether the identifier was assigned by the in-memory store
    pub fn is_memory_assigned(&self) -> bool {
        self.value.starts_with(MEMORY_ID_PREFIX)
    }
}

impl<T> Default for Id<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        Self::from_string(self.value.clone())
    }
}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for Id<T> {}

impl<T> std::hash::Hash for Id<T> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.value)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl<T> From<String> for Id<T> {
    fn from(value: String) -> Self {
        Self::from_string(value)
    }
}

impl<T> AsRef<str> for Id<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Marker types for different entity IDs
pub mod markers {
    /// Marker for User IDs
    pub struct User;

    /// Marker for Animal IDs
    pub struct Animal;

    /// Marker for prediction Feedback IDs
    pub struct Feedback;

    /// Marker for support Ticket IDs
    pub struct Ticket;
}

/// Type aliases for common IDs
pub type UserId = Id<markers::User>;
pub type AnimalId = Id<markers::Animal>;
pub type FeedbackId = Id<markers::Feedback>;
pub type TicketId = Id<markers::Ticket>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_type_safety() {
        let user_id: UserId = Id::new();
        let animal_id: AnimalId = Id::new();

        // These are different types, cannot be mixed
        let _u: &str = user_id.as_str();
        let _a: &str = animal_id.as_str();
    }

    #[test]
    fn test_counter_ids() {
        let id: AnimalId = Id::from_counter(7);
        assert_eq!(id.as_str(), "mem-7");
        assert!(id.is_memory_assigned());

        let id: AnimalId = Id::new();
        assert!(!id.is_memory_assigned());
    }

    #[test]
    fn test_serde_transparent() {
        let id: UserId = Id::from_string("mem-3");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"mem-3\"");

        let back: UserId = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
