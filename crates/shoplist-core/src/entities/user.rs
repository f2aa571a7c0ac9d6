//! User entity - a registered account that owns items and carts

use chrono::{DateTime, Utc};

use crate::value_objects::UserId;

/// User entity. The password hash never lives here; repositories hand it out
/// separately so it cannot leak through response mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new User with required fields
    pub fn new(id: UserId, username: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            username,
            created_at,
        }
    }
}
