//! Item entity - a user-owned shopping-list entry

use chrono::{DateTime, Utc};

use crate::value_objects::{ItemId, UserId};

/// A shopping-list entry. Active until a checkout bundles it into a cart,
/// after which `is_active` stays false for good.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub user_id: UserId,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl Item {
    /// Check if the item is still on the active list
    #[inline]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Check if the item belongs to the given user
    #[inline]
    pub fn is_owned_by(&self, user_id: UserId) -> bool {
        self.user_id == user_id
    }
}
