//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::ItemId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    /// Checkout referenced items that are missing, inactive, or belong to
    /// another user. The whole checkout is rejected.
    #[error("Items unavailable for checkout: expected {expected}, matched {matched}")]
    ItemsUnavailable { expected: usize, matched: usize },

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Username already taken")]
    UsernameAlreadyExists,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ItemNotFound(_) => "UNKNOWN_ITEM",
            Self::ItemsUnavailable { .. } => "ITEMS_UNAVAILABLE",
            Self::UsernameAlreadyExists => "USERNAME_ALREADY_EXISTS",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ItemNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::ItemsUnavailable { .. })
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::UsernameAlreadyExists)
    }
}
