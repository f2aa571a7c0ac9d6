//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{Cart, CartItemRow, Item, User};
use crate::error::DomainError;
use crate::value_objects::{CartId, ItemId, UserId};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: UserId) -> RepoResult<Option<User>>;

    /// Find user by username
    async fn find_by_username(&self, username: &str) -> RepoResult<Option<User>>;

    /// Create a new user, returning the stored record with its assigned id
    async fn create(&self, username: &str, password_hash: &str) -> RepoResult<User>;

    /// Get password hash for authentication
    async fn get_password_hash(&self, id: UserId) -> RepoResult<Option<String>>;
}

// ============================================================================
// Item Repository
// ============================================================================

#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Create a new active item for the user, returning the stored record
    async fn create(&self, user_id: UserId, name: &str) -> RepoResult<Item>;

    /// All items for the user with the active flag set, newest first
    async fn find_active_by_user(&self, user_id: UserId) -> RepoResult<Vec<Item>>;

    /// All items for the user regardless of active flag, newest first
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Item>>;

    /// Delete one of the user's items; errors with `ItemNotFound` if the id
    /// does not exist or belongs to another user
    async fn delete(&self, user_id: UserId, item_id: ItemId) -> RepoResult<()>;

    /// Delete all of the user's items, returning how many were removed
    async fn delete_all(&self, user_id: UserId) -> RepoResult<u64>;
}

// ============================================================================
// Cart Repository
// ============================================================================

#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Atomically create a cart, link the given items to it, and deactivate
    /// them. Fails with `ItemsUnavailable` (rolling everything back) unless
    /// every id names an active item owned by the user.
    async fn checkout(
        &self,
        user_id: UserId,
        item_ids: &[ItemId],
        total_amount: i64,
    ) -> RepoResult<CartId>;

    /// Find cart by ID
    async fn find_by_id(&self, id: CartId) -> RepoResult<Option<Cart>>;

    /// The full carts/cart_items/items join for the user, ordered by cart
    /// creation descending then item creation descending
    async fn find_cart_rows_by_user(&self, user_id: UserId) -> RepoResult<Vec<CartItemRow>>;
}
