//! # shoplist-core
//!
//! Domain layer containing entities, typed identifiers, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{summarize_carts, Cart, CartItemRow, CartLine, CartSummary, Item, User};
pub use error::DomainError;
pub use traits::{CartRepository, ItemRepository, RepoResult, UserRepository};
pub use value_objects::{CartId, ItemId, UserId};
