//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod auth;
pub mod cart;
pub mod context;
pub mod error;
pub mod item;

// Re-export all services for convenience
pub use auth::{AuthService, AuthenticatedSession};
pub use cart::{CartService, DEFAULT_CART_LIMIT};
pub use context::{ServiceContext, ServiceContextBuilder};
pub use error::{ServiceError, ServiceResult};
pub use item::ItemService;
