//! Repository implementations
//!
//! PostgreSQL implementations of the repository traits defined in
//! shoplist-core. Each repository handles database operations for a specific
//! domain entity.

mod cart;
mod error;
mod item;
mod user;

pub use cart::PgCartRepository;
pub use item::PgItemRepository;
pub use user::PgUserRepository;
