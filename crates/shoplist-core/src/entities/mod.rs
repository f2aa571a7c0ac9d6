//! Domain entities

mod cart;
mod item;
mod user;

pub use cart::{summarize_carts, Cart, CartItemRow, CartLine, CartSummary};
pub use item::Item;
pub use user::User;
