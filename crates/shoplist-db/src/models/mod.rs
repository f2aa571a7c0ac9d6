//! Database models with SQLx `FromRow` derives

mod cart;
mod item;
mod user;

pub use cart::{CartModel, CartRowModel};
pub use item::ItemModel;
pub use user::UserModel;
