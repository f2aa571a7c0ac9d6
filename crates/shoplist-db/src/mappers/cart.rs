//! Cart entity <-> model mappers

use shoplist_core::entities::{Cart, CartItemRow};
use shoplist_core::value_objects::{CartId, ItemId, UserId};

use crate::models::{CartModel, CartRowModel};

impl From<CartModel> for Cart {
    fn from(model: CartModel) -> Self {
        Cart {
            id: CartId::new(model.id),
            user_id: UserId::new(model.user_id),
            total_amount: model.total_amount,
            created_at: model.created_at,
        }
    }
}

impl From<CartRowModel> for CartItemRow {
    fn from(model: CartRowModel) -> Self {
        CartItemRow {
            cart_id: CartId::new(model.cart_id),
            cart_created_at: model.cart_created_at,
            total_amount: model.total_amount,
            item_id: ItemId::new(model.item_id),
            item_name: model.item_name,
            item_created_at: model.item_created_at,
        }
    }
}
