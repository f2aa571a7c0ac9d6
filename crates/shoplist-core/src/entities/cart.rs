//! Cart entities and the cart-grouping logic
//!
//! A cart is the immutable record of one checkout. The repository hands back
//! the flat carts ⋈ cart_items ⋈ items join (newest cart first, newest item
//! first within a cart) and [`summarize_carts`] folds that row stream into
//! per-cart summaries.

use chrono::{DateTime, Utc};

use crate::value_objects::{CartId, ItemId, UserId};

/// A checkout record. Created exactly once per checkout call, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cart {
    pub id: CartId,
    pub user_id: UserId,
    /// Caller-supplied total in integer currency units. Items carry no price,
    /// so this is never derived or cross-checked.
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}

/// One row of the flat carts/cart_items/items join.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItemRow {
    pub cart_id: CartId,
    pub cart_created_at: DateTime<Utc>,
    pub total_amount: i64,
    pub item_id: ItemId,
    pub item_name: String,
    pub item_created_at: DateTime<Utc>,
}

/// One item line inside a cart summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// A cart together with the items it checked out, ready for presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartSummary {
    pub id: CartId,
    pub created_at: DateTime<Utc>,
    pub total_amount: i64,
    pub items: Vec<CartLine>,
}

/// Group flat join rows into per-cart summaries.
///
/// Carts appear in first-seen row order, so with the repository's
/// newest-first ordering the result runs from newest to oldest. The cart's
/// creation timestamp and total amount are taken from the first row seen for
/// that cart; every row contributes one item line. After grouping, the result
/// is truncated to the first `limit` distinct cart ids encountered in row
/// order - a post-hoc slice, not a SQL-level LIMIT.
pub fn summarize_carts(rows: Vec<CartItemRow>, limit: usize) -> Vec<CartSummary> {
    let mut carts: Vec<CartSummary> = Vec::new();

    for row in rows {
        let line = CartLine {
            name: row.item_name,
            created_at: row.item_created_at,
        };

        match carts.iter_mut().find(|c| c.id == row.cart_id) {
            Some(cart) => cart.items.push(line),
            None => carts.push(CartSummary {
                id: row.cart_id,
                created_at: row.cart_created_at,
                total_amount: row.total_amount,
                items: vec![line],
            }),
        }
    }

    carts.truncate(limit);
    carts
}
