//! Cart database models

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the carts table
#[derive(Debug, Clone, FromRow)]
pub struct CartModel {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: i64,
    pub created_at: DateTime<Utc>,
}

/// One row of the carts ⋈ cart_items ⋈ items join
#[derive(Debug, Clone, FromRow)]
pub struct CartRowModel {
    pub cart_id: i64,
    pub cart_created_at: DateTime<Utc>,
    pub total_amount: i64,
    pub item_id: i64,
    pub item_name: String,
    pub item_created_at: DateTime<Utc>,
}
