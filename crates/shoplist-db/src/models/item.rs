//! Item database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for the items table
#[derive(Debug, Clone, FromRow)]
pub struct ItemModel {
    pub id: i64,
    pub user_id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}
