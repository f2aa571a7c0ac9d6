//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Signup/login form body
#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            username: format!("testuser_{}_{suffix}", std::process::id()),
            password: "TestPass123!".to_string(),
        }
    }

    pub fn with_password(&self, password: &str) -> Self {
        Self {
            username: self.username.clone(),
            password: password.to_string(),
        }
    }
}

/// Create item request body
#[derive(Debug, Serialize)]
pub struct CreateItem {
    pub name: String,
}

impl CreateItem {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

/// Checkout request body
#[derive(Debug, Serialize)]
pub struct Checkout {
    pub ids: Vec<i64>,
    pub amount: i64,
}

/// Item response body
#[derive(Debug, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: String,
}

/// Checkout response body
#[derive(Debug, Deserialize)]
pub struct CheckoutReceipt {
    pub message: String,
    pub cart_id: i64,
}

/// Bulk-delete response body
#[derive(Debug, Deserialize)]
pub struct Deleted {
    pub deleted: u64,
}
