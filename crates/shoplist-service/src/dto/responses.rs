//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.

use chrono::{DateTime, Utc};
use serde::Serialize;

// ============================================================================
// Item Responses
// ============================================================================

/// One shopping list item
#[derive(Debug, Clone, Serialize)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Cart Responses
// ============================================================================

/// One item line inside a cart summary
#[derive(Debug, Clone, Serialize)]
pub struct CartLineResponse {
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// One past checkout with its items
#[derive(Debug, Clone, Serialize)]
pub struct CartSummaryResponse {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub total_amount: i64,
    pub items: Vec<CartLineResponse>,
}

/// Successful checkout acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct CheckoutResponse {
    pub message: String,
    pub cart_id: i64,
}

impl CheckoutResponse {
    pub fn new(cart_id: i64) -> Self {
        Self {
            message: "Items deactivated".to_string(),
            cart_id,
        }
    }
}

// ============================================================================
// Generic Responses
// ============================================================================

/// Bulk-delete acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health status for each backing service
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub database: String,
}

impl ReadinessResponse {
    pub fn ready(database_healthy: bool) -> Self {
        Self {
            status: if database_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                database: if database_healthy { "healthy" } else { "unhealthy" }.to_string(),
            },
        }
    }
}
