//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Signup and login form body (both take the same fields)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CredentialsForm {
    #[validate(length(min = 1, max = 64, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

// ============================================================================
// Item Requests
// ============================================================================

/// Create a new shopping list item
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateItemRequest {
    #[validate(length(min = 1, max = 128, message = "Item name is required"))]
    pub name: String,
}

// ============================================================================
// Checkout Requests
// ============================================================================

/// Batch-checkout request: the selected item ids plus the caller-entered
/// total. Non-integer elements (or a non-integer amount) never get this far;
/// JSON deserialization rejects them with a 400 before validation runs.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CheckoutRequest {
    #[validate(length(min = 1, message = "Invalid item list"))]
    pub ids: Vec<i64>,

    pub amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_ids_rejected() {
        let request = CheckoutRequest {
            ids: vec![],
            amount: 100,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_checkout_request_valid() {
        let request = CheckoutRequest {
            ids: vec![1, 2, 3],
            amount: 750,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_non_integer_ids_fail_deserialization() {
        let err = serde_json::from_str::<CheckoutRequest>(r#"{"ids": [1, "two"], "amount": 5}"#);
        assert!(err.is_err());

        let err = serde_json::from_str::<CheckoutRequest>(r#"{"ids": [1], "amount": "5"}"#);
        assert!(err.is_err());
    }

    #[test]
    fn test_empty_username_rejected() {
        let form = CredentialsForm {
            username: String::new(),
            password: "TestPass123!".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_empty_item_name_rejected() {
        let request = CreateItemRequest {
            name: String::new(),
        };
        assert!(request.validate().is_err());
    }
}
