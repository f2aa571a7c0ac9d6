//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{CheckoutRequest, CreateItemRequest, CredentialsForm};

// Re-export commonly used response types
pub use responses::{
    CartLineResponse, CartSummaryResponse, CheckoutResponse, DeletedResponse, HealthResponse,
    ItemResponse, ReadinessResponse,
};
