//! Integration test utilities for the shopping list server
//!
//! This crate provides helpers for running end-to-end tests against
//! the HTTP API with a cookie-holding client.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;
