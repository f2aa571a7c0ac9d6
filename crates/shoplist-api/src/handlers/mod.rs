//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod auth;
pub mod dashboard;
pub mod health;
pub mod items;
