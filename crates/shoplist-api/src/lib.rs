//! # shoplist-api
//!
//! HTTP server built with the Axum framework.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod pages;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
