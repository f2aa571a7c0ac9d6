//! Route definitions
//!
//! Browser pages and JSON endpoints share one router; only the health
//! probes are mounted separately so they can bypass rate limiting.

use axum::{
    routing::{delete, get, post},
    Router,
};

use crate::handlers::{auth, dashboard, health, items};
use crate::state::AppState;

/// Create the main application router (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .merge(page_routes())
        .merge(item_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Browser-facing pages and auth forms
fn page_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/dashboard", get(dashboard::dashboard))
        .route("/signup", get(auth::signup_page).post(auth::signup))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", get(auth::logout))
}

/// Item and checkout endpoints
fn item_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/items",
            get(items::list_items)
                .post(items::create_item)
                .delete(items::delete_all_items),
        )
        .route("/items/:item_id", delete(items::delete_item))
        .route("/items/deactivate", post(items::checkout))
}
