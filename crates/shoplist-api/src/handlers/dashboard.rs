//! Dashboard handler
//!
//! Renders the main page: active items plus the latest carts.

use axum::{extract::State, response::Html};
use shoplist_service::{CartService, ItemService, DEFAULT_CART_LIMIT};

use crate::extractors::SessionUser;
use crate::pages;
use crate::response::ApiResult;
use crate::state::AppState;

/// Serve the dashboard
///
/// GET / and GET /dashboard
pub async fn dashboard(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Html<String>> {
    let items = ItemService::new(state.service_context())
        .active_items(session.user_id)
        .await?;
    let carts = CartService::new(state.service_context())
        .latest_carts(session.user_id, DEFAULT_CART_LIMIT)
        .await?;

    Ok(Html(pages::dashboard_page(&items, &carts)))
}
