//! Item and checkout handlers
//!
//! JSON endpoints for the shopping list itself. Every handler takes a
//! [`SessionUser`]; queries are always scoped to that user.

use axum::{
    extract::{Path, State},
    Json,
};
use shoplist_core::ItemId;
use shoplist_service::dto::{
    CheckoutRequest, CheckoutResponse, CreateItemRequest, DeletedResponse, ItemResponse,
};
use shoplist_service::{CartService, ItemService};

use crate::extractors::{SessionUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// List all of the session user's items
///
/// GET /items
pub async fn list_items(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<Vec<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    let items = service.all_items(session.user_id).await?;
    Ok(Json(items))
}

/// Add an item to the active list
///
/// POST /items
pub async fn create_item(
    State(state): State<AppState>,
    session: SessionUser,
    ValidatedJson(request): ValidatedJson<CreateItemRequest>,
) -> ApiResult<Created<Json<ItemResponse>>> {
    let service = ItemService::new(state.service_context());
    let item = service.create(session.user_id, request).await?;
    Ok(Created(Json(item)))
}

/// Delete one of the session user's items
///
/// DELETE /items/{item_id}
pub async fn delete_item(
    State(state): State<AppState>,
    session: SessionUser,
    Path(item_id): Path<i64>,
) -> ApiResult<NoContent> {
    let service = ItemService::new(state.service_context());
    service
        .delete(session.user_id, ItemId::new(item_id))
        .await?;
    Ok(NoContent)
}

/// Delete all of the session user's items
///
/// DELETE /items
pub async fn delete_all_items(
    State(state): State<AppState>,
    session: SessionUser,
) -> ApiResult<Json<DeletedResponse>> {
    let service = ItemService::new(state.service_context());
    let deleted = service.delete_all(session.user_id).await?;
    Ok(Json(DeletedResponse { deleted }))
}

/// Batch-checkout the selected items into a new cart
///
/// POST /items/deactivate
pub async fn checkout(
    State(state): State<AppState>,
    session: SessionUser,
    ValidatedJson(request): ValidatedJson<CheckoutRequest>,
) -> ApiResult<Json<CheckoutResponse>> {
    let service = CartService::new(state.service_context());
    let response = service.checkout(session.user_id, request).await?;
    Ok(Json(response))
}
