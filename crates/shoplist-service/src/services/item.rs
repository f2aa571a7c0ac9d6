//! Shopping list item service

use shoplist_core::value_objects::{ItemId, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CreateItemRequest, ItemResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Item service
pub struct ItemService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ItemService<'a> {
    /// Create a new ItemService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Add an item to the user's active list
    #[instrument(skip(self, request), fields(user_id = %user_id))]
    pub async fn create(
        &self,
        user_id: UserId,
        request: CreateItemRequest,
    ) -> ServiceResult<ItemResponse> {
        request
            .validate()
            .map_err(|e| ServiceError::validation(e.to_string()))?;

        let item = self.ctx.item_repo().create(user_id, &request.name).await?;

        info!(item_id = %item.id, "Item created");

        Ok(ItemResponse::from(item))
    }

    /// All of the user's active items, newest first
    #[instrument(skip(self))]
    pub async fn active_items(&self, user_id: UserId) -> ServiceResult<Vec<ItemResponse>> {
        let items = self.ctx.item_repo().find_active_by_user(user_id).await?;
        Ok(items.iter().map(ItemResponse::from).collect())
    }

    /// All of the user's items regardless of active state, newest first
    #[instrument(skip(self))]
    pub async fn all_items(&self, user_id: UserId) -> ServiceResult<Vec<ItemResponse>> {
        let items = self.ctx.item_repo().find_by_user(user_id).await?;
        Ok(items.iter().map(ItemResponse::from).collect())
    }

    /// Delete one of the user's items
    #[instrument(skip(self))]
    pub async fn delete(&self, user_id: UserId, item_id: ItemId) -> ServiceResult<()> {
        self.ctx.item_repo().delete(user_id, item_id).await?;
        info!(item_id = %item_id, "Item deleted");
        Ok(())
    }

    /// Delete all of the user's items, returning how many were removed
    #[instrument(skip(self))]
    pub async fn delete_all(&self, user_id: UserId) -> ServiceResult<u64> {
        let deleted = self.ctx.item_repo().delete_all(user_id).await?;
        info!(deleted, "All items deleted");
        Ok(deleted)
    }
}
