//! Cart service - checkout and cart history

use shoplist_core::entities::summarize_carts;
use shoplist_core::value_objects::{ItemId, UserId};
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{CartSummaryResponse, CheckoutRequest, CheckoutResponse};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// How many past carts the dashboard shows
pub const DEFAULT_CART_LIMIT: usize = 3;

/// Cart service
pub struct CartService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> CartService<'a> {
    /// Create a new CartService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Batch-checkout the given items into a new cart
    ///
    /// The whole operation is one transaction in the repository; if any id
    /// is missing, inactive, or owned by someone else, nothing changes.
    #[instrument(skip(self, request), fields(user_id = %user_id, item_count = request.ids.len()))]
    pub async fn checkout(
        &self,
        user_id: UserId,
        request: CheckoutRequest,
    ) -> ServiceResult<CheckoutResponse> {
        request
            .validate()
            .map_err(|_| ServiceError::validation("Invalid item list"))?;

        let item_ids: Vec<ItemId> = request.ids.iter().copied().map(ItemId::new).collect();

        let cart_id = self
            .ctx
            .cart_repo()
            .checkout(user_id, &item_ids, request.amount)
            .await?;

        info!(cart_id = %cart_id, amount = request.amount, "Checkout complete");

        Ok(CheckoutResponse::new(cart_id.into_inner()))
    }

    /// The user's latest carts with their items, newest first
    #[instrument(skip(self))]
    pub async fn latest_carts(
        &self,
        user_id: UserId,
        limit: usize,
    ) -> ServiceResult<Vec<CartSummaryResponse>> {
        let rows = self.ctx.cart_repo().find_cart_rows_by_user(user_id).await?;
        let summaries = summarize_carts(rows, limit);
        Ok(summaries
            .into_iter()
            .map(CartSummaryResponse::from)
            .collect())
    }
}
