//! PostgreSQL implementation of CartRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use shoplist_core::entities::{Cart, CartItemRow};
use shoplist_core::error::DomainError;
use shoplist_core::traits::{CartRepository, RepoResult};
use shoplist_core::value_objects::{CartId, ItemId, UserId};

use crate::models::{CartModel, CartRowModel};

use super::error::map_db_error;

/// PostgreSQL implementation of CartRepository
#[derive(Clone)]
pub struct PgCartRepository {
    pool: PgPool,
}

impl PgCartRepository {
    /// Create a new PgCartRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CartRepository for PgCartRepository {
    #[instrument(skip(self))]
    async fn checkout(
        &self,
        user_id: UserId,
        item_ids: &[ItemId],
        total_amount: i64,
    ) -> RepoResult<CartId> {
        // Deduplicate: the row-count check below counts distinct items, and
        // cart_items has a (cart_id, item_id) primary key.
        let mut ids: Vec<i64> = item_ids.iter().map(|id| id.into_inner()).collect();
        ids.sort_unstable();
        ids.dedup();

        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let cart_id = sqlx::query_scalar::<_, i64>(
            r"
            INSERT INTO carts (user_id, total_amount)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(user_id.into_inner())
        .bind(total_amount)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_db_error)?;

        // The predicate also verifies ownership and liveness: if any id is
        // missing, inactive, or belongs to another user, the row count comes
        // up short and the whole transaction rolls back on drop.
        let deactivated = sqlx::query(
            r"
            UPDATE items
            SET is_active = FALSE
            WHERE id = ANY($1) AND user_id = $2 AND is_active = TRUE
            ",
        )
        .bind(&ids)
        .bind(user_id.into_inner())
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?
        .rows_affected() as usize;

        if deactivated != ids.len() {
            return Err(DomainError::ItemsUnavailable {
                expected: ids.len(),
                matched: deactivated,
            });
        }

        sqlx::query(
            r"
            INSERT INTO cart_items (cart_id, item_id)
            SELECT $1, unnest($2::BIGINT[])
            ",
        )
        .bind(cart_id)
        .bind(&ids)
        .execute(&mut *tx)
        .await
        .map_err(map_db_error)?;

        tx.commit().await.map_err(map_db_error)?;

        Ok(CartId::new(cart_id))
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CartId) -> RepoResult<Option<Cart>> {
        let result = sqlx::query_as::<_, CartModel>(
            r"
            SELECT id, user_id, total_amount, created_at
            FROM carts
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(Cart::from))
    }

    #[instrument(skip(self))]
    async fn find_cart_rows_by_user(&self, user_id: UserId) -> RepoResult<Vec<CartItemRow>> {
        let models = sqlx::query_as::<_, CartRowModel>(
            r"
            SELECT
                c.id AS cart_id,
                c.created_at AS cart_created_at,
                c.total_amount,
                i.id AS item_id,
                i.name AS item_name,
                i.created_at AS item_created_at
            FROM carts c
            JOIN cart_items ci ON ci.cart_id = c.id
            JOIN items i ON i.id = ci.item_id
            WHERE c.user_id = $1
            ORDER BY c.created_at DESC, c.id DESC, i.created_at DESC, i.id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(CartItemRow::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repo_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PgCartRepository>();
    }
}
