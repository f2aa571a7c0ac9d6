//! PostgreSQL implementation of ItemRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use shoplist_core::entities::Item;
use shoplist_core::traits::{ItemRepository, RepoResult};
use shoplist_core::value_objects::{ItemId, UserId};

use crate::models::ItemModel;

use super::error::{item_not_found, map_db_error};

/// PostgreSQL implementation of ItemRepository
#[derive(Clone)]
pub struct PgItemRepository {
    pool: PgPool,
}

impl PgItemRepository {
    /// Create a new PgItemRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ItemRepository for PgItemRepository {
    #[instrument(skip(self))]
    async fn create(&self, user_id: UserId, name: &str) -> RepoResult<Item> {
        let model = sqlx::query_as::<_, ItemModel>(
            r"
            INSERT INTO items (user_id, name)
            VALUES ($1, $2)
            RETURNING id, user_id, name, is_active, created_at
            ",
        )
        .bind(user_id.into_inner())
        .bind(name)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(Item::from(model))
    }

    #[instrument(skip(self))]
    async fn find_active_by_user(&self, user_id: UserId) -> RepoResult<Vec<Item>> {
        let models = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, user_id, name, is_active, created_at
            FROM items
            WHERE user_id = $1 AND is_active = TRUE
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_user(&self, user_id: UserId) -> RepoResult<Vec<Item>> {
        let models = sqlx::query_as::<_, ItemModel>(
            r"
            SELECT id, user_id, name, is_active, created_at
            FROM items
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
            ",
        )
        .bind(user_id.into_inner())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(models.into_iter().map(Item::from).collect())
    }

    #[instrument(skip(self))]
    async fn delete(&self, user_id: UserId, item_id: ItemId) -> RepoResult<()> {
        // The user_id predicate doubles as an ownership check: deleting
        // another user's item reports not-found rather than forbidden.
        let result = sqlx::query(
            r"
            DELETE FROM items
            WHERE id = $1 AND user_id = $2
            ",
        )
        .bind(item_id.into_inner())
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(item_not_found(item_id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_all(&self, user_id: UserId) -> RepoResult<u64> {
        let result = sqlx::query(
            r"
            DELETE FROM items WHERE user_id = $1
            ",
        )
        .bind(user_id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.rows_affected())
    }
}
