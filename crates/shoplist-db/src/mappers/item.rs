//! Item entity <-> model mapper

use shoplist_core::entities::Item;
use shoplist_core::value_objects::{ItemId, UserId};

use crate::models::ItemModel;

impl From<ItemModel> for Item {
    fn from(model: ItemModel) -> Self {
        Item {
            id: ItemId::new(model.id),
            user_id: UserId::new(model.user_id),
            name: model.name,
            is_active: model.is_active,
            created_at: model.created_at,
        }
    }
}
