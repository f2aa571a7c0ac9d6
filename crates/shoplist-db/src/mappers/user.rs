//! User entity <-> model mapper

use shoplist_core::entities::User;
use shoplist_core::value_objects::UserId;

use crate::models::UserModel;

/// Convert UserModel to User entity. The password hash is deliberately not
/// carried over; repositories expose it through a dedicated accessor.
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: UserId::new(model.id),
            username: model.username,
            created_at: model.created_at,
        }
    }
}
