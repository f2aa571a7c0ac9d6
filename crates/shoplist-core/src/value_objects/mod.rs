//! Value objects - typed identifiers shared across the domain

mod id;

pub use id::{CartId, ItemId, UserId};
