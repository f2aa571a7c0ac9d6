//! Repository traits (ports)

mod repositories;

pub use repositories::{CartRepository, ItemRepository, RepoResult, UserRepository};
