//! Entity ↔ model mappers
//!
//! Row mapping happens here, at the data-access boundary; nothing above this
//! layer sees raw database rows.

mod cart;
mod item;
mod user;
