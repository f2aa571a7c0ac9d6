//! # shoplist-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuthService, AuthenticatedSession, CartService, ItemService, ServiceContext,
    ServiceContextBuilder, ServiceError, ServiceResult, DEFAULT_CART_LIMIT,
};
