//! Entity to DTO mappers
//!
//! Implements `From` conversions from domain entities to response DTOs.

use shoplist_core::entities::{CartLine, CartSummary, Item};

use super::responses::{CartLineResponse, CartSummaryResponse, ItemResponse};

// ============================================================================
// Item Mappers
// ============================================================================

impl From<&Item> for ItemResponse {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.into_inner(),
            name: item.name.clone(),
            is_active: item.is_active,
            created_at: item.created_at,
        }
    }
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self::from(&item)
    }
}

// ============================================================================
// Cart Mappers
// ============================================================================

impl From<CartLine> for CartLineResponse {
    fn from(line: CartLine) -> Self {
        Self {
            name: line.name,
            created_at: line.created_at,
        }
    }
}

impl From<CartSummary> for CartSummaryResponse {
    fn from(summary: CartSummary) -> Self {
        Self {
            id: summary.id.into_inner(),
            created_at: summary.created_at,
            total_amount: summary.total_amount,
            items: summary
                .items
                .into_iter()
                .map(CartLineResponse::from)
                .collect(),
        }
    }
}
