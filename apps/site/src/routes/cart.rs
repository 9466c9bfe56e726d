//! # Cart Routes
//!
//! Menu cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐     ┌──────────┐     ┌──────────────┐                     │
//! │  │  Empty   │────►│ In Cart  │────►│  Checkout    │                     │
//! │  │  Cart    │     │          │     │ (pre-filled  │                     │
//! │  └──────────┘     └──────────┘     │  reservation)│                     │
//! │       ▲                │           └──────────────┘                     │
//! │       │           increment                                             │
//! │       │           decrement                                             │
//! │       │                │                                                │
//! │       └──── DELETE /api/cart (page reload / navigation away)            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Item ids are menu item names. An id that is not on the menu still
//! counts toward the item total but has no price and no cart line.

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use taproom_core::{CartLineView, CartStore, CartSummary};
use tracing::{debug, warn};

use crate::state::AppState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineView>,
    pub summary: CartSummary,
}

impl From<&CartStore> for CartResponse {
    fn from(cart: &CartStore) -> Self {
        CartResponse {
            lines: cart.lines(),
            summary: cart.summary(),
        }
    }
}

/// Result of a quantity change.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdateResponse {
    pub item_id: String,
    pub quantity: u32,
    pub cart: CartResponse,
}

pub async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    debug!("get_cart");
    Json(state.session.with_session(|s| CartResponse::from(&s.cart)))
}

pub async fn increment(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Json<CartUpdateResponse> {
    let response = state.session.with_session_mut(|s| {
        if !s.cart.catalog().contains(&item_id) {
            warn!(item = %item_id, "Incrementing an item that is not on the menu");
        }
        let quantity = s.cart.increment(&item_id);
        CartUpdateResponse {
            item_id: item_id.clone(),
            quantity,
            cart: CartResponse::from(&s.cart),
        }
    });
    debug!(item = %item_id, quantity = response.quantity, "Cart item incremented");
    Json(response)
}

/// Lowers a quantity, stopping at zero.
pub async fn decrement(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> Json<CartUpdateResponse> {
    let response = state.session.with_session_mut(|s| {
        let quantity = s.cart.decrement(&item_id);
        CartUpdateResponse {
            item_id: item_id.clone(),
            quantity,
            cart: CartResponse::from(&s.cart),
        }
    });
    debug!(item = %item_id, quantity = response.quantity, "Cart item decremented");
    Json(response)
}

/// Empties the cart.
pub async fn reset_cart(State(state): State<AppState>) -> Json<CartResponse> {
    let response = state.session.with_session_mut(|s| {
        s.cart.reset();
        CartResponse::from(&s.cart)
    });
    debug!("Cart reset");
    Json(response)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::test_state;
    use taproom_core::Money;

    async fn inc(state: &AppState, item: &str) -> CartUpdateResponse {
        let Json(r) = increment(State(state.clone()), Path(item.to_string())).await;
        r
    }

    async fn dec(state: &AppState, item: &str) -> CartUpdateResponse {
        let Json(r) = decrement(State(state.clone()), Path(item.to_string())).await;
        r
    }

    #[tokio::test]
    async fn test_totals() {
        let state = test_state().await;

        inc(&state, "A").await;
        inc(&state, "A").await;
        let r = inc(&state, "B").await;

        assert_eq!(r.item_id, "B");
        assert_eq!(r.quantity, 1);
        assert_eq!(r.cart.summary.total_count, 3);
        assert_eq!(r.cart.summary.total_price, Money::from_minor(400));
        assert!(r.cart.summary.visible);

        let r = dec(&state, "A").await;
        assert_eq!(r.quantity, 1);
        assert_eq!(r.cart.summary.total_count, 2);
        assert_eq!(r.cart.summary.total_price, Money::from_minor(300));
    }

    #[tokio::test]
    async fn test_decrement_floors_at_zero() {
        let state = test_state().await;

        let r = dec(&state, "A").await;
        assert_eq!(r.quantity, 0);
        assert_eq!(r.cart.summary.total_count, 0);
        assert!(!r.cart.summary.visible);
    }

    #[tokio::test]
    async fn test_unknown_item_counts_without_price() {
        let state = test_state().await;

        let r = inc(&state, "Mystery Dish").await;
        assert_eq!(r.quantity, 1);
        assert_eq!(r.cart.summary.total_count, 1);
        assert_eq!(r.cart.summary.total_price, Money::zero());
        assert!(r.cart.lines.is_empty());
    }

    #[tokio::test]
    async fn test_reset() {
        let state = test_state().await;
        inc(&state, "A").await;
        inc(&state, "B").await;

        let Json(cart) = reset_cart(State(state.clone())).await;
        assert!(cart.lines.is_empty());
        assert_eq!(cart.summary.total_count, 0);

        let Json(cart) = get_cart(State(state)).await;
        assert_eq!(cart.summary.total_price, Money::zero());
    }
}
