//! # Cart Module
//!
//! Tracks requested quantities for food-menu items and exposes a running
//! total. There is no checkout: the cart only feeds the summary bar and the
//! pre-order note attached to a reservation request.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Frontend Action          Operation               Cart State Change     │
//! │  ───────────────          ─────────               ─────────────────     │
//! │                                                                         │
//! │  Click "Add to Cart" ───► increment(name) ──────► qty[name] += 1       │
//! │                                                                         │
//! │  Click "+" ─────────────► increment(name) ──────► qty[name] += 1       │
//! │                                                                         │
//! │  Click "−" ─────────────► decrement(name) ──────► qty[name] =          │
//! │                                                     max(qty - 1, 0)     │
//! │                                                                         │
//! │  Reload / navigate ─────► reset() ──────────────► all entries cleared  │
//! │                                                                         │
//! │  Summary bar ───────────► summary() ────────────► (read only)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Quantities are never negative (`u32`, decrement clamps at zero)
//! - A line at zero is kept, and counts exactly like an absent line
//! - Unknown item names are accepted; they count toward `total_count`
//!   but contribute nothing to `total_price`

use std::collections::BTreeMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::catalog::Catalog;
use crate::money::Money;

/// First line of [`CartStore::order_note`].
pub const ORDER_NOTE_HEADER: &str = "Pre-order from the food menu:";

// =============================================================================
// Cart Store
// =============================================================================

/// Per-item quantities for one view session.
#[derive(Debug, Clone)]
pub struct CartStore {
    catalog: Arc<Catalog>,
    quantities: BTreeMap<String, u32>,
}

impl CartStore {
    /// Creates an empty cart over a fixed catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        CartStore {
            catalog,
            quantities: BTreeMap::new(),
        }
    }

    /// The catalog prices are looked up in.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adds one of the item, starting from zero if absent.
    ///
    /// Returns the new quantity.
    pub fn increment(&mut self, item_id: &str) -> u32 {
        let qty = self.quantities.entry(item_id.to_string()).or_insert(0);
        *qty = qty.saturating_add(1);
        *qty
    }

    /// Removes one of the item, never going below zero.
    ///
    /// Decrementing an absent item is a no-op and creates no entry.
    /// Returns the new quantity.
    pub fn decrement(&mut self, item_id: &str) -> u32 {
        match self.quantities.get_mut(item_id) {
            Some(qty) => {
                *qty = qty.saturating_sub(1);
                *qty
            }
            None => 0,
        }
    }

    /// Current quantity of the item (0 when absent).
    pub fn quantity(&self, item_id: &str) -> u32 {
        self.quantities.get(item_id).copied().unwrap_or(0)
    }

    /// Sum of all quantities.
    pub fn total_count(&self) -> u64 {
        self.quantities.values().map(|&qty| u64::from(qty)).sum()
    }

    /// Sum of quantity × unit price; unknown items contribute zero.
    pub fn total_price(&self) -> Money {
        self.quantities
            .iter()
            .filter_map(|(name, &qty)| {
                self.catalog
                    .unit_price(name)
                    .map(|price| price.multiply_quantity(qty))
            })
            .sum()
    }

    /// Clears every entry.
    pub fn reset(&mut self) {
        self.quantities.clear();
    }

    /// Checks if nothing is in the cart (zero lines count as empty).
    pub fn is_empty(&self) -> bool {
        self.total_count() == 0
    }

    /// Non-zero lines for items on the menu, in menu order.
    pub fn lines(&self) -> Vec<CartLineView> {
        self.catalog
            .items()
            .iter()
            .filter_map(|item| {
                let quantity = self.quantity(&item.name);
                (quantity > 0).then(|| CartLineView {
                    item_id: item.name.clone(),
                    unit_price: item.unit_price,
                    quantity,
                    line_total: item.unit_price.multiply_quantity(quantity),
                })
            })
            .collect()
    }

    /// Count and total for the summary bar.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from(self)
    }

    /// Plain-text pre-order list for the reservation message, headed by
    /// [`ORDER_NOTE_HEADER`].
    ///
    /// Returns `None` for an empty cart.
    pub fn order_note(&self) -> Option<String> {
        if self.is_empty() {
            return None;
        }

        let mut note = format!("{}\n", ORDER_NOTE_HEADER);
        for line in self.lines() {
            note.push_str(&format!(
                "- {} x {} ({})\n",
                line.quantity, line.item_id, line.line_total
            ));
        }
        let summary = self.summary();
        note.push_str(&format!(
            "Total: {} ({} items)",
            summary.total_price, summary.total_count
        ));
        Some(note)
    }
}

// =============================================================================
// Views
// =============================================================================

/// A cart line resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartLineView {
    pub item_id: String,
    pub unit_price: Money,
    pub quantity: u32,
    pub line_total: Money,
}

/// Cart totals for the summary bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSummary {
    pub total_count: u64,
    pub total_price: Money,
    /// The summary bar is only shown while something is in the cart.
    pub visible: bool,
}

impl From<&CartStore> for CartSummary {
    fn from(cart: &CartStore) -> Self {
        let total_count = cart.total_count();
        CartSummary {
            total_count,
            total_price: cart.total_price(),
            visible: total_count > 0,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
