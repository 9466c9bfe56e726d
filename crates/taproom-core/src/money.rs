//! # Money Module
//!
//! Provides the `Money` type for menu prices and cart totals.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Smallest Currency Unit                                   │
//! │    Menu prices are whole rupees: "₹395" → 395                          │
//! │    Cart totals are exact integer sums                                   │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use taproom_core::money::Money;
//!
//! let price = Money::from_minor(395); // ₹395
//! let line_total = price.multiply_quantity(2);
//! assert_eq!(line_total.minor(), 790);
//! assert_eq!(line_total.to_string(), "₹790");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use ts_rs::TS;

/// Currency symbol printed by [`Money`]'s `Display`.
pub const CURRENCY_SYMBOL: &str = "₹";

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit the venue prices in.
///
/// ## Where Money is Used
/// ```text
/// CatalogItem.unit_price ──► CartLineView.line_total ──► CartSummary.total
///                      │
///                      └──► Displayed as "₹395" on the menu card
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from the smallest currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use taproom_core::money::Money;
    ///
    /// let price = Money::from_minor(450);
    /// assert_eq!(price.minor(), 450);
    /// ```
    #[inline]
    pub const fn from_minor(minor: i64) -> Self {
        Money(minor)
    }

    /// Returns the value in the smallest currency unit.
    #[inline]
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a cart quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use taproom_core::money::Money;
    ///
    /// let unit_price = Money::from_minor(365);
    /// assert_eq!(unit_price.multiply_quantity(3).minor(), 1095);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money the way the menu prints it (`₹395`).
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 < 0 {
            write!(f, "-{}{}", CURRENCY_SYMBOL, self.0.unsigned_abs())
        } else {
            write!(f, "{}{}", CURRENCY_SYMBOL, self.0)
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
