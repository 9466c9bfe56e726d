//! # Catalog Module
//!
//! The fixed list of items shown on the food menu page.
//!
//! ## Catalog Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  data/food_menu.json (embedded at compile time)                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Catalog::food_menu() ── unique names, non-negative prices              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Arc<Catalog> shared read-only by the cart and the menu routes          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The catalog never changes within a session. Item names are the cart keys.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::Money;

/// Label of the pseudo-category that selects every item.
pub const ALL_CATEGORIES: &str = "All";

/// Menu categories in the order the menu page lists them.
pub const MENU_CATEGORIES: &[&str] = &["Main Course", "Burgers", "Pizza", "Desserts", "Brew Bites"];

static FOOD_MENU_JSON: &str = include_str!("../data/food_menu.json");

// =============================================================================
// Catalog Item
// =============================================================================

/// A purchasable-in-display menu item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CatalogItem {
    /// Display name; unique within the catalog and used as the cart key.
    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Price in the smallest currency unit.
    pub unit_price: Money,

    pub category: String,

    /// Average guest rating (display only).
    #[serde(default)]
    pub rating: f32,

    /// Preparation time label, e.g. "15-20 min".
    #[serde(default)]
    pub prep_time: String,

    #[serde(default)]
    pub image: String,
}

impl CatalogItem {
    /// Creates an item with only the fields the cart needs.
    pub fn new(name: impl Into<String>, unit_price: Money, category: impl Into<String>) -> Self {
        CatalogItem {
            name: name.into(),
            description: String::new(),
            unit_price,
            category: category.into(),
            rating: 0.0,
            prep_time: String::new(),
            image: String::new(),
        }
    }
}

// =============================================================================
// Menu Filter
// =============================================================================

/// Category selection on the menu page.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MenuFilter {
    #[default]
    All,
    Category(String),
}

impl MenuFilter {
    /// Parses a category tab label. `"All"` (any case) or an empty label
    /// selects everything.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        if label.is_empty() || label.eq_ignore_ascii_case(ALL_CATEGORIES) {
            MenuFilter::All
        } else {
            MenuFilter::Category(label.to_string())
        }
    }

    fn matches(&self, item: &CatalogItem) -> bool {
        match self {
            MenuFilter::All => true,
            MenuFilter::Category(category) => item.category == *category,
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// An immutable, ordered set of menu items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate names and negative prices.
    pub fn new(items: Vec<CatalogItem>) -> CoreResult<Self> {
        let mut seen = HashSet::with_capacity(items.len());
        for item in &items {
            if item.name.trim().is_empty() {
                return Err(ValidationError::Required {
                    field: "name".to_string(),
                }
                .into());
            }
            if !seen.insert(item.name.as_str()) {
                return Err(ValidationError::Duplicate {
                    field: "name".to_string(),
                    value: item.name.clone(),
                }
                .into());
            }
            if item.unit_price.is_negative() {
                return Err(ValidationError::MustBeNonNegative {
                    field: format!("price of {}", item.name),
                }
                .into());
            }
        }
        Ok(Catalog { items })
    }

    /// Loads the venue's food menu embedded in the crate.
    pub fn food_menu() -> CoreResult<Self> {
        Self::from_json(FOOD_MENU_JSON)
    }

    /// Parses a JSON array of items.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let items: Vec<CatalogItem> =
            serde_json::from_str(json).map_err(|e| CoreError::MalformedMenu(e.to_string()))?;
        Self::new(items)
    }

    /// Finds an item by name.
    pub fn get(&self, name: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.name == name)
    }

    /// Unit price of the named item, if it is on the menu.
    pub fn unit_price(&self, name: &str) -> Option<Money> {
        self.get(name).map(|item| item.unit_price)
    }

    /// Returns true if the name is on the menu.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// All items in menu order.
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Category tabs, "All" first.
    pub fn categories() -> Vec<&'static str> {
        std::iter::once(ALL_CATEGORIES)
            .chain(MENU_CATEGORIES.iter().copied())
            .collect()
    }

    /// Items matching the filter, in menu order.
    pub fn filter(&self, filter: &MenuFilter) -> Vec<&CatalogItem> {
        self.items.iter().filter(|item| filter.matches(item)).collect()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
