//! # taproom-core: Pure View-State Logic for the Taproom Site
//!
//! This crate is the **heart** of the Taproom site. It holds every piece of
//! client view state as plain data with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Taproom Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │    Hero ──► Brews ──► Menu ──► Events ──► Contact              │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON over HTTP                         │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    taproom-site (axum)                          │   │
//! │  │    /api/cart, /api/theme, /api/slideshow, /api/reservations    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ taproom-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   cart    │  │   theme   │  │ slideshow │  │reservation│  │   │
//! │  │   │ CartStore │  │ ThemeMode │  │ Slideshow │  │  mailto   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • NO TIMERS                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    taproom-db (Content Store)                   │   │
//! │  │              events, signature brews (SQLite)                   │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Per-item quantities and derived totals
//! - [`catalog`] - The food menu and category filtering
//! - [`content`] - CMS record shapes (events, signature brews)
//! - [`money`] - Integer money in the smallest currency unit
//! - [`navigation`] - Page resolution, sections, mobile menu
//! - [`reservation`] - Reservation message and mail link composition
//! - [`slideshow`] - Cyclic hero image index
//! - [`theme`] - Dark/light mode and its ambient palette
//! - [`validation`] - Form input rules
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use taproom_core::{CartStore, Catalog, CatalogItem, Money};
//!
//! let catalog = Catalog::new(vec![
//!     CatalogItem::new("A", Money::from_minor(100), "Main Course"),
//!     CatalogItem::new("B", Money::from_minor(200), "Desserts"),
//! ])
//! .unwrap();
//!
//! let mut cart = CartStore::new(Arc::new(catalog));
//! cart.increment("A");
//! cart.increment("B");
//!
//! assert_eq!(cart.total_count(), 2);
//! assert_eq!(cart.total_price().minor(), 300);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod content;
pub mod error;
pub mod money;
pub mod navigation;
pub mod reservation;
pub mod slideshow;
pub mod theme;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{CartLineView, CartStore, CartSummary};
pub use catalog::{Catalog, CatalogItem, MenuFilter};
pub use content::{
    BrewCard, Collection, ContentItem, Event, EventCard, HomeContent, HomeLayout, SignatureBrew,
};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use navigation::{NavItem, NavigationState, Page, Section};
pub use reservation::{ReservationHandoff, ReservationRequest};
pub use slideshow::{SlideView, SlideshowState};
pub use theme::{Palette, ThemeMode, ThemeViewState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of signature brews featured on the home page.
pub const HOME_BREWS_LIMIT: usize = 4;

/// Number of events featured on the home page.
pub const HOME_EVENTS_LIMIT: usize = 6;

/// Hero slideshow advance interval observed on the live site.
pub const DEFAULT_SLIDE_INTERVAL_MS: u64 = 5000;

/// Largest party accepted by the reservation form.
pub const MAX_PARTY_SIZE: i64 = 100;
