//! # Routes Module
//!
//! JSON routes over the view session and the content store.
//!
//! ## Route Organization
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Route Categories                                │
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐    │
//! │  │  pages.rs   │  │  theme.rs   │  │ slideshow.rs│  │navigation.rs│    │
//! │  │             │  │             │  │             │  │             │    │
//! │  │ • resolve   │  │ • get       │  │ • get       │  │ • get       │    │
//! │  │             │  │ • toggle    │  │ • tick      │  │ • toggle    │    │
//! │  │             │  │             │  │ • set_index │  │ • scroll    │    │
//! │  └─────────────┘  └─────────────┘  └─────────────┘  └─────────────┘    │
//! │                                                                         │
//! │  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐  ┌─────────────┐    │
//! │  │  menu.rs    │  │  cart.rs    │  │ content.rs  │  │reservation.rs│   │
//! │  │             │  │             │  │             │  │             │    │
//! │  │ • list      │  │ • get       │  │ • home      │  │ • submit    │    │
//! │  │             │  │ • increment │  │ • refresh   │  │ • checkout  │    │
//! │  │             │  │ • decrement │  │             │  │             │    │
//! │  │             │  │ • reset     │  │             │  │             │    │
//! │  └─────────────┘  └─────────────┘  └─────────────┘  └─────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod content;
pub mod health;
pub mod menu;
pub mod navigation;
pub mod pages;
pub mod reservation;
pub mod slideshow;
pub mod theme;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::state::AppState;

/// Builds the site router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route("/api/pages/resolve", get(pages::resolve))
        .route("/api/theme", get(theme::get_theme))
        .route("/api/theme/toggle", post(theme::toggle_theme))
        .route("/api/slideshow", get(slideshow::get_slide))
        .route("/api/slideshow/tick", post(slideshow::tick))
        .route("/api/slideshow/index", put(slideshow::set_index))
        .route("/api/navigation", get(navigation::get_navigation))
        .route("/api/navigation/menu/toggle", post(navigation::toggle_menu))
        .route("/api/navigation/scroll", post(navigation::scroll))
        .route("/api/menu", get(menu::list_menu))
        .route("/api/cart", get(cart::get_cart))
        .route("/api/cart", delete(cart::reset_cart))
        .route("/api/cart/items/{item}/increment", post(cart::increment))
        .route("/api/cart/items/{item}/decrement", post(cart::decrement))
        .route("/api/cart/checkout", post(reservation::checkout))
        .route("/api/content/home", get(content::home))
        .route("/api/content/refresh", post(content::refresh))
        .route("/api/reservations", post(reservation::submit))
        .with_state(state)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::Arc;

    use taproom_core::{Catalog, CatalogItem, Money};
    use taproom_db::{Database, DbConfig};

    use crate::config::SiteConfig;
    use crate::state::AppState;

    /// In-memory state with a two-item menu (A ₹100, B ₹200) and three
    /// hero images.
    pub async fn test_state() -> AppState {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut config = SiteConfig::default();
        config.slideshow.images = vec!["one.jpg".into(), "two.jpg".into(), "three.jpg".into()];
        config.venue.reservation_email = "book@example.com".into();

        let catalog = Catalog::new(vec![
            CatalogItem::new("A", Money::from_minor(100), "Brew Bites"),
            CatalogItem::new("B", Money::from_minor(200), "Pizza"),
        ])
        .unwrap();

        AppState::with_catalog(db, config, Arc::new(catalog)).unwrap()
    }
}
