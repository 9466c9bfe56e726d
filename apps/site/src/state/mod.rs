//! # State Module
//!
//! Shared state for the site host.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      axum Router                                │   │
//! │  │  Router::new().route(...).with_state(app_state)                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │       ┌──────────────┬───────┴───────┬──────────────┐                   │
//! │       ▼              ▼               ▼              ▼                   │
//! │  ┌──────────┐  ┌────────────┐  ┌────────────┐  ┌────────────┐          │
//! │  │ Database │  │ViewSession │  │ContentState│  │ SiteConfig │          │
//! │  │ (pool)   │  │(Arc<Mutex>)│  │(Arc<RwLock>│  │ (Arc)      │          │
//! │  └──────────┘  └────────────┘  └────────────┘  └────────────┘          │
//! │                      ▲                                                  │
//! │                      └── SlideshowTimer ticks the slideshow             │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • Database: internal connection pool                                  │
//! │  • ViewSession: one Mutex over cart, theme, slideshow, navigation      │
//! │  • ContentState: replaced wholesale under a write lock                 │
//! │  • SiteConfig: read-only after startup                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod content;
mod session;
mod timer;

use std::sync::Arc;

use taproom_core::Catalog;
use taproom_db::Database;

use crate::config::SiteConfig;
use crate::error::SiteResult;

pub use content::ContentState;
pub use session::{ViewSession, ViewState};
pub use timer::SlideshowTimer;

/// Everything a route handler can reach. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub session: ViewSession,
    pub content: ContentState,
    pub config: Arc<SiteConfig>,
}

impl AppState {
    /// Builds a fresh view session over the embedded food menu.
    pub fn new(db: Database, config: SiteConfig) -> SiteResult<Self> {
        let catalog = Arc::new(Catalog::food_menu()?);
        Self::with_catalog(db, config, catalog)
    }

    /// Same as [`AppState::new`] with a caller-supplied menu.
    pub fn with_catalog(db: Database, config: SiteConfig, catalog: Arc<Catalog>) -> SiteResult<Self> {
        let view = ViewState::new(catalog, config.slideshow.images.clone())?;
        Ok(AppState {
            db,
            session: ViewSession::new(view),
            content: ContentState::new(config.home_layout()),
            config: Arc::new(config),
        })
    }
}
