//! # Taproom Site Host
//!
//! Serves the taproom site's view state over JSON routes.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Taproom Site Host                                │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     Frontend (browser)                          │   │
//! │  │   Home page (hero, about, brews, menu, events, contact)         │   │
//! │  │   Food menu page (category tabs, cart summary bar)              │   │
//! │  └────────────────────────────┬────────────────────────────────────┘   │
//! │                               │ fetch('/api/...')                       │
//! │                               ▼                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    axum Router (routes/)                        │   │
//! │  └────────────────────────────┬────────────────────────────────────┘   │
//! │                               │                                         │
//! │             ┌─────────────────┼──────────────────┐                      │
//! │             ▼                 ▼                  ▼                      │
//! │  ┌──────────────────┐ ┌──────────────┐ ┌──────────────────┐            │
//! │  │   ViewSession    │ │ ContentState │ │  SlideshowTimer  │            │
//! │  │  (taproom-core)  │ │              │ │  (5s interval)   │            │
//! │  └──────────────────┘ └──────┬───────┘ └──────────────────┘            │
//! │                              ▼                                          │
//! │                    ┌──────────────────┐                                 │
//! │                    │    taproom-db    │                                 │
//! │                    │ (SQLite content) │                                 │
//! │                    └──────────────────┘                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! 1. Load [`config::SiteConfig`] (file + environment)
//! 2. Open the content store and run migrations
//! 3. Fetch home content once, start the slideshow timer
//! 4. Serve until Ctrl+C or SIGTERM
//! 5. Cancel the timer and close the pool

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

use taproom_db::{Database, DbConfig};

use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};
use crate::state::{AppState, SlideshowTimer};

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show all debug logs
/// - `RUST_LOG=taproom=trace` - Trace level for taproom crates
/// - Default: INFO for everything, DEBUG for taproom crates
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,taproom=debug,sqlx=warn"));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Runs the site until a shutdown signal arrives.
pub async fn run(config: SiteConfig) -> SiteResult<()> {
    let db_path = config.database_path()?;
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            SiteError::InvalidConfig(format!(
                "Cannot create data directory {}: {}",
                parent.display(),
                e
            ))
        })?;
    }

    let db = Database::new(DbConfig::new(db_path)).await?;
    let state = AppState::new(db.clone(), config.clone())?;

    state.content.refresh(&state.db).await;
    let timer = SlideshowTimer::start(state.session.clone(), config.slideshow.interval());

    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| SiteError::BindFailed {
            addr: addr.clone(),
            reason: e.to_string(),
        })?;
    info!(%addr, venue = %config.venue.name, "Taproom site listening");

    let app = routes::build_router(state);
    let served = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await;

    timer.cancel();
    db.close().await;

    served.map_err(|e| SiteError::Server(e.to_string()))?;
    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
