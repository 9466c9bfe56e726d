//! # taproom-db: Content Store for the Taproom Site
//!
//! This crate stores the CMS collections the home page reads (events and
//! signature brews) in SQLite, using sqlx for async access.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Taproom Content Flow                             │
//! │                                                                         │
//! │  POST /api/content/refresh                                              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     taproom-db (THIS CRATE)                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │   Database    │    │  Repositories │    │  Migrations  │  │   │
//! │  │   │   (pool.rs)   │    │  (event.rs,   │    │  (embedded)  │  │   │
//! │  │   │               │◄───│   brew.rs)    │    │              │  │   │
//! │  │   │  SqlitePool   │    │               │    │ 001_content  │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │           ▲                                                     │   │
//! │  │           └── ContentFetchClient (fetch.rs)                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     SQLite Database                             │   │
//! │  │        <data dir>/taproom/taproom.db                            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`fetch`] - The `ContentFetchClient` contract
//! - [`error`] - Database error types
//! - [`repository`] - Per-collection repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use taproom_db::{ContentFetchClient, Database, DbConfig};
//!
//! let db = Database::new(DbConfig::new("taproom.db")).await?;
//! let events = db.fetch_named("events").await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod fetch;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use fetch::ContentFetchClient;
pub use pool::{Database, DbConfig};

pub use repository::brew::SignatureBrewRepository;
pub use repository::event::EventRepository;
pub use repository::generate_content_id;
