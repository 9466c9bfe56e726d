//! # Repository Module
//!
//! Per-collection database access.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ContentFetchClient::fetch_collection(Collection::Events)               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  EventRepository                 SignatureBrewRepository                │
//! │  ├── list()                      ├── list()                             │
//! │  ├── get_by_id(id)               ├── get_by_id(id)                      │
//! │  ├── insert(event)               ├── insert(brew)                       │
//! │  ├── update(event)               ├── update(brew)                       │
//! │  └── delete(id)                  └── count()                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite Database                                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use uuid::Uuid;

pub mod brew;
pub mod event;

/// Generates an id for a new CMS record.
pub fn generate_content_id() -> String {
    Uuid::new_v4().to_string()
}
