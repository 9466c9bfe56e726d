//! # Content State
//!
//! The home page's brews and events, as last fetched from the content
//! store.
//!
//! ## Refresh Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  refresh(client)                                                        │
//! │       │                                                                 │
//! │       ├──► fetch_signature_brews() ──┐                                  │
//! │       │                              ├─ concurrently (tokio::join!)     │
//! │       └──► fetch_events() ───────────┘                                  │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │   failed collection? ── error! log, section shows nothing               │
//! │                     │                                                   │
//! │                     ▼                                                   │
//! │   HomeContent::assemble(brews, events, layout) ── installed in one step │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Readers never see a half-updated page: the new content replaces the old
//! under a single write lock, and the lock is not held while fetching.

use std::sync::{Arc, RwLock};

use taproom_core::{HomeContent, HomeLayout};
use taproom_db::{ContentFetchClient, DbResult};
use tracing::{error, info};

/// Shared handle to the home page content. Cloning shares the content.
#[derive(Debug, Clone)]
pub struct ContentState {
    home: Arc<RwLock<HomeContent>>,
    layout: Arc<HomeLayout>,
}

impl ContentState {
    /// Starts with empty sections until the first refresh.
    pub fn new(layout: HomeLayout) -> Self {
        ContentState {
            home: Arc::new(RwLock::new(HomeContent::default())),
            layout: Arc::new(layout),
        }
    }

    /// Current home page content.
    pub fn home(&self) -> HomeContent {
        self.home
            .read()
            .expect("Content lock poisoned")
            .clone()
    }

    /// Fetches both collections and installs the assembled content.
    ///
    /// A collection that fails to load is logged and shown as empty; the
    /// other collection is still displayed.
    pub async fn refresh<C: ContentFetchClient>(&self, client: &C) -> HomeContent {
        let (brews, events) = tokio::join!(client.fetch_signature_brews(), client.fetch_events());

        let brews = or_empty("signaturebrews", brews);
        let events = or_empty("events", events);

        let content = HomeContent::assemble(&brews, &events, &self.layout);

        info!(
            brews = content.brews.len(),
            events = content.events.len(),
            "Home content refreshed"
        );

        *self.home.write().expect("Content lock poisoned") = content.clone();
        content
    }
}

fn or_empty<T>(collection: &str, result: DbResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        error!(collection, error = %e, "Error fetching data");
        Vec::new()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use taproom_core::{Event, SignatureBrew};
    use taproom_db::{Database, DbConfig};

    async fn seeded(brews: usize, events: usize) -> Database {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let now = Utc::now();

        for i in 0..brews {
            let brew = SignatureBrew {
                id: format!("brew-{}", i),
                created_at: now,
                updated_at: now,
                name: Some(format!("Brew {}", i)),
                beer_image: None,
                flavor_description: None,
                details_url: None,
                beer_style: None,
            };
            db.signature_brews().insert(&brew).await.unwrap();
        }

        for i in 0..events {
            let event = Event {
                id: format!("event-{}", i),
                created_at: now,
                updated_at: now,
                event_name: Some(format!("Event {}", i)),
                event_date: None,
                event_time: None,
                description: None,
                event_image: None,
                is_happy_hour: None,
                cta_text: None,
                cta_link: None,
            };
            db.events().insert(&event).await.unwrap();
        }

        db
    }

    #[tokio::test]
    async fn test_starts_empty() {
        let state = ContentState::new(HomeLayout::default());
        assert_eq!(state.home(), HomeContent::default());
    }

    #[tokio::test]
    async fn test_refresh_applies_limits_in_order() {
        let db = seeded(5, 7).await;
        let state = ContentState::new(HomeLayout::default());

        let content = state.refresh(&db).await;

        assert_eq!(content.brews.len(), 4);
        assert_eq!(content.events.len(), 6);
        assert_eq!(content.brews[0].id, "brew-0");
        assert_eq!(content.events[5].id, "event-5");
        assert_eq!(state.home(), content);
    }

    #[tokio::test]
    async fn test_failed_fetch_shows_empty_sections() {
        let db = seeded(2, 2).await;
        let state = ContentState::new(HomeLayout::default());
        state.refresh(&db).await;
        assert_eq!(state.home().brews.len(), 2);

        db.close().await;
        let content = state.refresh(&db).await;

        assert!(content.brews.is_empty());
        assert!(content.events.is_empty());
        assert_eq!(state.home(), content);
    }
}
