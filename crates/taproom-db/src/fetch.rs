//! # Content Fetch
//!
//! The contract the site uses to read CMS collections, and its SQLite
//! implementation on [`Database`].
//!
//! ```text
//!   "events"          ──► Collection::Events          ──► Vec<ContentItem::Event>
//!   "signaturebrews"  ──► Collection::SignatureBrews  ──► Vec<ContentItem::SignatureBrew>
//!   anything else     ──► DbError::Core(UnknownCollection)
//! ```

use std::future::Future;

use taproom_core::{Collection, ContentItem, Event, SignatureBrew};
use tracing::debug;

use crate::error::DbResult;
use crate::pool::Database;

/// Reads whole collections in the editor's order.
pub trait ContentFetchClient: Send + Sync {
    /// Fetches every record of `collection`.
    fn fetch_collection(
        &self,
        collection: Collection,
    ) -> impl Future<Output = DbResult<Vec<ContentItem>>> + Send;

    /// Fetches a collection by its CMS name.
    ///
    /// Unknown names fail with `CoreError::UnknownCollection`.
    fn fetch_named(&self, name: &str) -> impl Future<Output = DbResult<Vec<ContentItem>>> + Send {
        let parsed = name.parse::<Collection>();
        async move { self.fetch_collection(parsed?).await }
    }

    /// Fetches the `events` collection.
    fn fetch_events(&self) -> impl Future<Output = DbResult<Vec<Event>>> + Send {
        async move {
            let items = self.fetch_collection(Collection::Events).await?;
            Ok(items.into_iter().filter_map(ContentItem::into_event).collect())
        }
    }

    /// Fetches the `signaturebrews` collection.
    fn fetch_signature_brews(&self) -> impl Future<Output = DbResult<Vec<SignatureBrew>>> + Send {
        async move {
            let items = self.fetch_collection(Collection::SignatureBrews).await?;
            Ok(items
                .into_iter()
                .filter_map(ContentItem::into_signature_brew)
                .collect())
        }
    }
}

impl ContentFetchClient for Database {
    async fn fetch_collection(&self, collection: Collection) -> DbResult<Vec<ContentItem>> {
        debug!(collection = %collection, "Fetching content collection");

        let items = match collection {
            Collection::Events => self
                .events()
                .list()
                .await?
                .into_iter()
                .map(ContentItem::from)
                .collect(),
            Collection::SignatureBrews => self
                .signature_brews()
                .list()
                .await?
                .into_iter()
                .map(ContentItem::from)
                .collect(),
        };

        Ok(items)
    }
}
