//! # Event Repository
//!
//! Database operations for the `events` collection.
//!
//! Records come back in editor order (`sort_order`, then creation time),
//! which is the order the home page shows them in.

use chrono::Utc;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::{DbError, DbResult};
use taproom_core::Event;

const EVENT_COLUMNS: &str = r#"
    id,
    created_at,
    updated_at,
    event_name,
    event_date,
    event_time,
    description,
    event_image,
    is_happy_hour,
    cta_text,
    cta_link
"#;

/// Repository for event records.
///
/// ## Usage
/// ```rust,ignore
/// let events = db.events().list().await?;
/// ```
#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: SqlitePool,
}

impl EventRepository {
    /// Creates a new EventRepository.
    pub fn new(pool: SqlitePool) -> Self {
        EventRepository { pool }
    }

    /// Lists every event in editor order.
    pub async fn list(&self) -> DbResult<Vec<Event>> {
        let sql = format!(
            "SELECT {} FROM events ORDER BY sort_order, created_at",
            EVENT_COLUMNS
        );
        let events = sqlx::query_as::<_, Event>(&sql)
            .fetch_all(&self.pool)
            .await?;

        debug!(count = events.len(), "Listed events");
        Ok(events)
    }

    /// Gets an event by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(Event))` - Event found
    /// * `Ok(None)` - Event not found
    pub async fn get_by_id(&self, id: &str) -> DbResult<Option<Event>> {
        let sql = format!("SELECT {} FROM events WHERE id = ?1", EVENT_COLUMNS);
        let event = sqlx::query_as::<_, Event>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(event)
    }

    /// Appends an event after the existing ones.
    ///
    /// ## Returns
    /// * `Err(DbError::UniqueViolation)` - id already exists
    pub async fn insert(&self, event: &Event) -> DbResult<Event> {
        debug!(id = %event.id, "Inserting event");

        sqlx::query(
            r#"
            INSERT INTO events (
                id, created_at, updated_at,
                event_name, event_date, event_time, description, event_image,
                is_happy_hour, cta_text, cta_link,
                sort_order
            ) VALUES (
                ?1, ?2, ?3,
                ?4, ?5, ?6, ?7, ?8,
                ?9, ?10, ?11,
                (SELECT COALESCE(MAX(sort_order), -1) + 1 FROM events)
            )
            "#,
        )
        .bind(&event.id)
        .bind(event.created_at)
        .bind(event.updated_at)
        .bind(&event.event_name)
        .bind(event.event_date)
        .bind(event.event_time)
        .bind(&event.description)
        .bind(&event.event_image)
        .bind(event.is_happy_hour)
        .bind(&event.cta_text)
        .bind(&event.cta_link)
        .execute(&self.pool)
        .await?;

        Ok(event.clone())
    }

    /// Updates an existing event's editorial fields.
    ///
    /// ## Returns
    /// * `Err(DbError::NotFound)` - Event doesn't exist
    pub async fn update(&self, event: &Event) -> DbResult<()> {
        debug!(id = %event.id, "Updating event");

        let result = sqlx::query(
            r#"
            UPDATE events SET
                event_name = ?2,
                event_date = ?3,
                event_time = ?4,
                description = ?5,
                event_image = ?6,
                is_happy_hour = ?7,
                cta_text = ?8,
                cta_link = ?9,
                updated_at = ?10
            WHERE id = ?1
            "#,
        )
        .bind(&event.id)
        .bind(&event.event_name)
        .bind(event.event_date)
        .bind(event.event_time)
        .bind(&event.description)
        .bind(&event.event_image)
        .bind(event.is_happy_hour)
        .bind(&event.cta_text)
        .bind(&event.cta_link)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Event", &event.id));
        }

        Ok(())
    }

    /// Deletes an event.
    pub async fn delete(&self, id: &str) -> DbResult<()> {
        debug!(id = %id, "Deleting event");

        let result = sqlx::query("DELETE FROM events WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Event", id));
        }

        Ok(())
    }

    /// Counts events (for diagnostics and the seed binary).
    pub async fn count(&self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
