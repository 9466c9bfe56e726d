//! Home page content routes.

use axum::extract::State;
use axum::Json;
use taproom_core::HomeContent;

use crate::state::AppState;

/// Brews and events as of the last refresh.
pub async fn home(State(state): State<AppState>) -> Json<HomeContent> {
    Json(state.content.home())
}

/// Re-reads both collections from the content store.
///
/// Always succeeds: a collection that cannot be read is logged and comes
/// back empty.
pub async fn refresh(State(state): State<AppState>) -> Json<HomeContent> {
    Json(state.content.refresh(&state.db).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::test_support::test_state;
    use chrono::{NaiveDate, Utc};
    use taproom_core::content::{DEFAULT_CTA_TEXT, PLACEHOLDER_IMAGE};
    use taproom_core::Event;

    #[tokio::test]
    async fn test_refresh_then_home() {
        let state = test_state().await;
        let now = Utc::now();
        state
            .db
            .events()
            .insert(&Event {
                id: "evt-1".into(),
                created_at: now,
                updated_at: now,
                event_name: Some("Quiz Night".into()),
                event_date: NaiveDate::from_ymd_opt(2024, 6, 1),
                event_time: None,
                description: None,
                event_image: None,
                is_happy_hour: Some(true),
                cta_text: None,
                cta_link: None,
            })
            .await
            .unwrap();

        let Json(before) = home(State(state.clone())).await;
        assert!(before.events.is_empty());

        let Json(refreshed) = refresh(State(state.clone())).await;
        assert_eq!(refreshed.events.len(), 1);
        assert!(refreshed.brews.is_empty());

        let card = &refreshed.events[0];
        assert_eq!(card.name, "Quiz Night");
        assert_eq!(card.date.as_deref(), Some("2024-06-01"));
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.cta_text, DEFAULT_CTA_TEXT);
        assert!(card.is_happy_hour);

        let Json(after) = home(State(state)).await;
        assert_eq!(after, refreshed);
    }

    #[tokio::test]
    async fn test_refresh_with_store_down() {
        let state = test_state().await;
        state.db.close().await;

        let Json(content) = refresh(State(state)).await;
        assert!(content.brews.is_empty());
        assert!(content.events.is_empty());
    }
}
