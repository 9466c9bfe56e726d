//! Header navigation routes.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use taproom_core::{NavItem, NavigationState, Section};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationResponse {
    pub items: Vec<NavItem>,
    pub mobile_menu_open: bool,
}

impl NavigationResponse {
    fn new(mobile_menu_open: bool) -> Self {
        NavigationResponse {
            items: NavigationState::items(),
            mobile_menu_open,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScrollRequest {
    /// Section anchor, with or without the leading `#`.
    pub section: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScrollResponse {
    pub section: Section,
    pub anchor: &'static str,
    pub mobile_menu_open: bool,
}

pub async fn get_navigation(State(state): State<AppState>) -> Json<NavigationResponse> {
    let open = state
        .session
        .with_session(|s| s.navigation.is_mobile_menu_open());
    Json(NavigationResponse::new(open))
}

pub async fn toggle_menu(State(state): State<AppState>) -> Json<NavigationResponse> {
    let open = state
        .session
        .with_session_mut(|s| s.navigation.toggle_mobile_menu());
    debug!(open, "Mobile menu toggled");
    Json(NavigationResponse::new(open))
}

/// Returns the anchor to scroll to and closes the mobile menu.
pub async fn scroll(
    State(state): State<AppState>,
    Json(request): Json<ScrollRequest>,
) -> Result<Json<ScrollResponse>, ApiError> {
    let section = Section::from_anchor(&request.section)?;
    let anchor = state
        .session
        .with_session_mut(|s| s.navigation.scroll_to(section));
    debug!(anchor, "Scrolling to section");

    Ok(Json(ScrollResponse {
        section,
        anchor,
        mobile_menu_open: false,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::routes::test_support::test_state;

    fn scroll_to(section: &str) -> Json<ScrollRequest> {
        Json(ScrollRequest {
            section: section.to_string(),
        })
    }

    #[tokio::test]
    async fn test_items_in_header_order() {
        let state = test_state().await;
        let Json(nav) = get_navigation(State(state)).await;

        let anchors: Vec<&str> = nav.items.iter().map(|i| i.anchor.as_str()).collect();
        assert_eq!(
            anchors,
            ["hero", "about", "brews", "menu", "experience", "events", "contact"]
        );
        assert!(!nav.mobile_menu_open);
    }

    #[tokio::test]
    async fn test_scroll_closes_menu() {
        let state = test_state().await;

        let Json(nav) = toggle_menu(State(state.clone())).await;
        assert!(nav.mobile_menu_open);

        let Json(scrolled) = scroll(State(state.clone()), scroll_to("#events"))
            .await
            .unwrap();
        assert_eq!(scrolled.section, Section::Events);
        assert_eq!(scrolled.anchor, "events");

        let Json(nav) = get_navigation(State(state)).await;
        assert!(!nav.mobile_menu_open);
    }

    #[tokio::test]
    async fn test_unknown_section() {
        let state = test_state().await;
        let Json(opened) = toggle_menu(State(state.clone())).await;
        assert!(opened.mobile_menu_open);

        let err = scroll(State(state.clone()), scroll_to("taps"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        // A failed scroll leaves the menu as it was.
        let Json(nav) = get_navigation(State(state)).await;
        assert!(nav.mobile_menu_open);
    }
}
