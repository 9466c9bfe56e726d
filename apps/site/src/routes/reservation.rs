//! # Reservation Routes
//!
//! The contact form and the menu page's "Proceed to Checkout" both end in
//! a reservation `mailto:` link. There is no payment step.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Food menu                              Home page                       │
//! │  ─────────                              ─────────                       │
//! │  cart: 2 x A, 1 x B                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  POST /api/cart/checkout ──► draft order note replaced ──► #contact     │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                         POST /api/reservations (form fields)            │
//! │                                                   │                     │
//! │                              validate ── fail ──► generic failure text  │
//! │                                                   │                     │
//! │                                                   ▼                     │
//! │                              ReservationHandoff { mailto, ... }         │
//! │                              draft reset to empty                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use taproom_core::reservation::FAILURE_MESSAGE;
use taproom_core::{Page, ReservationHandoff, ReservationRequest, Section};
use tracing::{debug, info, warn};

use crate::error::ApiError;
use crate::state::AppState;

/// The pre-filled form and where to show it.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutResponse {
    pub reservation: ReservationRequest,
    pub page: Page,
    pub anchor: &'static str,
}

/// Validates the form and composes the `mailto:` hand-off.
///
/// On success the stored form draft is cleared. Validation failures are
/// logged with their reason and reported with the generic failure text.
pub async fn submit(
    State(state): State<AppState>,
    Json(request): Json<ReservationRequest>,
) -> Result<Json<ReservationHandoff>, ApiError> {
    let recipient = state.config.reservation_email();

    let handoff = ReservationHandoff::compose(&request, recipient).map_err(|e| {
        warn!(reason = %e, "Reservation request rejected");
        ApiError::validation(FAILURE_MESSAGE)
    })?;

    state
        .session
        .with_session_mut(|s| s.reservation = ReservationRequest::default());

    info!(subject = %handoff.subject, "Reservation handed off to mail client");
    Ok(Json(handoff))
}

/// Copies the cart's pre-order list into the reservation draft, replacing
/// the list from any earlier checkout, and points the visitor at the
/// contact section.
///
/// An empty cart leaves the draft unchanged.
pub async fn checkout(State(state): State<AppState>) -> Json<CheckoutResponse> {
    let (reservation, anchor) = state.session.with_session_mut(|s| {
        let draft = std::mem::take(&mut s.reservation).with_order_note(&s.cart);
        s.reservation = draft.clone();
        (draft, s.navigation.scroll_to(Section::Contact))
    });

    debug!(anchor, "Checkout pre-filled reservation");
    Json(CheckoutResponse {
        reservation,
        page: Page::Home,
        anchor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use crate::routes::test_support::test_state;
    use axum::extract::Path;

    async fn add_to_cart(state: &AppState, item: &str) {
        let Json(update) =
            crate::routes::cart::increment(State(state.clone()), Path(item.to_string())).await;
        assert!(update.quantity > 0);
    }

    fn valid_request() -> ReservationRequest {
        ReservationRequest {
            name: "Asha Rao".into(),
            email: "asha@example.com".into(),
            guests: "4".into(),
            date: "2024-06-01".into(),
            time: "19:30".into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_submit_composes_mailto() {
        let state = test_state().await;

        let Json(handoff) = submit(State(state.clone()), Json(valid_request()))
            .await
            .unwrap();

        assert_eq!(handoff.subject, "Reservation Request from Asha Rao");
        assert!(handoff
            .mailto
            .starts_with("mailto:book@example.com?subject=Reservation%20Request%20from%20Asha%20Rao&body="));
        assert!(handoff.body.contains("Phone: Not provided"));
        assert!(handoff.body.contains("Number of Guests: 4"));
    }

    #[tokio::test]
    async fn test_invalid_request_gets_generic_message() {
        let state = test_state().await;
        let request = ReservationRequest {
            email: "not-an-email".into(),
            ..valid_request()
        };

        let err = submit(State(state), Json(request)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, FAILURE_MESSAGE);
    }

    #[tokio::test]
    async fn test_checkout_prefills_order_then_submit_resets() {
        let state = test_state().await;
        for item in ["A", "A", "B"] {
            add_to_cart(&state, item).await;
        }
        let Json(nav) = crate::routes::navigation::toggle_menu(State(state.clone())).await;
        assert!(nav.mobile_menu_open);

        let Json(checkout_response) = checkout(State(state.clone())).await;
        assert_eq!(checkout_response.page, Page::Home);
        assert_eq!(checkout_response.anchor, "contact");

        let message = &checkout_response.reservation.message;
        assert!(message.contains("2 x A"));
        assert!(message.contains("1 x B"));
        assert!(!state
            .session
            .with_session(|s| s.navigation.is_mobile_menu_open()));

        let request = ReservationRequest {
            message: message.clone(),
            ..valid_request()
        };
        let Json(handoff) = submit(State(state.clone()), Json(request)).await.unwrap();
        assert!(handoff.body.contains("2 x A"));

        let draft = state.session.with_session(|s| s.reservation.clone());
        assert_eq!(draft, ReservationRequest::default());
    }

    #[tokio::test]
    async fn test_second_checkout_replaces_order_note() {
        let state = test_state().await;

        add_to_cart(&state, "A").await;
        let Json(first) = checkout(State(state.clone())).await;
        assert!(first.reservation.message.contains("Total: ₹100 (1 items)"));

        add_to_cart(&state, "B").await;
        let Json(second) = checkout(State(state.clone())).await;

        let message = &second.reservation.message;
        assert_eq!(message.matches("Pre-order from the food menu").count(), 1);
        assert!(message.contains("- 1 x A (₹100)\n- 1 x B (₹200)\n"));
        assert!(message.ends_with("Total: ₹300 (2 items)"));
        assert!(!message.contains("Total: ₹100"));

        let draft = state.session.with_session(|s| s.reservation.clone());
        assert_eq!(&draft.message, message);
    }

    #[tokio::test]
    async fn test_checkout_with_empty_cart_keeps_draft() {
        let state = test_state().await;

        let Json(response) = checkout(State(state)).await;
        assert_eq!(response.reservation, ReservationRequest::default());
    }
}
