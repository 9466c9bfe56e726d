//! # Reservation Module
//!
//! Turns the contact form into a `mailto:` link addressed to the venue.
//! Nothing is sent from here; the visitor's mail client does the sending.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ReservationRequest ──validate()──► subject() + body()                  │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                     mailto:{venue}?subject=...&body=...                 │
//! │                                          │                              │
//! │                                          ▼                              │
//! │                         form resets to ReservationRequest::default()    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Subject and body are escaped the way `encodeURIComponent` escapes them,
//! so spaces become `%20` and newlines `%0A`.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::cart::{CartStore, ORDER_NOTE_HEADER};
use crate::validation::{
    validate_date, validate_email, validate_guests, validate_message, validate_name,
    validate_phone, validate_time, ValidationResult,
};

/// Everything `encodeURIComponent` escapes: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Shown after the mail client has been handed the request.
pub const SUCCESS_MESSAGE: &str =
    "Reservation request sent! Your email client should open with the request details.";

/// Shown when the request could not be composed.
pub const FAILURE_MESSAGE: &str =
    "There was an error sending your reservation request. Please try again.";

/// Contact form contents. Every field is free text; blank optional fields
/// are reported as "Not provided" / "Not specified" in the message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct ReservationRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub guests: String,
    #[serde(rename = "reservationDate")]
    pub date: String,
    #[serde(rename = "reservationTime")]
    pub time: String,
    pub message: String,
}

impl ReservationRequest {
    /// Checks every field, reporting the first failure.
    pub fn validate(&self) -> ValidationResult<()> {
        validate_name(&self.name)?;
        validate_email(&self.email)?;
        validate_phone(&self.phone)?;
        validate_guests(&self.guests)?;
        validate_date(&self.date)?;
        validate_time(&self.time)?;
        validate_message(&self.message)?;
        Ok(())
    }

    pub fn subject(&self) -> String {
        format!("Reservation Request from {}", self.name.trim())
    }

    /// The email body. Field values go in as typed; only the composed
    /// text is trimmed.
    pub fn body(&self) -> String {
        let phone = or_placeholder(&self.phone, "Not provided");
        let guests = or_placeholder(&self.guests, "Not specified");

        let body = format!(
            "New Reservation Request:\n\
             \n\
             Name: {}\n\
             Email: {}\n\
             Phone: {}\n\
             Number of Guests: {}\n\
             Date: {}\n\
             Time: {}\n\
             \n\
             Message:\n\
             {}\n\
             \n\
             Please contact the customer to confirm their reservation.",
            self.name, self.email, phone, guests, self.date, self.time, self.message,
        );
        body.trim().to_string()
    }

    /// Builds the `mailto:` link for `recipient`.
    pub fn mailto(&self, recipient: &str) -> String {
        format!(
            "mailto:{}?subject={}&body={}",
            recipient,
            encode_uri_component(&self.subject()),
            encode_uri_component(&self.body()),
        )
    }

    /// Puts the cart's pre-order list at the end of the message.
    ///
    /// A pre-order list from an earlier checkout is replaced, so the
    /// message only ever carries the current cart. An empty cart removes
    /// any earlier list and otherwise leaves the request unchanged.
    pub fn with_order_note(mut self, cart: &CartStore) -> Self {
        let written = match self.message.find(ORDER_NOTE_HEADER) {
            Some(start) => self.message[..start].trim_end(),
            None => self.message.as_str(),
        };

        self.message = match cart.order_note() {
            Some(note) if written.trim().is_empty() => note,
            Some(note) => format!("{}\n\n{}", written.trim_end(), note),
            None => written.to_string(),
        };
        self
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.trim().is_empty() {
        placeholder
    } else {
        value
    }
}

/// Percent-encodes `text` with `encodeURIComponent` semantics.
pub fn encode_uri_component(text: &str) -> String {
    utf8_percent_encode(text, URI_COMPONENT).to_string()
}

/// A composed reservation ready to hand to the mail client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ReservationHandoff {
    pub subject: String,
    pub body: String,
    pub mailto: String,
    pub message: String,
}

impl ReservationHandoff {
    pub fn compose(request: &ReservationRequest, recipient: &str) -> ValidationResult<Self> {
        request.validate()?;
        Ok(ReservationHandoff {
            subject: request.subject(),
            body: request.body(),
            mailto: request.mailto(recipient),
            message: SUCCESS_MESSAGE.to_string(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, CatalogItem};
    use crate::error::ValidationError;
    use crate::money::Money;
    use std::sync::Arc;

    fn request() -> ReservationRequest {
        ReservationRequest {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            date: "2024-08-15".to_string(),
            time: "19:30".to_string(),
            message: "Window seat please".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_subject() {
        assert_eq!(request().subject(), "Reservation Request from Asha");
    }

    #[test]
    fn test_body_uses_placeholders_for_blank_optionals() {
        let body = request().body();
        assert_eq!(
            body,
            "New Reservation Request:\n\nName: Asha\nEmail: asha@example.com\nPhone: Not provided\n\
             Number of Guests: Not specified\nDate: 2024-08-15\nTime: 19:30\n\nMessage:\n\
             Window seat please\n\nPlease contact the customer to confirm their reservation."
        );
    }

    #[test]
    fn test_body_includes_phone_and_guests() {
        let mut req = request();
        req.phone = "+91 98765 43210".to_string();
        req.guests = "4".to_string();

        let body = req.body();
        assert!(body.contains("Phone: +91 98765 43210\n"));
        assert!(body.contains("Number of Guests: 4\n"));
    }

    #[test]
    fn test_encode_uri_component() {
        assert_eq!(encode_uri_component("a b\nc"), "a%20b%0Ac");
        assert_eq!(encode_uri_component("-_.!~*'()"), "-_.!~*'()");
        assert_eq!(encode_uri_component("a&b=c?"), "a%26b%3Dc%3F");
        assert_eq!(encode_uri_component("₹"), "%E2%82%B9");
    }

    #[test]
    fn test_mailto() {
        let link = request().mailto("venue@example.com");
        assert!(link.starts_with(
            "mailto:venue@example.com?subject=Reservation%20Request%20from%20Asha&body="
        ));
        assert!(link.contains("New%20Reservation%20Request%3A%0A%0AName%3A%20Asha"));
        assert!(!link.contains(' '));
    }

    #[test]
    fn test_validation_failures() {
        let mut req = request();
        req.name = String::new();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::Required { .. })
        ));

        let mut req = request();
        req.guests = "0".to_string();
        assert!(matches!(
            req.validate(),
            Err(ValidationError::OutOfRange { .. })
        ));

        let mut req = request();
        req.time = "late".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_handoff_requires_valid_request() {
        let handoff = ReservationHandoff::compose(&request(), "venue@example.com").unwrap();
        assert_eq!(handoff.message, SUCCESS_MESSAGE);
        assert!(handoff.mailto.starts_with("mailto:venue@example.com?"));

        let mut bad = request();
        bad.email = "nope".to_string();
        assert!(ReservationHandoff::compose(&bad, "venue@example.com").is_err());
    }

    #[test]
    fn test_with_order_note() {
        let catalog = Catalog::new(vec![CatalogItem::new(
            "Margherita",
            Money::from_minor(345),
            "Pizza",
        )])
        .unwrap();
        let mut cart = CartStore::new(Arc::new(catalog));

        let unchanged = request().with_order_note(&cart);
        assert_eq!(unchanged.message, "Window seat please");

        cart.increment("Margherita");
        let req = request().with_order_note(&cart);
        assert!(req
            .message
            .starts_with("Window seat please\n\nPre-order from the food menu:\n"));
        assert!(req.message.ends_with("Total: ₹345 (1 items)"));

        let blank = ReservationRequest::default().with_order_note(&cart);
        assert!(blank.message.starts_with("Pre-order"));
    }

    #[test]
    fn test_deserializes_form_field_names() {
        let req: ReservationRequest = serde_json::from_str(
            r#"{"name":"A","email":"a@b.co","reservationDate":"2024-01-02","reservationTime":"18:00"}"#,
        )
        .unwrap();
        assert_eq!(req.date, "2024-01-02");
        assert_eq!(req.time, "18:00");
        assert_eq!(req.phone, "");

        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["reservationDate"], "2024-01-02");
        assert!(json.get("date").is_none());
    }

    #[test]
    fn test_body_keeps_message_indentation() {
        let mut req = request();
        req.message = "Order:\n  - 2 x Margherita\n    extra basil".to_string();

        let body = req.body();
        assert!(body.contains("Message:\nOrder:\n  - 2 x Margherita\n    extra basil\n\n"));
        assert!(body.starts_with("New Reservation Request:"));
        assert!(body.ends_with("confirm their reservation."));
    }

    #[test]
    fn test_order_note_is_replaced_on_repeat_checkout() {
        let catalog = Catalog::new(vec![
            CatalogItem::new("A", Money::from_minor(100), "Pizza"),
            CatalogItem::new("B", Money::from_minor(200), "Pizza"),
        ])
        .unwrap();
        let mut cart = CartStore::new(Arc::new(catalog));

        cart.increment("A");
        let first = request().with_order_note(&cart);

        cart.increment("B");
        let second = first.with_order_note(&cart);

        assert_eq!(second.message.matches(ORDER_NOTE_HEADER).count(), 1);
        assert!(second.message.starts_with("Window seat please\n\nPre-order"));
        assert!(second.message.ends_with("Total: ₹300 (2 items)"));

        cart.reset();
        let cleared = second.with_order_note(&cart);
        assert_eq!(cleared.message, "Window seat please");
    }
}
