//! # Content Module
//!
//! Shapes of the two CMS collections the home page reads, and the card
//! projections the page renders from them.
//!
//! ## Collections
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  "events"          ──► Event          ──► EventCard  (first 6 shown)    │
//! │  "signaturebrews"  ──► SignatureBrew  ──► BrewCard   (first 4 shown)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every CMS field except the system fields is optional. Cards fill the
//! gaps: a missing image becomes the placeholder, a missing name or
//! description becomes an empty string, and a missing CTA label becomes
//! "Learn More".

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;
use crate::{HOME_BREWS_LIMIT, HOME_EVENTS_LIMIT};

/// Image shown when a record has none.
pub const PLACEHOLDER_IMAGE: &str = "/images/placeholder.png";

/// Label of an event's call-to-action button when the record has none.
pub const DEFAULT_CTA_TEXT: &str = "Learn More";

// =============================================================================
// Collection
// =============================================================================

/// A CMS collection the site knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Collection {
    Events,
    #[serde(rename = "signaturebrews")]
    SignatureBrews,
}

impl Collection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Collection::Events => "events",
            Collection::SignatureBrews => "signaturebrews",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Collection {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "events" => Ok(Collection::Events),
            "signaturebrews" => Ok(Collection::SignatureBrews),
            other => Err(CoreError::UnknownCollection(other.to_string())),
        }
    }
}

// =============================================================================
// Records
// =============================================================================

/// A venue event or happy-hour listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Event {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_createdDate")]
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "_updatedDate")]
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    pub event_name: Option<String>,

    #[ts(as = "Option<String>")]
    pub event_date: Option<NaiveDate>,

    #[ts(as = "Option<String>")]
    pub event_time: Option<NaiveTime>,

    pub description: Option<String>,

    pub event_image: Option<String>,

    /// Happy-hour listings get a badge on the card.
    pub is_happy_hour: Option<bool>,

    pub cta_text: Option<String>,

    pub cta_link: Option<String>,
}

/// A featured house beer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SignatureBrew {
    #[serde(rename = "_id")]
    pub id: String,

    #[serde(rename = "_createdDate")]
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[serde(rename = "_updatedDate")]
    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,

    pub name: Option<String>,

    pub beer_image: Option<String>,

    pub flavor_description: Option<String>,

    pub details_url: Option<String>,

    /// Style label, e.g. "Hefeweizen".
    pub beer_style: Option<String>,
}

/// One record from either collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ContentItem {
    Event(Event),
    SignatureBrew(SignatureBrew),
}

impl ContentItem {
    pub fn collection(&self) -> Collection {
        match self {
            ContentItem::Event(_) => Collection::Events,
            ContentItem::SignatureBrew(_) => Collection::SignatureBrews,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            ContentItem::Event(event) => &event.id,
            ContentItem::SignatureBrew(brew) => &brew.id,
        }
    }

    pub fn into_event(self) -> Option<Event> {
        match self {
            ContentItem::Event(event) => Some(event),
            ContentItem::SignatureBrew(_) => None,
        }
    }

    pub fn into_signature_brew(self) -> Option<SignatureBrew> {
        match self {
            ContentItem::SignatureBrew(brew) => Some(brew),
            ContentItem::Event(_) => None,
        }
    }
}

impl From<Event> for ContentItem {
    fn from(event: Event) -> Self {
        ContentItem::Event(event)
    }
}

impl From<SignatureBrew> for ContentItem {
    fn from(brew: SignatureBrew) -> Self {
        ContentItem::SignatureBrew(brew)
    }
}

// =============================================================================
// Cards
// =============================================================================

/// Render-ready event card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EventCard {
    pub id: String,
    pub name: String,
    /// ISO date (`YYYY-MM-DD`), if scheduled.
    pub date: Option<String>,
    /// 24-hour time (`HH:MM`), if scheduled.
    pub time: Option<String>,
    pub description: String,
    pub image: String,
    pub is_happy_hour: bool,
    pub cta_text: String,
    pub cta_link: Option<String>,
}

impl EventCard {
    pub fn from_event(event: &Event, placeholder_image: &str) -> Self {
        EventCard {
            id: event.id.clone(),
            name: event.event_name.clone().unwrap_or_default(),
            date: event.event_date.map(|d| d.format("%Y-%m-%d").to_string()),
            time: event.event_time.map(|t| t.format("%H:%M").to_string()),
            description: event.description.clone().unwrap_or_default(),
            image: non_empty_or(&event.event_image, placeholder_image),
            is_happy_hour: event.is_happy_hour.unwrap_or(false),
            cta_text: non_empty_or(&event.cta_text, DEFAULT_CTA_TEXT),
            cta_link: event.cta_link.clone().filter(|link| !link.is_empty()),
        }
    }
}

/// Render-ready signature brew card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct BrewCard {
    pub id: String,
    pub name: String,
    pub style: String,
    pub flavor_description: String,
    pub image: String,
    pub details_url: Option<String>,
}

impl BrewCard {
    pub fn from_brew(brew: &SignatureBrew, placeholder_image: &str) -> Self {
        BrewCard {
            id: brew.id.clone(),
            name: brew.name.clone().unwrap_or_default(),
            style: brew.beer_style.clone().unwrap_or_default(),
            flavor_description: brew.flavor_description.clone().unwrap_or_default(),
            image: non_empty_or(&brew.beer_image, placeholder_image),
            details_url: brew.details_url.clone().filter(|url| !url.is_empty()),
        }
    }
}

fn non_empty_or(value: &Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.clone(),
        _ => fallback.to_string(),
    }
}

// =============================================================================
// Home Page Content
// =============================================================================

/// How many cards of each kind the home page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HomeLayout {
    pub brews_limit: usize,
    pub events_limit: usize,
    pub placeholder_image: String,
}

impl Default for HomeLayout {
    fn default() -> Self {
        HomeLayout {
            brews_limit: HOME_BREWS_LIMIT,
            events_limit: HOME_EVENTS_LIMIT,
            placeholder_image: PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// The brews and events sections of the home page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HomeContent {
    pub brews: Vec<BrewCard>,
    pub events: Vec<EventCard>,
}

impl HomeContent {
    /// Takes the leading records of each collection, in fetch order.
    pub fn assemble(brews: &[SignatureBrew], events: &[Event], layout: &HomeLayout) -> Self {
        HomeContent {
            brews: brews
                .iter()
                .take(layout.brews_limit)
                .map(|brew| BrewCard::from_brew(brew, &layout.placeholder_image))
                .collect(),
            events: events
                .iter()
                .take(layout.events_limit)
                .map(|event| EventCard::from_event(event, &layout.placeholder_image))
                .collect(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: &str) -> Event {
        let now = Utc::now();
        Event {
            id: id.to_string(),
            created_at: now,
            updated_at: now,
            event_name: None,
            event_date: None,
            event_time: None,
            description: None,
            event_image: None,
            is_happy_hour: None,
            cta_text: None,
            cta_link: None,
        }
    }

    fn brew(id: &str) -> SignatureBrew {
        let now = Utc::now();
        SignatureBrew {
            id: id.to_string(),
            created_at: now,
            updated_at: now,
            name: Some(format!("Brew {}", id)),
            beer_image: None,
            flavor_description: None,
            details_url: None,
            beer_style: None,
        }
    }

    #[test]
    fn test_collection_names() {
        assert_eq!("events".parse::<Collection>().unwrap(), Collection::Events);
        assert_eq!(
            "signaturebrews".parse::<Collection>().unwrap(),
            Collection::SignatureBrews
        );
        assert!(matches!(
            "menus".parse::<Collection>(),
            Err(CoreError::UnknownCollection(_))
        ));
        assert_eq!(Collection::SignatureBrews.to_string(), "signaturebrews");
    }

    #[test]
    fn test_event_card_defaults() {
        let card = EventCard::from_event(&event("e1"), PLACEHOLDER_IMAGE);

        assert_eq!(card.name, "");
        assert_eq!(card.description, "");
        assert_eq!(card.image, PLACEHOLDER_IMAGE);
        assert_eq!(card.cta_text, "Learn More");
        assert!(!card.is_happy_hour);
        assert!(card.cta_link.is_none());
    }

    #[test]
    fn test_event_card_uses_record_fields() {
        let mut record = event("e2");
        record.event_name = Some("Trivia Night".to_string());
        record.event_date = NaiveDate::from_ymd_opt(2024, 7, 12);
        record.event_time = NaiveTime::from_hms_opt(19, 30, 0);
        record.is_happy_hour = Some(true);
        record.cta_text = Some("Book a Table".to_string());

        let card = EventCard::from_event(&record, PLACEHOLDER_IMAGE);
        assert_eq!(card.name, "Trivia Night");
        assert_eq!(card.date.as_deref(), Some("2024-07-12"));
        assert_eq!(card.time.as_deref(), Some("19:30"));
        assert!(card.is_happy_hour);
        assert_eq!(card.cta_text, "Book a Table");
    }

    #[test]
    fn test_blank_image_falls_back_to_placeholder() {
        let mut record = brew("b1");
        record.beer_image = Some("  ".to_string());
        let card = BrewCard::from_brew(&record, "/img/none.png");
        assert_eq!(card.image, "/img/none.png");
    }

    #[test]
    fn test_home_content_limits() {
        let brews: Vec<_> = (0..6).map(|i| brew(&i.to_string())).collect();
        let events: Vec<_> = (0..9).map(|i| event(&i.to_string())).collect();

        let home = HomeContent::assemble(&brews, &events, &HomeLayout::default());
        assert_eq!(home.brews.len(), 4);
        assert_eq!(home.events.len(), 6);
        assert_eq!(home.brews[0].id, "0");
        assert_eq!(home.events[5].id, "5");
    }

    #[test]
    fn test_home_content_with_fewer_records() {
        let home = HomeContent::assemble(&[brew("x")], &[], &HomeLayout::default());
        assert_eq!(home.brews.len(), 1);
        assert!(home.events.is_empty());
    }

    #[test]
    fn test_event_serializes_cms_field_names() {
        let json = serde_json::to_value(event("e3")).unwrap();
        assert_eq!(json["_id"], "e3");
        assert!(json.get("_createdDate").is_some());
        assert!(json.get("eventName").is_some());
    }

    #[test]
    fn test_content_item_accessors() {
        let item = ContentItem::from(brew("b9"));
        assert_eq!(item.collection(), Collection::SignatureBrews);
        assert_eq!(item.id(), "b9");
        assert!(item.clone().into_event().is_none());
        assert!(item.into_signature_brew().is_some());
    }
}
