//! # Navigation Module
//!
//! Page routing and in-page section navigation.
//!
//! ## Routes
//! ```text
//! ┌───────────────┬──────────────────────────────────────┐
//! │ Path          │ Page                                 │
//! ├───────────────┼──────────────────────────────────────┤
//! │ /             │ Home (all anchored sections)         │
//! │ /food-menu    │ FoodMenu                             │
//! │ anything else │ redirect to Home                     │
//! └───────────────┴──────────────────────────────────────┘
//! ```
//!
//! Selecting a section from the header scrolls to its anchor and always
//! closes the mobile menu.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

// =============================================================================
// Pages
// =============================================================================

/// A routable page of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Page {
    Home,
    FoodMenu,
}

impl Page {
    /// Maps a request path to a page. Unknown paths resolve to `Home`.
    pub fn resolve(path: &str) -> Page {
        let trimmed = path.trim().trim_end_matches('/');
        match trimmed {
            "/food-menu" | "food-menu" => Page::FoodMenu,
            _ => Page::Home,
        }
    }

    /// Canonical path of the page.
    pub const fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::FoodMenu => "/food-menu",
        }
    }
}

// =============================================================================
// Sections
// =============================================================================

/// Anchored section of the home page, in header order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum Section {
    Hero,
    About,
    Brews,
    Menu,
    Experience,
    Events,
    Contact,
}

impl Section {
    /// Every section in navigation order.
    pub const ALL: [Section; 7] = [
        Section::Hero,
        Section::About,
        Section::Brews,
        Section::Menu,
        Section::Experience,
        Section::Events,
        Section::Contact,
    ];

    /// Element id the page scrolls to.
    pub const fn anchor(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::About => "about",
            Section::Brews => "brews",
            Section::Menu => "menu",
            Section::Experience => "experience",
            Section::Events => "events",
            Section::Contact => "contact",
        }
    }

    /// Header link text.
    pub const fn label(self) -> &'static str {
        match self {
            Section::Hero => "Home",
            Section::About => "About",
            Section::Brews => "Brews",
            Section::Menu => "Menu",
            Section::Experience => "Experience",
            Section::Events => "Events",
            Section::Contact => "Contact",
        }
    }

    /// Parses `"menu"` or `"#menu"`.
    pub fn from_anchor(anchor: &str) -> Result<Section, CoreError> {
        let id = anchor.trim().trim_start_matches('#');
        Section::ALL
            .into_iter()
            .find(|section| section.anchor() == id)
            .ok_or_else(|| CoreError::UnknownSection(anchor.to_string()))
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::from_anchor(s)
    }
}

/// Header entry for one section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NavItem {
    pub section: Section,
    pub anchor: String,
    pub label: String,
}

impl From<Section> for NavItem {
    fn from(section: Section) -> Self {
        NavItem {
            section,
            anchor: section.anchor().to_string(),
            label: section.label().to_string(),
        }
    }
}

// =============================================================================
// Navigation State
// =============================================================================

/// Header navigation state for one view session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    mobile_menu_open: bool,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens or closes the mobile menu, returning the new flag.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Closes the mobile menu and returns the anchor to scroll to.
    pub fn scroll_to(&mut self, section: Section) -> &'static str {
        self.mobile_menu_open = false;
        section.anchor()
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    /// Header entries in order.
    pub fn items() -> Vec<NavItem> {
        Section::ALL.into_iter().map(NavItem::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_resolution() {
        assert_eq!(Page::resolve("/"), Page::Home);
        assert_eq!(Page::resolve("/food-menu"), Page::FoodMenu);
        assert_eq!(Page::resolve("/food-menu/"), Page::FoodMenu);
        assert_eq!(Page::resolve("/nonexistent"), Page::Home);
        assert_eq!(Page::resolve(""), Page::Home);
        assert_eq!(Page::FoodMenu.path(), "/food-menu");
    }

    #[test]
    fn test_section_order() {
        let anchors: Vec<_> = Section::ALL.iter().map(|s| s.anchor()).collect();
        assert_eq!(
            anchors,
            vec!["hero", "about", "brews", "menu", "experience", "events", "contact"]
        );
    }

    #[test]
    fn test_from_anchor() {
        assert_eq!(Section::from_anchor("#menu").unwrap(), Section::Menu);
        assert_eq!("contact".parse::<Section>().unwrap(), Section::Contact);
        assert!(matches!(
            Section::from_anchor("#gallery"),
            Err(CoreError::UnknownSection(_))
        ));
    }

    #[test]
    fn test_scroll_closes_mobile_menu() {
        let mut nav = NavigationState::new();
        assert!(nav.toggle_mobile_menu());
        assert!(nav.is_mobile_menu_open());

        let anchor = nav.scroll_to(Section::Events);
        assert_eq!(anchor, "events");
        assert!(!nav.is_mobile_menu_open());
    }

    #[test]
    fn test_toggle_mobile_menu_twice() {
        let mut nav = NavigationState::new();
        nav.toggle_mobile_menu();
        assert!(!nav.toggle_mobile_menu());
    }

    #[test]
    fn test_nav_items() {
        let items = NavigationState::items();
        assert_eq!(items.len(), 7);
        assert_eq!(items[0].label, "Home");
        assert_eq!(items[6].anchor, "contact");
    }
}
