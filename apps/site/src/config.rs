//! # Site Configuration
//!
//! Configuration management for the site host.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     TAPROOM_PORT=8080                                                  │
//! │     TAPROOM_DB_PATH=./taproom.db                                       │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     $TAPROOM_CONFIG, or                                                │
//! │     ~/.config/taproom-site/site.toml (Linux)                           │
//! │     ~/Library/Application Support/com.taproom.site/site.toml (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:3000, seven hero images, 5s slide interval                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # site.toml
//! [server]
//! bind_addr = "127.0.0.1"
//! port = 3000
//!
//! [database]
//! path = "./taproom.db"
//!
//! [venue]
//! name = "Brewklyn"
//! reservation_email = "reservations@brewklyn.example"
//!
//! [slideshow]
//! interval_ms = 5000
//! images = ["https://.../hero-1.jpg", "https://.../hero-2.jpg"]
//!
//! [content]
//! brews_limit = 4
//! events_limit = 6
//! placeholder_image = "/images/placeholder.png"
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use taproom_core::content::PLACEHOLDER_IMAGE;
use taproom_core::{HomeLayout, DEFAULT_SLIDE_INTERVAL_MS, HOME_BREWS_LIMIT, HOME_EVENTS_LIMIT};
use tracing::{debug, info, warn};

use crate::error::{SiteError, SiteResult};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "TAPROOM_CONFIG";

// =============================================================================
// Server Settings
// =============================================================================

/// Listener settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Bind address (default: 0.0.0.0 for all interfaces).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerSettings {
    fn default() -> Self {
        ServerSettings {
            bind_addr: default_bind_addr(),
            port: default_port(),
        }
    }
}

impl ServerSettings {
    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

// =============================================================================
// Database Settings
// =============================================================================

/// Content store location.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DatabaseSettings {
    /// SQLite file. When unset, the platform data directory is used.
    #[serde(default)]
    pub path: Option<PathBuf>,
}

// =============================================================================
// Venue Settings
// =============================================================================

/// Venue details shown on the site and used for reservations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueSettings {
    #[serde(default = "default_venue_name")]
    pub name: String,

    /// Recipient of reservation `mailto:` links.
    #[serde(default = "default_reservation_email")]
    pub reservation_email: String,
}

fn default_venue_name() -> String {
    "Brewklyn".to_string()
}

fn default_reservation_email() -> String {
    "reservations@brewklyn.example".to_string()
}

impl Default for VenueSettings {
    fn default() -> Self {
        VenueSettings {
            name: default_venue_name(),
            reservation_email: default_reservation_email(),
        }
    }
}

// =============================================================================
// Slideshow Settings
// =============================================================================

/// Hero slideshow settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowSettings {
    /// Time between automatic advances (milliseconds).
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,

    /// Image URLs in display order.
    #[serde(default = "default_hero_images")]
    pub images: Vec<String>,
}

fn default_interval_ms() -> u64 {
    DEFAULT_SLIDE_INTERVAL_MS
}

const HERO_IMAGE_BASE: &str = "https://static.wixstatic.com/media/";

const HERO_IMAGES: [&str; 7] = [
    "e69b47_2e92d1255cf14e88b729a2f2a0560a3b~mv2.jpg",
    "e69b47_031668e8babe40a9a8926bd60331fafe~mv2.jpg",
    "e69b47_2e2fc5f0d2e641dc826b42873abe2a69~mv2.jpg",
    "4d5d5f_279dd881ed3f43cb822793e35d1c5098~mv2.jpeg",
    "4d5d5f_a7536e045e91432386d47db6026ab401~mv2.jpeg",
    "4d5d5f_3dfa678f9c144b24989849f50c8a1a1a~mv2.jpeg",
    "4d5d5f_416d4fc3ae184d08b31031fb665d96a2~mv2.jpg",
];

fn default_hero_images() -> Vec<String> {
    HERO_IMAGES
        .iter()
        .map(|file| format!("{}{}", HERO_IMAGE_BASE, file))
        .collect()
}

impl Default for SlideshowSettings {
    fn default() -> Self {
        SlideshowSettings {
            interval_ms: default_interval_ms(),
            images: default_hero_images(),
        }
    }
}

impl SlideshowSettings {
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }
}

// =============================================================================
// Content Settings
// =============================================================================

/// Home page content limits and card defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentSettings {
    #[serde(default = "default_brews_limit")]
    pub brews_limit: usize,

    #[serde(default = "default_events_limit")]
    pub events_limit: usize,

    /// Shown on cards whose record has no image.
    #[serde(default = "default_placeholder_image")]
    pub placeholder_image: String,
}

fn default_brews_limit() -> usize {
    HOME_BREWS_LIMIT
}

fn default_events_limit() -> usize {
    HOME_EVENTS_LIMIT
}

fn default_placeholder_image() -> String {
    PLACEHOLDER_IMAGE.to_string()
}

impl Default for ContentSettings {
    fn default() -> Self {
        ContentSettings {
            brews_limit: default_brews_limit(),
            events_limit: default_events_limit(),
            placeholder_image: default_placeholder_image(),
        }
    }
}

// =============================================================================
// Main Site Configuration
// =============================================================================

/// Complete site configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub server: ServerSettings,

    #[serde(default)]
    pub database: DatabaseSettings,

    #[serde(default)]
    pub venue: VenueSettings,

    #[serde(default)]
    pub slideshow: SlideshowSettings,

    #[serde(default)]
    pub content: ContentSettings,
}

impl SiteConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`config_path`, `$TAPROOM_CONFIG`, or site.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> SiteResult<Self> {
        let mut config = Self::default();

        let path = config_path
            .or_else(|| std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        if let Some(path) = path {
            if path.exists() {
                info!(?path, "Loading site config from file");
                config = Self::from_toml(&std::fs::read_to_string(&path)?)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Parses a site.toml document. Missing sections keep their defaults.
    pub fn from_toml(contents: &str) -> SiteResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> SiteResult<()> {
        if self.slideshow.images.is_empty() {
            return Err(SiteError::InvalidConfig(
                "slideshow.images must list at least one image".into(),
            ));
        }

        if self.slideshow.interval_ms == 0 {
            return Err(SiteError::InvalidConfig(
                "slideshow.interval_ms must be greater than 0".into(),
            ));
        }

        if self.venue.reservation_email.trim().is_empty() {
            return Err(SiteError::InvalidConfig(
                "venue.reservation_email is required".into(),
            ));
        }

        Ok(())
    }

    /// Applies overrides from `lookup` (the process environment in
    /// [`SiteConfig::load`]). Unparseable numbers are ignored with a warning.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("TAPROOM_BIND_ADDR") {
            debug!(bind_addr = %addr, "Overriding bind address from environment");
            self.server.bind_addr = addr;
        }

        if let Some(port) = lookup("TAPROOM_PORT") {
            match port.parse::<u16>() {
                Ok(p) => {
                    debug!(port = p, "Overriding port from environment");
                    self.server.port = p;
                }
                Err(_) => warn!(port = %port, "Invalid TAPROOM_PORT in environment"),
            }
        }

        if let Some(path) = lookup("TAPROOM_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database.path = Some(PathBuf::from(path));
        }

        if let Some(email) = lookup("TAPROOM_RESERVATION_EMAIL") {
            self.venue.reservation_email = email;
        }

        if let Some(interval) = lookup("TAPROOM_SLIDE_INTERVAL_MS") {
            match interval.parse::<u64>() {
                Ok(ms) => self.slideshow.interval_ms = ms,
                Err(_) => warn!(
                    interval = %interval,
                    "Invalid TAPROOM_SLIDE_INTERVAL_MS in environment"
                ),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "taproom", "site")
            .map(|dirs| dirs.config_dir().join("site.toml"))
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    /// Returns the SQLite file to open.
    ///
    /// ## Platform-Specific Defaults
    /// - **macOS**: `~/Library/Application Support/com.taproom.site/taproom.db`
    /// - **Windows**: `%APPDATA%\taproom\site\data\taproom.db`
    /// - **Linux**: `~/.local/share/taproom-site/taproom.db`
    pub fn database_path(&self) -> SiteResult<PathBuf> {
        if let Some(path) = &self.database.path {
            return Ok(path.clone());
        }

        let dirs = directories::ProjectDirs::from("com", "taproom", "site").ok_or_else(|| {
            SiteError::InvalidConfig("Could not determine app data directory".into())
        })?;

        Ok(dirs.data_dir().join("taproom.db"))
    }

    /// Card limits and placeholder for the home page.
    pub fn home_layout(&self) -> HomeLayout {
        HomeLayout {
            brews_limit: self.content.brews_limit,
            events_limit: self.content.events_limit,
            placeholder_image: self.content.placeholder_image.clone(),
        }
    }

    pub fn bind_address(&self) -> String {
        self.server.bind_address()
    }

    pub fn reservation_email(&self) -> &str {
        &self.venue.reservation_email
    }
}
