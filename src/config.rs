//! Page controller configuration.
//!
//! Defaults reproduce the production page. A page may override any subset of
//! fields through a JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "search_debounce_ms": 200, "log_level": "debug" }
//! </script>
//! ```
//!
//! Missing fields keep their defaults; an invalid block is rejected as a
//! whole and the caller falls back to [`SiteConfig::default`].

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::SiteError;
use crate::util::generations::GENERATIONS;

pub const DEFAULT_THEME_STORAGE_KEY: &str = "hyundai-coupe-theme";
pub const DEFAULT_LANGUAGE_STORAGE_KEY: &str = "hyundai-coupe-language";
pub const DEFAULT_NAVBAR_SCROLL_THRESHOLD: f64 = 100.0;
pub const DEFAULT_SCROLL_DEBOUNCE_MS: u32 = 100;
pub const DEFAULT_SEARCH_DEBOUNCE_MS: u32 = 300;
pub const DEFAULT_ANNOUNCE_DELAY_MS: u32 = 100;
pub const DEFAULT_ANCHOR_GAP_PX: f64 = 20.0;
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Id of the optional JSON configuration block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub theme_storage_key: String,
    pub language_storage_key: String,
    /// Scroll offset past which the navbar switches to its scrolled style.
    pub navbar_scroll_threshold: f64,
    pub scroll_debounce_ms: u32,
    pub search_debounce_ms: u32,
    /// Delay between clearing the live region and writing a new message.
    pub announce_delay_ms: u32,
    /// Space left between the navbar and an anchor target after scrolling.
    pub anchor_gap_px: f64,
    /// Section ids followed by the scroll indicator, in page order.
    pub tracked_sections: Vec<String>,
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            theme_storage_key: DEFAULT_THEME_STORAGE_KEY.to_owned(),
            language_storage_key: DEFAULT_LANGUAGE_STORAGE_KEY.to_owned(),
            navbar_scroll_threshold: DEFAULT_NAVBAR_SCROLL_THRESHOLD,
            scroll_debounce_ms: DEFAULT_SCROLL_DEBOUNCE_MS,
            search_debounce_ms: DEFAULT_SEARCH_DEBOUNCE_MS,
            announce_delay_ms: DEFAULT_ANNOUNCE_DELAY_MS,
            anchor_gap_px: DEFAULT_ANCHOR_GAP_PX,
            tracked_sections: GENERATIONS.iter().map(|g| g.id.to_owned()).collect(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse and validate a (possibly partial) JSON override.
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| SiteError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the config from an optional raw block, falling back to
    /// defaults. The error, if any, is returned alongside so the caller can
    /// log it once logging is up.
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> (Self, Option<SiteError>) {
        match raw.map(str::trim).filter(|r| !r.is_empty()) {
            None => (Self::default(), None),
            Some(raw) => match Self::from_json(raw) {
                Ok(config) => (config, None),
                Err(err) => (Self::default(), Some(err)),
            },
        }
    }

    pub fn validate(&self) -> Result<(), SiteError> {
        if self.theme_storage_key.trim().is_empty() || self.language_storage_key.trim().is_empty() {
            return Err(SiteError::InvalidConfig("storage keys must not be empty".into()));
        }
        if self.theme_storage_key == self.language_storage_key {
            return Err(SiteError::InvalidConfig("theme and language storage keys must differ".into()));
        }
        if self.tracked_sections.is_empty() {
            return Err(SiteError::InvalidConfig("tracked_sections must not be empty".into()));
        }
        if !self.navbar_scroll_threshold.is_finite() || self.navbar_scroll_threshold < 0.0 {
            return Err(SiteError::InvalidConfig("navbar_scroll_threshold must be a non-negative number".into()));
        }
        if !self.anchor_gap_px.is_finite() {
            return Err(SiteError::InvalidConfig("anchor_gap_px must be finite".into()));
        }
        if self.log_level.parse::<log::Level>().is_err() {
            return Err(SiteError::InvalidConfig(format!("unknown log level {:?}", self.log_level)));
        }
        Ok(())
    }

    /// Console log level; validated configs always parse.
    #[must_use]
    pub fn level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
