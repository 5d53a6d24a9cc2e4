//! Site behavior configuration.
//!
//! Every controller receives a [`SiteConfig`] at construction instead of
//! hardcoding timings. Pages may override any field with an inline
//! `<script type="application/json" id="site-config">` block; absent fields
//! keep their defaults.
//!
//! ERROR HANDLING
//! ==============
//! A malformed override block yields a [`ConfigError`]. The boot sequence logs
//! it and falls back to [`SiteConfig::default`], so a typo in page markup can
//! never disable the site's behavior.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

/// Element id of the optional inline JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("site config parse failed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("counter_steps must be at least 1")]
    ZeroCounterSteps,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    /// Console log level name (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
    pub nav_scroll_throttle_ms: u32,
    pub back_to_top_throttle_ms: u32,
    pub back_to_top_threshold_px: f64,
    pub parallax_throttle_ms: u32,
    pub resize_debounce_ms: u32,
    /// Latency of the simulated contact transport.
    pub submit_latency_ms: u32,
    pub success_banner_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_steps: u32,
    pub reveal_stagger_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_owned(),
            nav_scroll_throttle_ms: 100,
            back_to_top_throttle_ms: 200,
            back_to_top_threshold_px: 500.0,
            parallax_throttle_ms: 10,
            resize_debounce_ms: 20,
            submit_latency_ms: 1500,
            success_banner_ms: 5000,
            counter_duration_ms: 2000,
            counter_steps: 60,
            reveal_stagger_ms: 100,
        }
    }
}

impl SiteConfig {
    /// Parse an override block. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or mistyped fields and
    /// [`ConfigError::ZeroCounterSteps`] when the counter would never advance.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_json::from_str(raw)?;
        if config.counter_steps == 0 {
            return Err(ConfigError::ZeroCounterSteps);
        }
        Ok(config)
    }
}
