//! Configuration management for the dashboard worker

use crate::error::{DashboardError, Result};
use worker::Env;

/// Public endpoint serving the latest US-wide snapshot
pub const DEFAULT_STATS_URL: &str = "https://api.covidtracking.com/v1/us/current.json";

/// Dashboard configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Environment (production, staging, development)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// Stats endpoint
    pub stats_url: String,

    /// Overlay timing
    pub overlay_delay_ms: u64,  // One-shot delay before the fade starts
    pub fade_interval_ms: u64,  // Time between fade ticks
    pub fade_steps: u8,         // Ticks from opaque to hidden (10 = 0.1 per tick)

    /// Icon grid
    pub icon_palette: Vec<String>,
    pub max_icons: Option<usize>, // None = one icon per death, no cap
}

impl Default for Config {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl Config {
    /// Load configuration from Cloudflare environment variables
    pub fn from_env(env: &Env) -> Result<Self> {
        let config = Self::from_lookup(|key| env.var(key).ok().map(|v| v.to_string()));
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            environment: lookup("ENVIRONMENT").unwrap_or_else(|| "production".to_string()),

            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),

            stats_url: lookup("STATS_URL").unwrap_or_else(|| DEFAULT_STATS_URL.to_string()),

            overlay_delay_ms: lookup("OVERLAY_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(4500),

            fade_interval_ms: lookup("FADE_INTERVAL_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(200),

            fade_steps: lookup("FADE_STEPS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            icon_palette: lookup("ICON_PALETTE")
                .map(|v| {
                    v.split(',')
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(String::from)
                        .collect()
                })
                .unwrap_or_else(|| {
                    vec!["darkblue".to_string(), "tan".to_string(), "maroon".to_string()]
                }),

            max_icons: lookup("MAX_ICONS").and_then(|v| v.parse().ok()),
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.stats_url.is_empty() {
            return Err(DashboardError::Config("STATS_URL must not be empty".into()));
        }
        if self.fade_steps == 0 {
            return Err(DashboardError::Config("FADE_STEPS must be at least 1".into()));
        }
        if self.fade_interval_ms == 0 {
            return Err(DashboardError::Config("FADE_INTERVAL_MS must be positive".into()));
        }
        if self.icon_palette.is_empty() {
            return Err(DashboardError::Config("ICON_PALETTE needs at least one color".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.stats_url, DEFAULT_STATS_URL);
        assert_eq!(config.overlay_delay_ms, 4500);
        assert_eq!(config.fade_interval_ms, 200);
        assert_eq!(config.fade_steps, 10);
        assert_eq!(config.icon_palette, vec!["darkblue", "tan", "maroon"]);
        assert!(config.max_icons.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("STATS_URL", "http://localhost:8787/current.json"),
            ("OVERLAY_DELAY_MS", "1000"),
            ("ICON_PALETTE", "red, green ,,blue"),
            ("MAX_ICONS", "500"),
        ]));
        assert_eq!(config.stats_url, "http://localhost:8787/current.json");
        assert_eq!(config.overlay_delay_ms, 1000);
        assert_eq!(config.icon_palette, vec!["red", "green", "blue"]);
        assert_eq!(config.max_icons, Some(500));
    }

    #[test]
    fn test_unparseable_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("FADE_STEPS", "lots"),
            ("MAX_ICONS", "-3"),
        ]));
        assert_eq!(config.fade_steps, 10);
        assert!(config.max_icons.is_none());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = Config::from_lookup(lookup_from(&[("ICON_PALETTE", " , ")]));
        assert!(matches!(config.validate(), Err(DashboardError::Config(_))));

        let config = Config::from_lookup(lookup_from(&[("FADE_STEPS", "0")]));
        assert!(config.validate().is_err());

        let config = Config::from_lookup(lookup_from(&[("FADE_INTERVAL_MS", "0")]));
        assert!(config.validate().is_err());
    }
}
