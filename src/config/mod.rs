//! # Configuration Management Module
//!
//! Static, process-wide settings read once at startup from `config.toml`.
//! Per-user window preferences that change while the overlay runs live in
//! [`crate::settings`] instead.
//!
//! ## Configuration Structure
//!
//! - [`DataConfig`] - Data root, display language and collection file names
//! - [`OverlayConfig`] - Tracker URL, custom stylesheet and default opacity
//! - [`LoggingConfig`] - Logging level and optional log file
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tracker_overlay::config::Config;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::load("config.toml")?;
//!     println!("Data root: {}", config.data.data_root);
//!
//!     Config::create_default("config.toml")?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration File Format
//!
//! ```toml
//! [data]
//! data_root = "./data"
//! language = "en"
//!
//! [overlay]
//! tracker_url = "https://arctracker.io"
//! opacity = 0.9
//!
//! [logging]
//! level = "info"
//! ```

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data: DataConfig,
    #[serde(default)]
    pub overlay: OverlayConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory holding the synced JSON documents and image folders.
    pub data_root: String,
    /// Preferred language code for localized text; falls back to "en".
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default = "default_items_file")]
    pub items_file: String,
    #[serde(default = "default_quests_file")]
    pub quests_file: String,
    #[serde(default = "default_projects_file")]
    pub projects_file: String,
    #[serde(default = "default_hideout_file")]
    pub hideout_file: String,
}

fn default_language() -> String {
    "en".to_string()
}

fn default_items_file() -> String {
    "items.json".to_string()
}

fn default_quests_file() -> String {
    "quests.json".to_string()
}

fn default_projects_file() -> String {
    "projects.json".to_string()
}

fn default_hideout_file() -> String {
    "hideoutModules.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_root: "./data".to_string(),
            language: default_language(),
            items_file: default_items_file(),
            quests_file: default_quests_file(),
            projects_file: default_projects_file(),
            hideout_file: default_hideout_file(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverlayConfig {
    /// Page loaded into the overlay's web view.
    #[serde(default = "default_tracker_url")]
    pub tracker_url: String,
    /// Optional stylesheet injected after each page load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_css: Option<String>,
    /// Initial window opacity, 0.1 to 1.0. User settings override it once saved.
    #[serde(default = "default_opacity")]
    pub opacity: f32,
}

fn default_tracker_url() -> String {
    "https://arctracker.io".to_string()
}

fn default_opacity() -> f32 {
    0.9
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            tracker_url: default_tracker_url(),
            custom_css: None,
            opacity: default_opacity(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file: Option<String>,
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| anyhow!("Failed to read config file {}: {}", path, e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow!("Failed to parse config file {}: {}", path, e))?;

        config.validate()?;
        Ok(config)
    }

    /// Create a default configuration file
    pub fn create_default(path: &str) -> Result<()> {
        let config = Config::default();
        let content = toml::to_string_pretty(&config)
            .map_err(|e| anyhow!("Failed to serialize default config: {}", e))?;

        fs::write(path, content).map_err(|e| anyhow!("Failed to write config file {}: {}", path, e))?;

        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.data.data_root.trim().is_empty() {
            return Err(anyhow!("data.data_root must not be empty"));
        }
        if self.data.language.trim().is_empty() {
            return Err(anyhow!("data.language must not be empty"));
        }
        if !(0.1..=1.0).contains(&self.overlay.opacity) {
            return Err(anyhow!(
                "overlay.opacity must be between 0.1 and 1.0 (got {})",
                self.overlay.opacity
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data: DataConfig::default(),
            overlay: OverlayConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                file: Some("tracker-overlay.log".to_string()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.data.items_file, "items.json");
        assert_eq!(config.data.hideout_file, "hideoutModules.json");
    }

    #[test]
    fn test_minimal_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [data]
            data_root = "/srv/tracker"

            [logging]
            level = "debug"
            "#,
        )
        .unwrap();
        assert_eq!(config.data.language, "en");
        assert_eq!(config.data.quests_file, "quests.json");
        assert_eq!(config.overlay.opacity, 0.9);
        assert!(config.overlay.custom_css.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_validate_rejects_out_of_range_opacity() {
        let mut config = Config::default();
        for bad in [0.0, 0.05, 1.5, -1.0] {
            config.overlay.opacity = bad;
            assert!(config.validate().is_err(), "opacity {} should be rejected", bad);
        }
        config.overlay.opacity = 0.1;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_blank_paths() {
        let mut config = Config::default();
        config.data.data_root = "  ".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.data.language = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_round_trips_through_toml() {
        let serialized = toml::to_string_pretty(&Config::default()).unwrap();
        let parsed: Config = toml::from_str(&serialized).unwrap();
        assert_eq!(parsed.data.data_root, "./data");
        assert_eq!(parsed.overlay.tracker_url, "https://arctracker.io");
        assert_eq!(parsed.logging.file.as_deref(), Some("tracker-overlay.log"));
    }
}
