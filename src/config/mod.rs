//! Configuration management

mod tools;

pub use tools::{ToolBadge, ToolLabel, ToolLabels};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Delay before a tooltip shows, in milliseconds
    #[serde(default = "default_tooltip_delay")]
    pub tooltip_delay_ms: u64,

    /// Delay before a persona icon's description tooltip shows
    #[serde(default = "default_icon_tooltip_delay")]
    pub icon_tooltip_delay_ms: u64,

    /// Grace period keeping a tooltip group warm after the pointer leaves
    #[serde(default = "default_tooltip_grace")]
    pub tooltip_grace_ms: u64,

    /// Poll interval in milliseconds for the event loop
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,

    /// Friendly tool badge labels
    #[serde(default)]
    pub tool_labels: ToolLabels,
}

const fn default_tooltip_delay() -> u64 {
    500
}

const fn default_icon_tooltip_delay() -> u64 {
    1000
}

const fn default_tooltip_grace() -> u64 {
    100
}

const fn default_poll_interval() -> u64 {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tooltip_delay_ms: default_tooltip_delay(),
            icon_tooltip_delay_ms: default_icon_tooltip_delay(),
            tooltip_grace_ms: default_tooltip_grace(),
            poll_interval_ms: default_poll_interval(),
            tool_labels: ToolLabels::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location
    ///
    /// # Errors
    ///
    /// Returns an error if reading or parsing the config file fails
    pub fn load() -> Result<Self> {
        let path = Self::default_path();
        if path.exists() {
            Self::load_from(&path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        // Ensure any new default tool labels are available
        config.tool_labels.merge_defaults();
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Save configuration to a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory {}", parent.display())
            })?;
        }
        let contents = serde_json::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// Get the default configuration file path
    #[must_use]
    pub fn default_path() -> PathBuf {
        crate::paths::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(crate::paths::APP_DIR)
            .join("config.json")
    }

    /// Tooltip show delay
    #[must_use]
    pub const fn tooltip_delay(&self) -> Duration {
        Duration::from_millis(self.tooltip_delay_ms)
    }

    /// Icon tooltip show delay
    #[must_use]
    pub const fn icon_tooltip_delay(&self) -> Duration {
        Duration::from_millis(self.icon_tooltip_delay_ms)
    }

    /// Tooltip group grace period
    #[must_use]
    pub const fn tooltip_grace(&self) -> Duration {
        Duration::from_millis(self.tooltip_grace_ms)
    }

    /// Event loop poll interval
    #[must_use]
    pub const fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.tooltip_delay(), Duration::from_millis(500));
        assert_eq!(config.icon_tooltip_delay(), Duration::from_millis(1000));
        assert_eq!(config.tooltip_grace(), Duration::from_millis(100));
        assert_eq!(config.poll_interval_ms, 50);
        assert_eq!(config.tool_labels.resolve("SearchTool").label, "Search");
    }

    #[test]
    fn test_save_and_load() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.json");

        let config = Config {
            tooltip_delay_ms: 250,
            icon_tooltip_delay_ms: 750,
            tooltip_grace_ms: 80,
            poll_interval_ms: 16,
            tool_labels: ToolLabels::default(),
        };

        config.save_to(&config_path)?;
        let loaded = Config::load_from(&config_path)?;

        assert_eq!(config, loaded);
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_is_error() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.json");

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_serde_defaults() -> Result<(), Box<dyn std::error::Error>> {
        let json = r#"{"tooltip_delay_ms": 300}"#;
        let config: Config = serde_json::from_str(json)?;

        assert_eq!(config.tooltip_delay_ms, 300);
        assert_eq!(config.tooltip_grace_ms, 100);
        assert_eq!(config.tool_labels, ToolLabels::default());
        Ok(())
    }

    #[test]
    fn test_load_merges_default_tool_labels() -> Result<(), Box<dyn std::error::Error>> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.json");
        fs::write(
            &config_path,
            r#"{"tool_labels": {"InternetSearchTool": {"label": "Web"}}}"#,
        )?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.tool_labels.resolve("InternetSearchTool").label, "Web");
        assert_eq!(config.tool_labels.resolve("SearchTool").label, "Search");
        Ok(())
    }

    #[test]
    fn test_default_path() {
        let path = Config::default_path();
        assert!(path.ends_with("assistant-picker/config.json"));
    }
}
