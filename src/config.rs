//! Configuration management for exorcism-guide
//!
//! Handles loading, saving, and default configuration values.
//! Config file location: ~/.config/exorcism-guide/config.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Shortest acknowledgment window for copy feedback
const MIN_ACK_MS: u64 = 2000;
/// Longest acknowledgment window for copy feedback
const MAX_ACK_MS: u64 = 2500;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Section shown on startup
    pub default_section: String,
    /// How long "Copied!" stays on a copy button
    pub acknowledgment_ms: u64,
    /// Scroll offset (lines) past which the scroll-to-top control appears
    pub scroll_top_threshold: u16,
    pub clipboard: ClipboardOptions,
    pub log: LogOptions,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_section: "home".into(),
            acknowledgment_ms: MIN_ACK_MS,
            scroll_top_threshold: 12,
            clipboard: ClipboardOptions::default(),
            log: LogOptions::default(),
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("exorcism-guide");
        Ok(config_dir.join("config.toml"))
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load config from an explicit path, writing defaults if missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(path)?;
            return Ok(config);
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;

        toml::from_str(&content)
            .with_context(|| format!("Failed to parse config from {:?}", path))
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let content = toml::to_string_pretty(self)
            .context("Failed to serialize config")?;

        fs::write(path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }

    /// Copy acknowledgment window, kept within 2.0-2.5 seconds
    pub fn acknowledgment(&self) -> Duration {
        Duration::from_millis(self.acknowledgment_ms.clamp(MIN_ACK_MS, MAX_ACK_MS))
    }
}

/// Clipboard behaviour
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClipboardOptions {
    /// Explicit copy command, e.g. ["xclip", "-selection", "clipboard"]
    pub command: Option<Vec<String>>,
    /// Fall back to the terminal's OSC 52 clipboard
    pub osc52_fallback: bool,
}

impl Default for ClipboardOptions {
    fn default() -> Self {
        Self {
            command: None,
            osc52_fallback: true,
        }
    }
}

/// Logging options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogOptions {
    /// Filter directive used when RUST_LOG is unset
    pub level: String,
}

impl Default for LogOptions {
    fn default() -> Self {
        Self {
            level: "info".into(),
        }
    }
}
