//! Rune bidi configuration system
//!
//! This crate provides centralized configuration for the bidi tooling,
//! loading settings from `rune.toml` with environment variable overrides.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct RuneConfig {
    /// Bidi reordering settings
    pub bidi: BidiConfig,
}

/// Bidi reordering configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BidiConfig {
    /// Treat uppercase ASCII letters as strong right-to-left
    pub upper_is_rtl: bool,
    /// Forced paragraph direction ("L" or "R"); detected from the text when unset
    pub base_dir: Option<String>,
    /// Log per-stage character state
    pub debug: bool,
    /// Encoding label for byte input and output (e.g. "utf-8", "windows-1255")
    pub encoding: Option<String>,
}

impl Default for BidiConfig {
    fn default() -> Self {
        Self {
            upper_is_rtl: false,
            base_dir: None,
            debug: false,
            encoding: None,
        }
    }
}

fn parse_flag(val: &str) -> bool {
    val == "1" || val.eq_ignore_ascii_case("true")
}

impl RuneConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the rune.toml configuration file
    ///
    /// # Returns
    /// * `Ok(RuneConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (rune.toml in the current directory)
    /// or return default configuration if file doesn't exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("rune.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("RUNE_BIDI_UPPER_IS_RTL") {
            self.bidi.upper_is_rtl = parse_flag(&val);
        }
        if let Ok(dir) = std::env::var("RUNE_BIDI_BASE_DIR") {
            self.bidi.base_dir = if dir.trim().is_empty() { None } else { Some(dir) };
        }
        if let Ok(val) = std::env::var("RUNE_BIDI_DEBUG") {
            self.bidi.debug = parse_flag(&val);
        }
        if let Ok(label) = std::env::var("RUNE_BIDI_ENCODING") {
            self.bidi.encoding = Some(label);
        }
    }

    /// Load configuration with priority:
    /// 1. Load from rune.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }
}
