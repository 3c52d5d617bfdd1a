//! Configuration module for the tinyscan CLI.
//!
//! This module handles loading and saving `tinyscan.toml`, and turning it
//! into scanner options.

use dirs::{config_dir, home_dir};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use tinyc_lex::{ScanOptions, DEFAULT_LINE_CAPACITY};

use crate::commands::common::OutputFormat;
use crate::error::{Result, TinyscanError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "tinyscan.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Scanner settings.
    #[serde(default)]
    pub scan: ScanConfig,
}

/// Scanner-specific configuration options.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScanConfig {
    /// Echo each source line to the listing as it is read.
    #[serde(default)]
    pub echo_source: bool,

    /// Write a trace line per token to the listing.
    #[serde(default)]
    pub trace_scan: bool,

    /// Bytes per line buffer refill.
    #[serde(default = "default_line_capacity")]
    pub line_capacity: usize,

    /// Output format for the token stream.
    #[serde(default)]
    pub format: OutputFormat,
}

fn default_line_capacity() -> usize {
    DEFAULT_LINE_CAPACITY
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            echo_source: false,
            trace_scan: false,
            line_capacity: default_line_capacity(),
            format: OutputFormat::default(),
        }
    }
}

impl ScanConfig {
    /// Converts the file settings into scanner options.
    pub fn to_scan_options(&self) -> ScanOptions {
        ScanOptions::default()
            .with_echo_source(self.echo_source)
            .with_trace_scan(self.trace_scan)
            .with_line_capacity(self.line_capacity)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbose: false,
            scan: ScanConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TinyscanError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            TinyscanError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            TinyscanError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("tinyscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("tinyscan").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
