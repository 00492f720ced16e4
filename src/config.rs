//! Plumbline Configuration Module
//!
//! Manages registry and render options.
//! Config is read from `plumbline.toml` in the working directory unless a
//! path is given.
//!
//! ## Priority Order (highest to lowest)
//!
//! 1. Environment variables (`PLUMBLINE_LAYOUT`, `PLUMBLINE_SHOW_EDGE_LABELS`,
//!    `PLUMBLINE_INCLUDE_AUX`)
//! 2. Config file (`plumbline.toml`)
//! 3. Defaults

use std::fs;

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

use crate::error::{PlumbError, Result};
use crate::registry::RegistryOptions;
use crate::render::{Layout, RenderConfig};

/// Default config file name
pub const CONFIG_FILE: &str = "plumbline.toml";

pub const ENV_LAYOUT: &str = "PLUMBLINE_LAYOUT";
pub const ENV_SHOW_EDGE_LABELS: &str = "PLUMBLINE_SHOW_EDGE_LABELS";
pub const ENV_INCLUDE_AUX: &str = "PLUMBLINE_INCLUDE_AUX";

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlumbConfig {
    /// Node registry options
    #[serde(default)]
    pub registry: RegistryOptions,

    /// Options passed to the rendering layer
    #[serde(default)]
    pub render: RenderConfig,
}

impl PlumbConfig {
    /// Load `plumbline.toml` from the working directory
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from file
    ///
    /// Returns default config if file doesn't exist.
    /// Returns error if file exists but is malformed.
    pub fn load_from(path: impl AsRef<Utf8Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            tracing::debug!(path = %path, "No config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| PlumbError::ConfigError {
            reason: format!("Failed to read config file: {}", e),
        })?;

        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content).map_err(|e| PlumbError::ConfigError {
            reason: format!("Failed to parse config file: {}", e),
        })?;
        config.render.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save_to(&self, path: impl AsRef<Utf8Path>) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| PlumbError::ConfigError {
            reason: format!("Failed to serialize config: {}", e),
        })?;

        fs::write(path.as_ref(), content).map_err(|e| PlumbError::ConfigError {
            reason: format!("Failed to write config file: {}", e),
        })?;

        Ok(())
    }

    /// Merge with environment variables
    ///
    /// Environment variables take precedence over config file values.
    pub fn with_env(self) -> Self {
        self.with_env_from(|key| std::env::var(key).ok())
    }

    /// Merge with values from an arbitrary variable lookup
    ///
    /// Empty values are skipped; unparseable values are skipped with a warning.
    pub fn with_env_from<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(raw) = get(ENV_LAYOUT) {
            match raw.parse::<Layout>() {
                Ok(layout) => self.render.layout = layout,
                Err(e) => tracing::warn!(var = ENV_LAYOUT, value = %raw, error = %e, "Ignoring override"),
            }
        }

        if let Some(raw) = get(ENV_SHOW_EDGE_LABELS) {
            match parse_flag(&raw) {
                Some(flag) => self.render.show_edge_labels = flag,
                None => tracing::warn!(var = ENV_SHOW_EDGE_LABELS, value = %raw, "Ignoring override"),
            }
        }

        if let Some(raw) = get(ENV_INCLUDE_AUX) {
            match parse_flag(&raw) {
                Some(flag) => self.registry.include_aux = flag,
                None => tracing::warn!(var = ENV_INCLUDE_AUX, value = %raw, "Ignoring override"),
            }
        }

        self
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
