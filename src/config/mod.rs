//! Configuration file support for lightscene.
//!
//! Settings are read from `~/.config/lightscene/config.toml`. They control how
//! documents are rendered and which document is used when none is named on the
//! command line. If no config file exists, defaults are used.

pub mod types;

pub use types::{InputConfig, OutputConfig};

use crate::document::{OutputStyle, ReadOptions};
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const MAX_INDENT: usize = 8;
const MIN_DOCUMENT_BYTES: u64 = 1024;
const MAX_DOCUMENT_BYTES: u64 = 256 * 1024 * 1024;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [output]
/// pretty = true
/// indent = 2
///
/// [input]
/// max_document_bytes = 10485760
/// default_document = "/home/me/lights/scenes.json"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// JSON rendering preferences
    #[serde(default)]
    pub output: OutputConfig,

    /// Document input settings
    #[serde(default)]
    pub input: InputConfig,
}

impl Config {
    /// Clamps configuration values to acceptable ranges, logging a warning for
    /// each adjustment.
    ///
    /// Validated ranges:
    /// - `output.indent`: 0 - 8
    /// - `input.max_document_bytes`: 1 KiB - 256 MiB
    fn validate_and_clamp(&mut self) {
        if self.output.indent > MAX_INDENT {
            log::warn!(
                "Invalid indent {}, clamping to 0-{} range",
                self.output.indent,
                MAX_INDENT
            );
            self.output.indent = MAX_INDENT;
        }

        if !(MIN_DOCUMENT_BYTES..=MAX_DOCUMENT_BYTES).contains(&self.input.max_document_bytes) {
            log::warn!(
                "Invalid max_document_bytes {}, clamping to {}-{} range",
                self.input.max_document_bytes,
                MIN_DOCUMENT_BYTES,
                MAX_DOCUMENT_BYTES
            );
            self.input.max_document_bytes = self
                .input
                .max_document_bytes
                .clamp(MIN_DOCUMENT_BYTES, MAX_DOCUMENT_BYTES);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("lightscene");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if
    /// no file exists there.
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Loads configuration from `config_path`, or returns defaults if the file
    /// does not exist. Loaded values are validated and clamped.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or is not valid TOML.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Output style for rendering; `force_compact` wins over the config file.
    pub fn output_style(&self, force_compact: bool) -> OutputStyle {
        if force_compact || !self.output.pretty {
            OutputStyle::Compact
        } else {
            OutputStyle::Pretty {
                indent: self.output.indent,
            }
        }
    }

    pub fn read_options(&self) -> ReadOptions {
        ReadOptions {
            max_document_bytes: self.input.max_document_bytes,
        }
    }

    /// JSON Schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}
