//! Configuration file support for sketchpad.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/sketchpad/config.toml`. Settings cover the surface size and
//! background plus the pen style.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::{Background, ColorSpec, StrokeCap};
pub use types::{StrokeConfig, SurfaceConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Largest surface edge accepted from the config file.
pub const MAX_SURFACE_EDGE: i32 = 4096;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 340
/// height = 200
/// background = "transparent"
///
/// [stroke]
/// width = 2.0
/// cap = "round"
/// color = "black"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Drawing surface size and background
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Pen style for every stroke
    #[serde(default)]
    pub stroke: StrokeConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `surface.width` / `surface.height`: 1 - 4096
    /// - `stroke.width`: 0.5 - 50.0
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_SURFACE_EDGE).contains(&self.surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 1-{} range",
                self.surface.width,
                MAX_SURFACE_EDGE
            );
            self.surface.width = self.surface.width.clamp(1, MAX_SURFACE_EDGE);
        }

        if !(1..=MAX_SURFACE_EDGE).contains(&self.surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 1-{} range",
                self.surface.height,
                MAX_SURFACE_EDGE
            );
            self.surface.height = self.surface.height.clamp(1, MAX_SURFACE_EDGE);
        }

        // NaN fails the range check and also survives clamp, so replace it outright
        if self.stroke.width.is_nan() {
            log::warn!("Invalid stroke width NaN, falling back to 2.0");
            self.stroke.width = 2.0;
        } else if !(0.5..=50.0).contains(&self.stroke.width) {
            log::warn!(
                "Invalid stroke width {:.1}, clamping to 0.5-50.0 range",
                self.stroke.width
            );
            self.stroke.width = self.stroke.width.clamp(0.5, 50.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/sketchpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("sketchpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from the default location, or returns defaults if not found.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path.
    ///
    /// Unlike [`Config::load`], a missing file is an error here.
    pub fn load_from(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        let mut config = Self::from_toml(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;
        config.validate_and_clamp();

        info!("Loaded config from {}", path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Parses a TOML document without validation.
    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config
    /// directory and returns the path written.
    ///
    /// # Errors
    /// Returns an error if:
    /// - A config file already exists at the target path
    /// - The config directory cannot be created
    /// - The file cannot be written
    pub fn create_default_file() -> Result<PathBuf> {
        let config_path = Self::get_config_path()?;

        if config_path.exists() {
            return Err(anyhow::anyhow!(
                "Config file already exists at {}",
                config_path.display()
            ));
        }

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }

    /// Returns the JSON schema describing the config file.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }
}

/// Documented example configuration shipped with the binary.
pub const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");
