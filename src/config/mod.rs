//! Configuration file support for vectortagger.
//!
//! This module handles loading and validating user settings from the configuration file
//! located at `~/.config/vectortagger/config.toml`. Settings include the pointer
//! threshold, the keyboard move step and the stroke/handle style.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{EditorConfig, StyleConfig};

use crate::draw::LayerStyle;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML file.
/// All fields have sensible defaults and will use those if not specified in the config file.
///
/// # Example TOML
/// ```toml
/// [editor]
/// threshold = 7.0
/// move_step_px = 2.0
///
/// [style]
/// color = "#C00"
/// stroke_width = 2.0
/// handle_radius = 3.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default, JsonSchema)]
pub struct Config {
    /// Pointer interaction settings
    #[serde(default)]
    pub editor: EditorConfig,

    /// Stroke and handle appearance
    #[serde(default)]
    pub style: StyleConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `editor.threshold`: 1.0 - 50.0
    /// - `editor.move_step_px`: 0.5 - 100.0
    /// - `style.stroke_width`: 0.5 - 20.0
    /// - `style.handle_radius`: 1.0 - 20.0
    fn validate_and_clamp(&mut self) {
        clamp_logged("editor.threshold", &mut self.editor.threshold, 1.0, 50.0);
        clamp_logged("editor.move_step_px", &mut self.editor.move_step_px, 0.5, 100.0);
        clamp_logged("style.stroke_width", &mut self.style.stroke_width, 0.5, 20.0);
        clamp_logged("style.handle_radius", &mut self.style.handle_radius, 1.0, 20.0);
    }

    /// Stroke and handle style derived from the `[style]` section.
    pub fn layer_style(&self) -> LayerStyle {
        LayerStyle {
            color: self.style.color.to_color(),
            stroke_width: self.style.stroke_width,
            handle_radius: self.style.handle_radius,
        }
    }

    /// JSON schema of the config file, for editor tooling.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Config)
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/vectortagger/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("vectortagger");

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

    /// Loads and validates configuration from an explicit file.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or is not valid TOML.
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

    fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Saves the current configuration to the default location.
    ///
    /// Creates the parent directory if it doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }

    /// Creates a default configuration file with documentation comments.
    ///
    /// Writes the example config from `config.example.toml` to the user's config directory.
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
            fs::create_dir_all(parent)?;
        }

        fs::write(&config_path, EXAMPLE_CONFIG)?;

        info!("Created default config at {}", config_path.display());
        Ok(config_path)
    }
}

const EXAMPLE_CONFIG: &str = include_str!("../../config.example.toml");

fn clamp_logged(name: &str, value: &mut f64, min: f64, max: f64) {
    if !(min..=max).contains(value) {
        log::warn!("Invalid {name} {value:.1}, clamping to {min:.1}-{max:.1} range");
        *value = value.clamp(min, max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{ANNOTATION_RED, BLUE};

    #[test]
    fn empty_file_uses_defaults() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.editor.threshold, 7.0);
        assert_eq!(config.editor.move_step_px, 2.0);
        assert_eq!(config.layer_style().color, ANNOTATION_RED);
        assert_eq!(config.layer_style().stroke_width, 2.0);
        assert_eq!(config.layer_style().handle_radius, 3.0);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let config = Config::from_toml("[style]\ncolor = [0, 0, 255]\n").unwrap();
        assert_eq!(config.layer_style().color, BLUE);
        assert_eq!(config.style.stroke_width, 2.0);
        assert_eq!(config.editor.threshold, 7.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config =
            Config::from_toml("[editor]\nthreshold = 0.0\nmove_step_px = 500.0\n").unwrap();
        config.validate_and_clamp();
        assert_eq!(config.editor.threshold, 1.0);
        assert_eq!(config.editor.move_step_px, 100.0);
    }

    #[test]
    fn example_config_parses() {
        let mut config = Config::from_toml(EXAMPLE_CONFIG).unwrap();
        config.validate_and_clamp();
        assert_eq!(config.editor.threshold, 7.0);
        assert_eq!(config.layer_style().color, ANNOTATION_RED);
    }

    #[test]
    fn load_from_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[editor]\nthreshold = 10.0\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.editor.threshold, 10.0);
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[editor\nthreshold = ").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
