//! Configuration type definitions.

use super::enums::ColorSpec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Interaction settings.
///
/// Controls how pointer positions are matched against existing points and
/// how far keyboard-driven moves shift the selected shape.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct EditorConfig {
    /// Distance in pixels (per axis) under which the pointer counts as "on" a
    /// point. Used to grab handles instead of starting a new shape and to close
    /// arbitrary polygons (valid range: 1.0 - 50.0)
    #[serde(default = "default_threshold")]
    pub threshold: f64,

    /// Pixels moved per directional move of the selected shape
    /// (valid range: 0.5 - 100.0)
    #[serde(default = "default_move_step")]
    pub move_step_px: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            move_step_px: default_move_step(),
        }
    }
}

/// Appearance of shape strokes and handles.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Stroke and handle color - a named color, `#RGB`/`#RRGGBB`, or `[r, g, b]`
    #[serde(default = "default_color")]
    pub color: ColorSpec,

    /// Stroke width in pixels (valid range: 0.5 - 20.0)
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,

    /// Handle radius in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_handle_radius")]
    pub handle_radius: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            color: default_color(),
            stroke_width: default_stroke_width(),
            handle_radius: default_handle_radius(),
        }
    }
}

fn default_threshold() -> f64 {
    7.0
}

fn default_move_step() -> f64 {
    2.0
}

fn default_color() -> ColorSpec {
    ColorSpec::Name("#C00".to_string())
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_handle_radius() -> f64 {
    3.0
}
