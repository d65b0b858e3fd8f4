//! Configuration enum types.

use crate::draw::{Color, color::ANNOTATION_RED};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a named color, a hex string, or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "blue"
///
/// # Hex (short or long form)
/// color = "#C00"
///
/// # Custom RGB color (0-255 per component)
/// color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (annotation, red, green, blue, yellow, orange, white, black)
    /// or a `#RGB` / `#RRGGBB` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`].
    ///
    /// Hex strings are parsed first, then color names. Anything unrecognized
    /// falls back to the annotation red with a warning.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => Color::from_hex(name)
                .filter(|_| name.trim_start().starts_with('#'))
                .or_else(|| crate::util::name_to_color(name))
                .unwrap_or_else(|| {
                    warn!("Unknown color '{}', using #C00", name);
                    ANNOTATION_RED
                }),
            ColorSpec::Rgb([r, g, b]) => Color::new(*r, *g, *b),
        }
    }
}
