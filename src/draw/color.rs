//! RGB color type and predefined color constants.

use serde::{Deserialize, Serialize};

/// An opaque RGB color as handed to the renderer.
///
/// Renderers receive colors as CSS hex strings (see [`Color::to_css`]), so
/// components are stored as 8-bit channels rather than floats. Serializes
/// as that same `#rrggbb` string.
///
/// # Examples
///
/// ```
/// use vectortagger::draw::Color;
/// let annotation_red = Color::from_hex("#C00").unwrap();
/// assert_eq!(annotation_red.to_css(), "#cc0000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    /// Red channel (0-255)
    pub r: u8,
    /// Green channel (0-255)
    pub g: u8,
    /// Blue channel (0-255)
    pub b: u8,
}

impl Color {
    /// Creates a new color from RGB channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RGB` or `#RRGGBB` (leading `#` optional, case-insensitive).
    ///
    /// Short form digits are doubled, so `#C00` is `#CC0000`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            3 => {
                let mut expanded = String::with_capacity(6);
                for c in digits.chars() {
                    expanded.push(c);
                    expanded.push(c);
                }
                Self::from_hex(&expanded)
            }
            6 => Some(Self {
                r: channel(&digits[0..2])?,
                g: channel(&digits[2..4])?,
                b: channel(&digits[4..6])?,
            }),
            _ => None,
        }
    }

    /// Formats the color as a lowercase `#rrggbb` string.
    pub fn to_css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_css()
    }
}

impl TryFrom<String> for Color {
    type Error = String;

    fn try_from(hex: String) -> Result<Self, Self::Error> {
        Color::from_hex(&hex).ok_or_else(|| format!("invalid hex color '{hex}'"))
    }
}

impl Default for Color {
    fn default() -> Self {
        ANNOTATION_RED
    }
}

// ============================================================================
// Predefined Color Constants
// ============================================================================

/// Default stroke and handle color for annotations (`#C00`)
pub const ANNOTATION_RED: Color = Color::new(0xcc, 0x00, 0x00);

/// Pure red
pub const RED: Color = Color::new(0xff, 0x00, 0x00);

/// Pure green
pub const GREEN: Color = Color::new(0x00, 0xff, 0x00);

/// Pure blue
pub const BLUE: Color = Color::new(0x00, 0x00, 0xff);

/// Yellow
pub const YELLOW: Color = Color::new(0xff, 0xff, 0x00);

/// Orange
pub const ORANGE: Color = Color::new(0xff, 0x80, 0x00);

/// White
pub const WHITE: Color = Color::new(0xff, 0xff, 0xff);

/// Black
pub const BLACK: Color = Color::new(0x00, 0x00, 0x00);
