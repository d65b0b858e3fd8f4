//! Utility functions for colors and pointer geometry.
//!
//! This module provides:
//! - Color name mapping for the configuration file
//! - The surface-relative [`Point`] type and threshold hit checks
//! - Surface bounds checks

use crate::draw::{Color, color::*};
use serde::{Deserialize, Serialize};

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "annotation" (the default `#C00`)
/// - "red", "green", "blue", "yellow", "orange", "white", "black"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "annotation" => Some(ANNOTATION_RED),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A 2D position in surface pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the point shifted by `(dx, dy)`.
    pub fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// True when both axis distances to `other` are strictly below `threshold`.
    ///
    /// This is a square hit box, not a radius: handle grabbing and polygon
    /// closing both use it.
    pub fn is_near(&self, other: &Point, threshold: f64) -> bool {
        (self.x - other.x).abs() < threshold && (self.y - other.y).abs() < threshold
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Size of the interaction surface (the displayed image area).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Inclusive containment: the right and bottom edges count as inside.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        (0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_color_mapping() {
        assert_eq!(name_to_color("White").unwrap(), WHITE);
        assert_eq!(name_to_color("annotation").unwrap(), ANNOTATION_RED);
        assert!(name_to_color("chartreuse").is_none());
    }

    #[test]
    fn near_uses_strict_per_axis_threshold() {
        let origin = Point::new(0.0, 0.0);
        assert!(origin.is_near(&Point::new(3.0, 4.0), 7.0));
        assert!(origin.is_near(&Point::new(-6.9, 6.9), 7.0));
        assert!(!origin.is_near(&Point::new(7.0, 0.0), 7.0));
        assert!(!origin.is_near(&Point::new(0.0, -7.5), 7.0));
    }

    #[test]
    fn bounds_include_edges() {
        let bounds = Bounds::new(640.0, 480.0);
        assert!(bounds.contains(0.0, 0.0));
        assert!(bounds.contains(640.0, 480.0));
        assert!(!bounds.contains(-0.5, 10.0));
        assert!(!bounds.contains(10.0, 480.5));
    }
}
