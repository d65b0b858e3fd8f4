//! Generic input event types for host-agnostic dispatch.

use serde::{Deserialize, Serialize};

/// Pointer event in surface-relative pixel coordinates.
///
/// Hosts translate their native events (page coordinates minus the surface
/// offset) into these. A full press-release cycle arrives as `Down`
/// followed by `Click`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PointerEvent {
    /// Pointer moved
    Move { x: f64, y: f64 },
    /// Primary button pressed
    Down { x: f64, y: f64 },
    /// Primary button released (a click)
    Click { x: f64, y: f64 },
}

/// Direction for keyboard-driven moves of the selected shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// Offset for a move of `step` pixels (y grows downwards).
    pub fn offset(self, step: f64) -> (f64, f64) {
        match self {
            Direction::Left => (-step, 0.0),
            Direction::Right => (step, 0.0),
            Direction::Up => (0.0, -step),
            Direction::Down => (0.0, step),
        }
    }
}
