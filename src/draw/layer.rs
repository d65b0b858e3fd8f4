//! Render layer descriptors exchanged with the [`Renderer`](super::Renderer).
//!
//! One layer exists per shape on the surface. The core writes layers and reads
//! them back only to pick up coordinates the renderer changed itself (handle
//! drags); it never inspects pixels.

use super::color::Color;
use super::vector::Vector;
use serde::{Deserialize, Serialize};

/// Geometric type tag of a layer. Annotation shapes are always drawn as
/// (possibly closed) polylines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GeometryType {
    Line,
}

/// Pointer cursor shown over a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    /// A finished handle that can be dragged
    Grab,
    /// Placing points while authoring
    Crosshair,
}

/// Cursor per interaction phase of a handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HandleCursors {
    pub mouseover: Cursor,
    pub mousedown: Cursor,
    pub mouseup: Cursor,
}

/// Interactive hit-target drawn at every vertex of a mutable shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Handle {
    /// Handles are drawn as filled arcs
    pub radius: f64,
    pub fill: Color,
    pub stroke: Color,
    pub stroke_width: f64,
    pub cursors: HandleCursors,
}

/// Stroke and handle styling shared by every layer on a surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerStyle {
    pub color: Color,
    pub stroke_width: f64,
    pub handle_radius: f64,
}

impl Default for LayerStyle {
    fn default() -> Self {
        Self {
            color: Color::default(),
            stroke_width: 2.0,
            handle_radius: 3.0,
        }
    }
}

impl LayerStyle {
    /// Builds the handle descriptor for a mutable shape.
    pub fn handle(&self, mouseover: Cursor) -> Handle {
        Handle {
            radius: self.handle_radius,
            fill: self.color,
            stroke: self.color,
            stroke_width: 1.0,
            cursors: HandleCursors {
                mouseover,
                mousedown: Cursor::Crosshair,
                mouseup: Cursor::Crosshair,
            },
        }
    }
}

/// Full description of one named layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    pub name: String,
    pub geometry: GeometryType,
    pub stroke_width: f64,
    pub stroke_color: Color,
    /// Coordinates in draw order; may hold one trailing point more than the
    /// shape while it is being authored.
    pub vector: Vector,
    pub closed: bool,
    /// `None` when the shape is immutable
    pub handle: Option<Handle>,
}

/// Partial update for an existing layer. `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LayerPatch {
    /// Replaces all coordinates of the layer
    pub vector: Option<Vector>,
    pub closed: Option<bool>,
    /// `Some(None)` removes the handle
    pub handle: Option<Option<Handle>>,
}

impl LayerPatch {
    pub fn vector(vector: Vector) -> Self {
        Self {
            vector: Some(vector),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.vector.is_none() && self.closed.is_none() && self.handle.is_none()
    }
}

impl Layer {
    /// Merges a patch into this layer.
    pub fn apply(&mut self, patch: LayerPatch) {
        if let Some(vector) = patch.vector {
            self.vector = vector;
        }
        if let Some(closed) = patch.closed {
            self.closed = closed;
        }
        if let Some(handle) = patch.handle {
            self.handle = handle;
        }
    }
}
