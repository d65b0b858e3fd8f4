//! Collaborator interfaces the editor core drives.
//!
//! The core never draws or touches form widgets itself; hosts implement these
//! traits against their canvas library and page. [`LayerStore`](super::LayerStore)
//! and [`FormLog`](super::FormLog) are in-memory implementations.

use super::layer::{Layer, LayerPatch};
use super::vector::Vector;
use serde::{Deserialize, Serialize};

/// Layer-based 2D renderer: an opaque key-value store of named layers.
///
/// Calls are fire-and-forget. Rendering failures are the renderer's concern
/// and never propagate into the editor.
pub trait Renderer {
    /// Adds a new layer on top of existing ones.
    fn add_layer(&mut self, layer: Layer);

    /// Merges partial fields into the named layer. Unknown names are ignored.
    fn set_layer(&mut self, name: &str, patch: LayerPatch);

    /// Returns the current fields of the named layer.
    fn get_layer(&self, name: &str) -> Option<Layer>;

    /// Removes the named layer. Unknown names are ignored.
    fn remove_layer(&mut self, name: &str);
}

/// Editable coordinate fields mirroring the active shape.
///
/// Only the first two points are shown, scaled from surface pixels to image
/// pixels and rounded. Missing points leave their fields empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub x1: Option<i64>,
    pub y1: Option<i64>,
    pub x2: Option<i64>,
    pub y2: Option<i64>,
    /// Cleared on every update
    pub not_in_image: bool,
}

impl FormFields {
    /// Builds the field values for a layer's coordinates.
    pub fn from_vector(vector: &Vector, image_scale: f64) -> Self {
        let scaled = |v: f64| (v * image_scale).round() as i64;
        let first = vector.get(1);
        let second = vector.get(2);
        Self {
            x1: first.map(|p| scaled(p.x)),
            y1: first.map(|p| scaled(p.y)),
            x2: second.map(|p| scaled(p.x)),
            y2: second.map(|p| scaled(p.y)),
            not_in_image: false,
        }
    }

    /// All four coordinates set to zero, shown after a selection reset.
    pub fn zeroed() -> Self {
        Self {
            x1: Some(0),
            y1: Some(0),
            x2: Some(0),
            y2: Some(0),
            not_in_image: false,
        }
    }
}

/// Receiver for coordinate field updates.
pub trait FormSink {
    fn update_fields(&mut self, fields: FormFields);
}
