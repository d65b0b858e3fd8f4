//! In-memory collaborators.
//!
//! [`LayerStore`] keeps layers in z-order without drawing anything; the replay
//! harness and the tests use it as the renderer. [`FormLog`] records every
//! form update.

use super::layer::{Layer, LayerPatch};
use super::renderer::{FormFields, FormSink, Renderer};

/// Renderer that only stores layers (first = bottom, last = top).
#[derive(Debug, Default)]
pub struct LayerStore {
    layers: Vec<Layer>,
}

impl LayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All layers in draw order.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.name == name)
    }

    /// Mutable access, used to emulate the renderer moving a handle.
    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|layer| layer.name == name)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Renderer for LayerStore {
    fn add_layer(&mut self, layer: Layer) {
        // Re-adding a name replaces the old layer rather than stacking a duplicate
        self.layers.retain(|existing| existing.name != layer.name);
        self.layers.push(layer);
    }

    fn set_layer(&mut self, name: &str, patch: LayerPatch) {
        match self.layer_mut(name) {
            Some(layer) => layer.apply(patch),
            None => log::debug!("set_layer on unknown layer '{name}' ignored"),
        }
    }

    fn get_layer(&self, name: &str) -> Option<Layer> {
        self.layer(name).cloned()
    }

    fn remove_layer(&mut self, name: &str) {
        self.layers.retain(|layer| layer.name != name);
    }
}

/// Form sink that keeps every update it receives.
#[derive(Debug, Default)]
pub struct FormLog {
    pub updates: Vec<FormFields>,
}

impl FormLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent field values, if any were pushed.
    pub fn last(&self) -> Option<&FormFields> {
        self.updates.last()
    }
}

impl FormSink for FormLog {
    fn update_fields(&mut self, fields: FormFields) {
        self.updates.push(fields);
    }
}
