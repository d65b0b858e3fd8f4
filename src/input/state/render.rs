use super::core::EditorSurface;
use crate::draw::{FormFields, FormSink, LayerPatch, Renderer, Shape, ShapeId};

impl<R: Renderer, F: FormSink> EditorSurface<R, F> {
    /// Inserts a shape and adds its layer, replacing any shape with the same id.
    pub(super) fn insert_shape(&mut self, shape: Shape) {
        let layer = shape.layer(&self.options.style);
        if let Some(replaced) = self.shapes.insert(shape) {
            self.renderer.remove_layer(&replaced.id().layer_name());
        }
        self.renderer.add_layer(layer);
    }

    /// Removes a shape and its layer. Clears the active slot if it held it.
    pub(super) fn remove_shape(&mut self, id: ShapeId) -> Option<Shape> {
        let removed = self.shapes.remove(id)?;
        self.renderer.remove_layer(&id.layer_name());
        if self.active == Some(id) {
            self.active = None;
            self.saved_points = None;
            self.state = super::InteractionState::Idle;
        }
        log::debug!("Removed shape {id}");
        Some(removed)
    }

    /// Pushes coordinates, closed flag and handle of a shape to its layer.
    pub(super) fn refresh_layer(&mut self, id: ShapeId) {
        let Some(shape) = self.shapes.get(id) else {
            return;
        };
        let patch = LayerPatch {
            vector: Some(shape.render_vector()),
            closed: Some(shape.is_closed()),
            handle: Some(
                shape
                    .is_mutable()
                    .then(|| self.options.style.handle(shape.cursor())),
            ),
        };
        self.renderer.set_layer(&id.layer_name(), patch);
    }

    /// Pushes only the coordinates of a shape to its layer.
    pub(super) fn refresh_points(&mut self, id: ShapeId) {
        if let Some(shape) = self.shapes.get(id) {
            self.renderer
                .set_layer(&id.layer_name(), LayerPatch::vector(shape.render_vector()));
        }
    }

    /// Mirrors the active shape's first two points into the form fields.
    pub(super) fn push_form(&mut self) {
        let Some(shape) = self.active.and_then(|id| self.shapes.get(id)) else {
            return;
        };
        let fields = FormFields::from_vector(&shape.render_vector(), self.options.image_scale);
        self.form.update_fields(fields);
    }

    /// Reads handle drags back from the renderer into mutable shapes.
    ///
    /// Returns the number of shapes whose points changed.
    pub fn sync_from_renderer(&mut self) -> usize {
        let mut changed = 0;
        let mut active_changed = false;
        for shape in self.shapes.iter_mut().filter(|shape| shape.is_mutable()) {
            let Some(layer) = self.renderer.get_layer(&shape.id().layer_name()) else {
                continue;
            };
            if shape.sync_from_layer(&layer) {
                changed += 1;
                active_changed |= self.active == Some(shape.id());
            }
        }
        if active_changed {
            self.push_form();
        }
        if changed > 0 {
            log::debug!("Synced {changed} shape(s) from renderer");
        }
        changed
    }

    /// Makes every shape immutable and drops their handles.
    pub(super) fn freeze_all(&mut self) {
        let ids: Vec<ShapeId> = self
            .shapes
            .iter_mut()
            .filter(|shape| shape.is_mutable())
            .map(|shape| {
                shape.set_mutable(false);
                shape.id()
            })
            .collect();
        for id in ids {
            self.renderer.set_layer(
                &id.layer_name(),
                LayerPatch {
                    handle: Some(None),
                    ..LayerPatch::default()
                },
            );
        }
    }
}
