use super::core::{EditorSurface, InteractionState};
use crate::annotation::{AnnotationRecord, VectorType};
use crate::draw::{CoordinateMap, FormFields, FormSink, PointRemoval, Renderer, Shape, ShapeId, Vector};
use crate::error::EditorError;
use crate::input::events::Direction;
use crate::util::Point;

impl<R: Renderer, F: FormSink> EditorSurface<R, F> {
    /// Replaces all shapes with the persisted annotations of one type.
    ///
    /// Records of other types and records without a vector are skipped, as
    /// are bounding boxes, unknown vector types and empty geometry. Loaded
    /// shapes are immutable; they are closed unless their geometry is short
    /// of what a bounded kind needs. Returns the number of shapes loaded.
    pub fn load_annotations(&mut self, records: &[AnnotationRecord], annotation_type_id: u32) -> usize {
        self.clear();

        let mut loaded = 0;
        for record in records {
            if record.annotation_type.id != annotation_type_id {
                continue;
            }
            let Some(vector) = &record.vector else {
                continue;
            };
            let Some(kind) = record.annotation_type.shape_kind() else {
                match record.annotation_type.vector_type {
                    VectorType::Ball => {
                        log::warn!("Annotation {}: bounding boxes are not drawn as vectors", record.id)
                    }
                    other => log::warn!("Annotation {}: unknown vector type {other:?}", record.id),
                }
                continue;
            };
            let id = ShapeId::Annotation(record.id);
            match Shape::finished(id, kind, vector.points().to_vec(), false) {
                Some(shape) => {
                    self.insert_shape(shape);
                    loaded += 1;
                }
                None => log::warn!("Annotation {}: empty vector, skipping", record.id),
            }
        }

        self.active = None;
        log::info!(
            "Loaded {loaded} of {} annotation(s) for type {annotation_type_id}",
            records.len()
        );
        loaded
    }

    /// Makes a persisted shape the active, mutable one and snapshots its points.
    ///
    /// An open shape is edited by authoring its missing points; the surface
    /// goes back to editing once it closes.
    ///
    /// # Errors
    /// Returns [`EditorError::ShapeNotFound`] when no shape has this id.
    pub fn select_for_edit(&mut self, id: ShapeId) -> Result<(), EditorError> {
        if !self.shapes.contains(id) {
            log::error!("Shape {id} not found for editing");
            return Err(EditorError::ShapeNotFound(id));
        }

        match self.state {
            InteractionState::Authoring if self.saved_points.is_some() => {
                if self.active != Some(id) {
                    self.cancel_edit();
                }
            }
            InteractionState::Authoring => {
                if let Some(current) = self.active {
                    self.remove_shape(current);
                }
            }
            InteractionState::Editing if self.active != Some(id) => self.cancel_edit(),
            _ => {}
        }
        if let Some(previous) = self.active.filter(|previous| *previous != id) {
            if let Some(shape) = self.shapes.get_mut(previous) {
                shape.set_mutable(false);
            }
            self.refresh_layer(previous);
        }

        let Some(shape) = self.shapes.get_mut(id) else {
            return Err(EditorError::ShapeNotFound(id));
        };
        shape.set_mutable(true);
        if self.saved_points.is_none() || self.active != Some(id) {
            self.saved_points = Some(shape.points().to_vec());
        }
        self.state = if shape.is_closed() {
            InteractionState::Editing
        } else {
            InteractionState::Authoring
        };
        self.active = Some(id);
        self.refresh_layer(id);
        self.push_form();
        log::debug!("Editing shape {id}");
        Ok(())
    }

    /// Abandons the current interaction.
    ///
    /// An edited shape gets its snapshot back; a shape without a snapshot
    /// (one authored on this surface) is removed. Afterwards nothing is
    /// active and every shape is immutable.
    pub fn cancel_edit(&mut self) {
        if let Some(id) = self.active.take() {
            match self.saved_points.take() {
                Some(points) => {
                    if let Some(shape) = self.shapes.get_mut(id) {
                        shape.restore(points);
                    }
                    self.refresh_layer(id);
                    log::debug!("Edit of shape {id} cancelled");
                }
                None => {
                    self.remove_shape(id);
                }
            }
        }
        self.saved_points = None;
        self.state = InteractionState::Idle;
        self.locked = false;
        self.freeze_all();
    }

    /// Makes every shape immutable and zeroes the form fields.
    ///
    /// The active shape stays active and keeps its points.
    pub fn reset_selection(&mut self) {
        self.freeze_all();
        self.form.update_fields(FormFields::zeroed());
    }

    /// Accepts the active shape's current points.
    ///
    /// An open shape is closed first. Returns the shape's id and coordinates
    /// for the host to persist, or `None` when nothing is active or the
    /// active shape is still short of its point count.
    pub fn commit_edit(&mut self) -> Option<(ShapeId, Vector)> {
        let id = self.active?;
        let shape = self.shapes.get_mut(id)?;
        if !shape.close() && !shape.is_closed() {
            log::warn!(
                "Shape {id} needs {} point(s) before it can be committed, has {}",
                shape.kind().max_points().unwrap_or_default(),
                shape.len()
            );
            return None;
        }
        let vector = shape.vector();

        self.active = None;
        self.saved_points = None;
        self.state = InteractionState::Idle;
        self.locked = false;
        self.freeze_all();
        self.refresh_layer(id);
        log::debug!("Committed shape {id} with {} point(s)", vector.len());
        Some((id, vector))
    }

    /// Translates every point of the active shape.
    ///
    /// No-op when nothing is active or the active shape is still being authored.
    pub fn move_active(&mut self, dx: f64, dy: f64) {
        let Some(id) = self.active else {
            return;
        };
        if self.state == InteractionState::Authoring {
            return;
        }
        let moved = self
            .shapes
            .get_mut(id)
            .is_some_and(|shape| shape.translate(dx, dy));
        if moved {
            self.refresh_points(id);
            self.push_form();
        }
    }

    /// Moves the active shape one configured step.
    pub fn move_selection(&mut self, direction: Direction) {
        let (dx, dy) = direction.offset(self.options.move_step_px);
        self.move_active(dx, dy);
    }

    pub fn move_left(&mut self) {
        self.move_selection(Direction::Left);
    }

    pub fn move_right(&mut self) {
        self.move_selection(Direction::Right);
    }

    pub fn move_up(&mut self) {
        self.move_selection(Direction::Up);
    }

    pub fn move_down(&mut self) {
        self.move_selection(Direction::Down);
    }

    /// Sets the 1-based point `index` of a shape.
    pub fn set_point(&mut self, id: ShapeId, index: usize, x: f64, y: f64) -> Result<(), EditorError> {
        self.shape_mut(id)?.set_point(index, Point::new(x, y))?;
        self.after_point_edit(id);
        Ok(())
    }

    /// Applies numbered coordinates (`x1`, `y1`, ...) to a shape.
    ///
    /// Nothing changes when any referenced point is out of range.
    pub fn set_points(&mut self, id: ShapeId, coordinates: &CoordinateMap) -> Result<(), EditorError> {
        let updates = Vector::indexed(coordinates);
        self.shape_mut(id)?.set_points(updates)?;
        self.after_point_edit(id);
        Ok(())
    }

    /// Sets a point of the active shape.
    pub fn set_active_point(&mut self, index: usize, x: f64, y: f64) -> Result<(), EditorError> {
        let id = self.active.ok_or(EditorError::NoActiveShape)?;
        self.set_point(id, index, x, y)
    }

    /// Removes the 1-based point `index` from a shape.
    ///
    /// Removing the last point removes the whole shape. When the active shape
    /// reopens, the surface goes back to authoring so clicks add points again.
    pub fn delete_point(&mut self, id: ShapeId, index: usize) -> Result<PointRemoval, EditorError> {
        let removal = self.shape_mut(id)?.delete_point(index)?;
        match removal {
            PointRemoval::Emptied => {
                self.remove_shape(id);
            }
            PointRemoval::Remaining(_) => {
                let reopened = self.shapes.get(id).is_some_and(|shape| !shape.is_closed());
                if reopened && self.active == Some(id) && self.state != InteractionState::Authoring {
                    log::debug!("Shape {id} reopened for authoring");
                    self.state = InteractionState::Authoring;
                }
                self.refresh_layer(id);
                if self.active == Some(id) {
                    self.push_form();
                }
            }
        }
        Ok(removal)
    }

    /// Removes a point of the active shape.
    pub fn delete_active_point(&mut self, index: usize) -> Result<PointRemoval, EditorError> {
        let id = self.active.ok_or(EditorError::NoActiveShape)?;
        self.delete_point(id, index)
    }

    /// Removes every shape and layer and returns to idle.
    pub fn clear(&mut self) {
        for shape in self.shapes.clear() {
            self.renderer.remove_layer(&shape.id().layer_name());
        }
        self.active = None;
        self.saved_points = None;
        self.state = InteractionState::Idle;
    }

    /// Clears the surface and forgets pointer state.
    pub fn reset(&mut self) {
        self.clear();
        self.locked = false;
        self.last_pointer = None;
    }

    /// Current points of a shape, without any rubber-band point.
    pub fn vector(&self, id: ShapeId) -> Option<Vector> {
        self.shapes.get(id).map(Shape::vector)
    }

    pub fn active_vector(&self) -> Option<Vector> {
        self.active_shape().map(Shape::vector)
    }

    /// Ordered `(x, y)` pairs of a shape.
    pub fn point_tuples(&self, id: ShapeId) -> Option<Vec<(f64, f64)>> {
        self.shapes
            .get(id)
            .map(|shape| shape.points().iter().map(|point| (point.x, point.y)).collect())
    }

    fn shape_mut(&mut self, id: ShapeId) -> Result<&mut Shape, EditorError> {
        self.shapes.get_mut(id).ok_or(EditorError::ShapeNotFound(id))
    }

    fn after_point_edit(&mut self, id: ShapeId) {
        self.refresh_points(id);
        if self.active == Some(id) {
            self.push_form();
        }
    }
}
