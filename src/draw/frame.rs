//! Keyed container for the shapes currently on a surface.

use super::shape::{Shape, ShapeId};
use crate::util::Point;

/// All shapes on the surface, keyed by [`ShapeId`].
///
/// Shapes keep their insertion order (first = bottom layer, last = top
/// layer), matching the order in which their layers were added to the
/// renderer. Ids are unique: inserting an existing id replaces that shape.
#[derive(Debug, Clone, Default)]
pub struct ShapeSet {
    shapes: Vec<Shape>,
}

impl ShapeSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Removes all shapes, returning them in draw order.
    pub fn clear(&mut self) -> Vec<Shape> {
        std::mem::take(&mut self.shapes)
    }

    /// Adds a shape on top, replacing (and returning) any shape with the same id.
    pub fn insert(&mut self, shape: Shape) -> Option<Shape> {
        let previous = self.remove(shape.id());
        self.shapes.push(shape);
        previous
    }

    /// Removes and returns the shape with `id`.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let position = self.shapes.iter().position(|shape| shape.id() == id)?;
        Some(self.shapes.remove(position))
    }

    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.id() == id)
    }

    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.id() == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Shape> {
        self.shapes.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// True when any vertex of any shape is within `threshold` of `point`.
    pub fn any_point_near(&self, point: &Point, threshold: f64) -> bool {
        self.shapes.iter().any(|shape| shape.hits(point, threshold))
    }
}
