//! Shape definitions for vector annotations.
//!
//! A [`Shape`] is the geometry of one annotation: an ordered vertex list plus
//! the authoring flags. The four [`ShapeKind`]s share that representation and
//! differ only in when [`Shape::add_point`] closes them.

use super::layer::{Cursor, GeometryType, Layer, LayerStyle};
use super::vector::Vector;
use crate::error::EditorError;
use crate::util::Point;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a shape on the surface.
///
/// Persisted annotations carry the id assigned by the persistence layer.
/// Shapes drawn in this session and not yet saved are numbered by the
/// surface that created them ([`ShapeId::Unsaved`]), so several of them can
/// coexist. Serializes as the bare number, or as `"unsaved-N"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "IdRepr", try_from = "IdRepr")]
pub enum ShapeId {
    Unsaved(u32),
    Annotation(u64),
}

const UNSAVED_PREFIX: &str = "unsaved-";

impl ShapeId {
    /// Name of the renderer layer holding this shape.
    pub fn layer_name(&self) -> String {
        match self {
            ShapeId::Unsaved(n) => format!("drawing_unsaved{n}"),
            ShapeId::Annotation(id) => format!("drawing{id}"),
        }
    }

    pub fn is_unsaved(&self) -> bool {
        matches!(self, ShapeId::Unsaved(_))
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShapeId::Unsaved(n) => write!(f, "{UNSAVED_PREFIX}{n}"),
            ShapeId::Annotation(id) => write!(f, "{id}"),
        }
    }
}

/// Wire form of [`ShapeId`].
#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum IdRepr {
    Saved(u64),
    Draft(String),
}

impl From<ShapeId> for IdRepr {
    fn from(id: ShapeId) -> Self {
        match id {
            ShapeId::Annotation(id) => IdRepr::Saved(id),
            unsaved => IdRepr::Draft(unsaved.to_string()),
        }
    }
}

impl TryFrom<IdRepr> for ShapeId {
    type Error = String;

    fn try_from(repr: IdRepr) -> Result<Self, Self::Error> {
        match repr {
            IdRepr::Saved(id) => Ok(ShapeId::Annotation(id)),
            IdRepr::Draft(text) => text
                .strip_prefix(UNSAVED_PREFIX)
                .and_then(|n| n.parse().ok())
                .map(ShapeId::Unsaved)
                .ok_or_else(|| format!("invalid shape id '{text}'")),
        }
    }
}

/// Geometry variant, which decides the closing policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShapeKind {
    /// A single point; closed as soon as it exists
    Point,
    /// Two points; closes when the second is placed
    Line,
    /// Exactly `n` points; closes when the n-th is placed
    FixedPolygon(usize),
    /// Any number of points; closes when a click lands on the first point
    ArbitraryPolygon,
}

impl ShapeKind {
    /// Maximum number of points, or `None` when unbounded.
    pub fn max_points(&self) -> Option<usize> {
        match self {
            ShapeKind::Point => Some(1),
            ShapeKind::Line => Some(2),
            ShapeKind::FixedPolygon(n) => Some((*n).max(1)),
            ShapeKind::ArbitraryPolygon => None,
        }
    }

    fn is_full(&self, len: usize) -> bool {
        self.max_points().is_some_and(|max| len >= max)
    }

    /// Whether a shape of `len` points may be closed.
    ///
    /// Bounded kinds are closed exactly when they hold their maximum; an
    /// arbitrary polygon can be closed at any size.
    pub fn can_close(&self, len: usize) -> bool {
        self.max_points().is_none_or(|max| len >= max)
    }
}

/// What a call to [`Shape::add_point`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The point was appended and the shape is still open
    Extended,
    /// The shape closed (with or without appending the point)
    Closed,
    /// The shape was already closed; nothing changed
    Ignored,
}

/// What a call to [`Shape::delete_point`] left behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointRemoval {
    /// Points still left on the shape
    Remaining(usize),
    /// The last point was removed; the shape must be dropped
    Emptied,
}

/// One annotation's geometry on the surface.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    id: ShapeId,
    kind: ShapeKind,
    /// Fixed vertices in order; never empty
    points: Vec<Point>,
    /// Rubber-band point following the pointer while authoring
    trailing: Option<Point>,
    mutable: bool,
    closed: bool,
}

impl Shape {
    /// Starts authoring a new shape at `first`.
    ///
    /// The shape is mutable. Kinds that are already complete with a single
    /// point (`Point`, `FixedPolygon(1)`) come back closed.
    pub fn start(id: ShapeId, kind: ShapeKind, first: Point) -> Self {
        let mut shape = Self {
            id,
            kind,
            points: vec![first],
            trailing: None,
            mutable: true,
            closed: false,
        };
        if kind.is_full(1) {
            shape.close();
        }
        shape
    }

    /// Builds a shape from existing geometry.
    ///
    /// Returns `None` for an empty point list. Geometry longer than the kind
    /// allows is truncated; geometry shorter than a bounded kind needs stays
    /// open so it can be completed.
    pub fn finished(id: ShapeId, kind: ShapeKind, mut points: Vec<Point>, mutable: bool) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        if let Some(max) = kind.max_points() {
            if points.len() > max {
                log::warn!(
                    "Shape {id} has {} points but {kind:?} allows {max}; truncating",
                    points.len()
                );
                points.truncate(max);
            }
        }
        let closed = kind.can_close(points.len());
        if !closed {
            log::warn!(
                "Shape {id} has {} points but {kind:?} needs {}; left open",
                points.len(),
                kind.max_points().unwrap_or_default()
            );
        }
        Some(Self {
            id,
            kind,
            points,
            trailing: None,
            mutable,
            closed,
        })
    }

    pub fn id(&self) -> ShapeId {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false for a live shape; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn is_mutable(&self) -> bool {
        self.mutable
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// The provisional point following the pointer, if authoring.
    pub fn trailing(&self) -> Option<Point> {
        self.trailing
    }

    /// Fixed points as a numbered-coordinate vector.
    pub fn vector(&self) -> Vector {
        Vector::from_points(self.points.clone())
    }

    /// Moves the rubber-band point. No effect once the shape is closed.
    pub fn set_trailing(&mut self, point: Point) {
        if !self.closed {
            self.trailing = Some(point);
        }
    }

    /// Places the next point, applying the kind's closing policy.
    ///
    /// For an arbitrary polygon, a point within `threshold` of the first
    /// vertex (on both axes) closes the shape and is itself discarded.
    pub fn add_point(&mut self, point: Point, threshold: f64) -> AddOutcome {
        if self.closed {
            return AddOutcome::Ignored;
        }
        self.trailing = None;

        if self.kind == ShapeKind::ArbitraryPolygon && self.points[0].is_near(&point, threshold) {
            self.close();
            return AddOutcome::Closed;
        }

        self.points.push(point);
        if self.kind.is_full(self.points.len()) {
            self.close();
            AddOutcome::Closed
        } else {
            AddOutcome::Extended
        }
    }

    /// Sets the point at 1-based `index`. The point count never changes.
    pub fn set_point(&mut self, index: usize, point: Point) -> Result<(), EditorError> {
        let slot = self.slot(index)?;
        self.points[slot] = point;
        Ok(())
    }

    /// Applies several `(index, point)` updates at once.
    ///
    /// All indices are checked before anything changes, so an out-of-range
    /// index leaves the shape untouched.
    pub fn set_points<I>(&mut self, updates: I) -> Result<(), EditorError>
    where
        I: IntoIterator<Item = (usize, Point)>,
    {
        let updates: Vec<(usize, Point)> = updates.into_iter().collect();
        let slots = updates
            .iter()
            .map(|(index, _)| self.slot(*index))
            .collect::<Result<Vec<_>, _>>()?;
        for (slot, (_, point)) in slots.into_iter().zip(updates) {
            self.points[slot] = point;
        }
        Ok(())
    }

    /// Removes the point at 1-based `index`, shifting later points down.
    ///
    /// A bounded kind that drops below its point count reopens.
    pub fn delete_point(&mut self, index: usize) -> Result<PointRemoval, EditorError> {
        let slot = self.slot(index)?;
        self.points.remove(slot);
        if !self.kind.can_close(self.points.len()) {
            self.closed = false;
        }
        if self.points.is_empty() {
            Ok(PointRemoval::Emptied)
        } else {
            Ok(PointRemoval::Remaining(self.points.len()))
        }
    }

    /// Translates every point. Refused (returns `false`) while authoring.
    pub fn translate(&mut self, dx: f64, dy: f64) -> bool {
        if !self.closed {
            return false;
        }
        for point in &mut self.points {
            *point = point.offset(dx, dy);
        }
        true
    }

    /// Finishes authoring.
    ///
    /// Returns `false` if the shape was already closed, or if it is a bounded
    /// kind still short of its point count.
    pub fn close(&mut self) -> bool {
        if self.closed || !self.kind.can_close(self.points.len()) {
            return false;
        }
        self.trailing = None;
        self.closed = true;
        true
    }

    pub fn set_mutable(&mut self, mutable: bool) {
        self.mutable = mutable;
    }

    /// True when any vertex lies within `threshold` of `point` on both axes.
    pub fn hits(&self, point: &Point, threshold: f64) -> bool {
        self.points.iter().any(|p| p.is_near(point, threshold))
    }

    /// Replaces every point, e.g. when restoring an edit snapshot.
    pub(crate) fn restore(&mut self, points: Vec<Point>) {
        if points.is_empty() {
            return;
        }
        self.points = points;
        if self.kind.max_points().is_some() {
            self.closed = self.kind.can_close(self.points.len());
        }
        if self.closed {
            self.trailing = None;
        }
    }

    /// Pulls coordinates the renderer changed (handle drags) into the shape.
    ///
    /// Only the first `len()` points are read; the count is unchanged.
    /// Returns whether anything moved.
    pub fn sync_from_layer(&mut self, layer: &Layer) -> bool {
        let mut changed = false;
        for (point, fresh) in self.points.iter_mut().zip(layer.vector.points()) {
            if point != fresh {
                *point = *fresh;
                changed = true;
            }
        }
        changed
    }

    /// Coordinates as drawn: the fixed points plus the rubber-band point.
    pub fn render_vector(&self) -> Vector {
        self.points.iter().copied().chain(self.trailing).collect()
    }

    /// Cursor shown over the handles.
    pub fn cursor(&self) -> Cursor {
        if self.closed {
            Cursor::Grab
        } else {
            Cursor::Crosshair
        }
    }

    /// Full renderer layer describing this shape.
    pub fn layer(&self, style: &LayerStyle) -> Layer {
        Layer {
            name: self.id.layer_name(),
            geometry: GeometryType::Line,
            stroke_width: style.stroke_width,
            stroke_color: style.color,
            vector: self.render_vector(),
            closed: self.closed,
            handle: self.mutable.then(|| style.handle(self.cursor())),
        }
    }

    fn slot(&self, index: usize) -> Result<usize, EditorError> {
        if (1..=self.points.len()).contains(&index) {
            Ok(index - 1)
        } else {
            Err(EditorError::PointOutOfRange {
                index,
                len: self.points.len(),
            })
        }
    }
}
