//! Numbered-coordinate vectors (`x1, y1, x2, y2, ...`).
//!
//! This is the geometry encoding shared by the annotation feed, the renderer
//! layers and the host's persistence layer. Indices are 1-based everywhere
//! outside this module.

use crate::util::Point;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw numbered-coordinate mapping as it appears on the wire.
pub type CoordinateMap = BTreeMap<String, f64>;

/// An ordered point list that (de)serializes as a numbered-coordinate map.
///
/// Deserialization walks `x1/y1`, `x2/y2`, ... and stops at the first index
/// where either coordinate is missing; keys beyond that gap are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "CoordinateMap", into = "CoordinateMap")]
pub struct Vector {
    points: Vec<Point>,
}

impl Vector {
    /// Creates an empty vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an ordered point list.
    pub fn from_points(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Number of complete coordinate pairs.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the point at a 1-based `index`.
    pub fn get(&self, index: usize) -> Option<Point> {
        index
            .checked_sub(1)
            .and_then(|i| self.points.get(i))
            .copied()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    /// Encodes the points as `x1, y1, ...` keys.
    pub fn to_map(&self) -> CoordinateMap {
        let mut map = CoordinateMap::new();
        for (i, point) in self.points.iter().enumerate() {
            map.insert(x_key(i + 1), point.x);
            map.insert(y_key(i + 1), point.y);
        }
        map
    }

    /// Extracts every complete `(index, point)` pair from a partial map.
    ///
    /// Unlike deserialization this does not require the indices to start at 1
    /// or be contiguous, so it suits partial updates such as `{x2, y2}`.
    pub fn indexed(map: &CoordinateMap) -> BTreeMap<usize, Point> {
        let mut indexed = BTreeMap::new();
        for (key, &x) in map {
            let Some(index) = key.strip_prefix('x').and_then(|n| n.parse::<usize>().ok()) else {
                continue;
            };
            if index == 0 {
                continue;
            }
            if let Some(&y) = map.get(&y_key(index)) {
                indexed.insert(index, Point::new(x, y));
            }
        }
        indexed
    }
}

impl From<CoordinateMap> for Vector {
    fn from(map: CoordinateMap) -> Self {
        let mut points = Vec::new();
        let mut index = 1;
        while let (Some(&x), Some(&y)) = (map.get(&x_key(index)), map.get(&y_key(index))) {
            points.push(Point::new(x, y));
            index += 1;
        }
        Self { points }
    }
}

impl From<Vector> for CoordinateMap {
    fn from(vector: Vector) -> Self {
        vector.to_map()
    }
}

impl FromIterator<Point> for Vector {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::from_points(iter.into_iter().collect())
    }
}

pub(crate) fn x_key(index: usize) -> String {
    format!("x{index}")
}

pub(crate) fn y_key(index: usize) -> String {
    format!("y{index}")
}
