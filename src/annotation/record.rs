use crate::draw::{ShapeKind, Vector};
use serde::{Deserialize, Serialize};

/// Geometry family of an annotation type, as encoded on the wire.
///
/// Codes the editor does not know are kept as [`VectorType::Unknown`] so a
/// single odd record never fails the whole feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "i64", into = "i64")]
pub enum VectorType {
    /// Bounding boxes (code 1); drawn by a different editor
    Ball,
    /// Single points (code 2)
    Point,
    /// Two-point lines (code 3)
    Line,
    /// Polygons (code 5); `node_count` picks fixed or arbitrary
    Polygon,
    Unknown(i64),
}

impl From<i64> for VectorType {
    fn from(code: i64) -> Self {
        match code {
            1 => VectorType::Ball,
            2 => VectorType::Point,
            3 => VectorType::Line,
            5 => VectorType::Polygon,
            other => VectorType::Unknown(other),
        }
    }
}

impl From<VectorType> for i64 {
    fn from(vector_type: VectorType) -> Self {
        match vector_type {
            VectorType::Ball => 1,
            VectorType::Point => 2,
            VectorType::Line => 3,
            VectorType::Polygon => 5,
            VectorType::Unknown(code) => code,
        }
    }
}

impl VectorType {
    /// Shape variant drawn for this vector type.
    ///
    /// Polygons with `node_count == 0` take any number of points; otherwise
    /// exactly `node_count`. Returns `None` for types this editor does not
    /// draw (bounding boxes and unknown codes).
    pub fn shape_kind(self, node_count: usize) -> Option<ShapeKind> {
        match self {
            VectorType::Point => Some(ShapeKind::Point),
            VectorType::Line => Some(ShapeKind::Line),
            VectorType::Polygon if node_count == 0 => Some(ShapeKind::ArbitraryPolygon),
            VectorType::Polygon => Some(ShapeKind::FixedPolygon(node_count)),
            VectorType::Ball | VectorType::Unknown(_) => None,
        }
    }
}

/// Annotation type metadata attached to each record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationType {
    pub id: u32,
    pub vector_type: VectorType,
    #[serde(default)]
    pub node_count: usize,
}

impl AnnotationType {
    pub fn shape_kind(&self) -> Option<ShapeKind> {
        self.vector_type.shape_kind(self.node_count)
    }
}

/// One persisted annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotationRecord {
    pub id: u64,
    #[serde(default)]
    pub annotation_type_id: Option<u32>,
    /// `None` when the annotation has no geometry (e.g. "not in image")
    pub vector: Option<Vector>,
    pub annotation_type: AnnotationType,
}
