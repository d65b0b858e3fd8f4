//! Error types for editor operations.
//!
//! Only host contract violations surface as errors. Pointer interactions that
//! make no sense in the current state are ignored instead.

use crate::draw::ShapeId;
use thiserror::Error;

/// Errors returned by shape and surface operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EditorError {
    /// No shape with this id is on the surface
    #[error("no shape with id {0} on the surface")]
    ShapeNotFound(ShapeId),

    /// A 1-based point index outside `1..=len`
    #[error("point index {index} out of range (shape has {len} points)")]
    PointOutOfRange { index: usize, len: usize },

    /// The operation needs an active shape but the surface is idle
    #[error("no shape is active")]
    NoActiveShape,
}
