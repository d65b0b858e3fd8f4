//! Shape geometry and render-side types.
//!
//! This module defines the core drawing types used for vector annotation:
//! - [`Color`]: RGB color handed to the renderer as CSS hex
//! - [`Vector`]: numbered-coordinate point lists (`x1, y1, ...`)
//! - [`Shape`]: one annotation's vertices and its closing policy
//! - [`ShapeSet`]: all shapes on a surface, keyed by id
//! - [`Layer`] and the [`Renderer`]/[`FormSink`] collaborator traits

pub mod color;
pub mod frame;
pub mod layer;
pub mod renderer;
pub mod shape;
pub mod store;
pub mod vector;

// Re-export commonly used types at module level
pub use color::Color;
pub use frame::ShapeSet;
pub use layer::{Cursor, GeometryType, Handle, HandleCursors, Layer, LayerPatch, LayerStyle};
pub use renderer::{FormFields, FormSink, Renderer};
pub use shape::{AddOutcome, PointRemoval, Shape, ShapeId, ShapeKind};
pub use store::{FormLog, LayerStore};
pub use vector::{CoordinateMap, Vector};
