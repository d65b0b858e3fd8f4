//! Annotation feed records consumed when a surface loads existing work.
//!
//! The persistence layer sends an ordered list of [`AnnotationRecord`]s; the
//! editor turns the ones matching the active annotation type into immutable
//! shapes (see `EditorSurface::load_annotations`).

mod record;

pub use record::{AnnotationRecord, AnnotationType, VectorType};
