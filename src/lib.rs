//! Pointer-driven vector annotation editor core.
//!
//! Hosts feed surface-relative pointer events into an [`EditorSurface`],
//! which authors, edits and moves point, line and polygon shapes and keeps a
//! [`Renderer`](draw::Renderer) and a [`FormSink`](draw::FormSink) in sync.
//! Persisted annotations are loaded through [`annotation::AnnotationRecord`].

pub mod annotation;
pub mod config;
pub mod draw;
pub mod error;
pub mod input;
pub mod util;

pub use config::Config;
pub use error::EditorError;
pub use input::{EditorSurface, InteractionState, SurfaceOptions};
