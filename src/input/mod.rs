//! Pointer input handling and the editor state machine.
//!
//! This module translates host pointer events into shape edits. It owns the
//! set of shapes on a surface, the single active shape and the interaction
//! state (idle, authoring, editing) plus the drag lock.

pub mod events;
pub mod state;

// Re-export commonly used types at module level
pub use events::{Direction, PointerEvent};
pub use state::{EditorSurface, InteractionState, SurfaceOptions};
