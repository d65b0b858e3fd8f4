mod actions;
mod core;
mod mouse;
mod render;

pub use self::core::{EditorSurface, InteractionState, SurfaceOptions};
