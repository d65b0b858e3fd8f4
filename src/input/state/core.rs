//! Editor surface state machine and its owned state.

use crate::annotation::VectorType;
use crate::config::Config;
use crate::draw::{FormSink, LayerStyle, Renderer, Shape, ShapeId, ShapeKind, ShapeSet};
use crate::util::{Bounds, Point};

/// Interaction phase of the surface.
///
/// Authoring and editing are mutually exclusive: at most one shape is active
/// at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InteractionState {
    /// Waiting for input. A just-finished shape may still be active.
    #[default]
    Idle,
    /// Placing the points of a new shape click by click
    Authoring,
    /// An existing shape was selected for editing and its points snapshotted
    Editing,
}

/// Construction parameters for an [`EditorSurface`].
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceOptions {
    /// Surface width in pixels
    pub width: f64,
    /// Surface height in pixels
    pub height: f64,
    /// Vector type of the annotation type being drawn
    pub vector_type: VectorType,
    /// Node count of that annotation type (0 = arbitrary, polygons only)
    pub node_count: usize,
    /// Whether clicks may create new shapes
    pub mutable: bool,
    /// Factor from surface pixels to image pixels for the form fields
    pub image_scale: f64,
    /// Per-axis pointer hit distance in pixels
    pub threshold: f64,
    /// Pixels per directional move
    pub move_step_px: f64,
    /// Stroke and handle styling for every layer
    pub style: LayerStyle,
}

impl SurfaceOptions {
    /// Options with built-in defaults (7 px threshold, 2 px move step, `#C00`).
    pub fn new(width: f64, height: f64, vector_type: VectorType, node_count: usize) -> Self {
        Self {
            width,
            height,
            vector_type,
            node_count,
            mutable: true,
            image_scale: 1.0,
            threshold: 7.0,
            move_step_px: 2.0,
            style: LayerStyle::default(),
        }
    }

    /// Takes threshold, move step and styling from a loaded config.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.threshold = config.editor.threshold;
        self.move_step_px = config.editor.move_step_px;
        self.style = config.layer_style();
        self
    }

    pub fn with_mutable(mut self, mutable: bool) -> Self {
        self.mutable = mutable;
        self
    }

    pub fn with_image_scale(mut self, image_scale: f64) -> Self {
        self.image_scale = image_scale;
        self
    }

    /// Shape kind a click on empty surface starts, if the vector type is drawable.
    pub fn default_kind(&self) -> Option<ShapeKind> {
        self.vector_type.shape_kind(self.node_count)
    }

    pub fn bounds(&self) -> Bounds {
        Bounds::new(self.width, self.height)
    }
}

/// The interactive editing surface.
///
/// Owns every shape on the surface, the single active shape and the
/// interaction state, and keeps the renderer's layers and the form fields in
/// step with the in-memory points. All mutation goes through `&mut self`.
pub struct EditorSurface<R: Renderer, F: FormSink> {
    /// Shapes on the surface, in layer order
    pub(super) shapes: ShapeSet,
    /// Shape being authored or edited
    pub(super) active: Option<ShapeId>,
    /// Current interaction phase
    pub(super) state: InteractionState,
    /// Set by a press near an existing point; swallows the next click
    pub(super) locked: bool,
    /// Last pointer position seen by any handler
    pub(super) last_pointer: Option<Point>,
    /// Points of the edited shape before editing started
    pub(super) saved_points: Option<Vec<Point>>,
    /// Number given to the next unsaved shape
    pub(super) next_unsaved: u32,
    pub(super) options: SurfaceOptions,
    pub(super) renderer: R,
    pub(super) form: F,
}

impl<R: Renderer, F: FormSink> EditorSurface<R, F> {
    /// Creates an empty, idle surface.
    pub fn new(options: SurfaceOptions, renderer: R, form: F) -> Self {
        log::debug!(
            "Editor surface {}x{} for {:?} (nodes: {}, mutable: {})",
            options.width,
            options.height,
            options.vector_type,
            options.node_count,
            options.mutable
        );
        Self {
            shapes: ShapeSet::new(),
            active: None,
            state: InteractionState::Idle,
            locked: false,
            last_pointer: None,
            saved_points: None,
            next_unsaved: 1,
            options,
            renderer,
            form,
        }
    }

    pub fn shapes(&self) -> &ShapeSet {
        &self.shapes
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(id)
    }

    pub fn active_id(&self) -> Option<ShapeId> {
        self.active
    }

    pub fn active_shape(&self) -> Option<&Shape> {
        self.active.and_then(|id| self.shapes.get(id))
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    /// True while a shape is being authored point by point.
    pub fn is_drawing(&self) -> bool {
        self.state == InteractionState::Authoring
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }

    pub fn last_pointer(&self) -> Option<Point> {
        self.last_pointer
    }

    pub fn options(&self) -> &SurfaceOptions {
        &self.options
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Mutable renderer access for hosts that feed renderer-side changes back.
    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    /// Enables or disables creating shapes by clicking.
    pub fn set_mutable(&mut self, mutable: bool) {
        self.options.mutable = mutable;
    }

    /// Updates the surface-to-image factor used for the form fields.
    pub fn set_image_scale(&mut self, image_scale: f64) {
        self.options.image_scale = image_scale;
    }

    /// Updates the surface size after the displayed image changed.
    pub fn set_size(&mut self, width: f64, height: f64) {
        self.options.width = width;
        self.options.height = height;
    }

    /// Starts authoring a new shape of `kind` with its first point at `(x, y)`.
    ///
    /// Ignored while another shape is being authored or when the surface is
    /// not mutable. An active unsaved shape is discarded and an edit in
    /// progress is cancelled first; committed shapes are kept. Kinds complete with one point (e.g.
    /// `Point`) close immediately, leaving the surface idle.
    pub fn start_shape(&mut self, kind: ShapeKind, x: f64, y: f64) {
        if self.is_drawing() {
            log::debug!("start_shape({kind:?}) ignored: already authoring");
            return;
        }
        if !self.options.mutable {
            log::debug!("start_shape({kind:?}) ignored: surface is not mutable");
            return;
        }

        self.release_active();

        let id = ShapeId::Unsaved(self.next_unsaved);
        self.next_unsaved = self.next_unsaved.wrapping_add(1);
        let shape = Shape::start(id, kind, Point::new(x, y));
        let closed = shape.is_closed();
        self.insert_shape(shape);
        self.active = Some(id);

        if closed {
            self.finish_authoring();
        } else {
            self.state = InteractionState::Authoring;
            log::debug!("Started {kind:?} at ({x:.1}, {y:.1})");
        }
    }

    /// Drops the active shape ahead of starting a new one.
    fn release_active(&mut self) {
        let Some(id) = self.active else {
            return;
        };
        if self.state == InteractionState::Editing {
            self.cancel_edit();
        } else if id.is_unsaved() {
            self.remove_shape(id);
        } else {
            if let Some(shape) = self.shapes.get_mut(id) {
                shape.set_mutable(false);
            }
            self.refresh_layer(id);
            self.active = None;
        }
    }

    /// Leaves authoring mode after the active shape closed.
    ///
    /// A shape reopened during an edit goes back to being edited.
    pub(super) fn finish_authoring(&mut self) {
        self.state = if self.saved_points.is_some() {
            InteractionState::Editing
        } else {
            InteractionState::Idle
        };
        self.locked = false;
        if let Some(id) = self.active {
            self.refresh_layer(id);
            if let Some(shape) = self.shapes.get(id) {
                log::debug!("Closed {:?} with {} point(s)", shape.kind(), shape.len());
            }
        }
    }
}
