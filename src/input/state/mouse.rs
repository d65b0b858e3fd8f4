use super::core::{EditorSurface, InteractionState};
use crate::draw::{AddOutcome, FormSink, Renderer};
use crate::input::events::PointerEvent;
use crate::util::Point;

impl<R: Renderer, F: FormSink> EditorSurface<R, F> {
    /// Dispatches a host pointer event to the matching handler.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        match event {
            PointerEvent::Move { x, y } => self.pointer_move(x, y),
            PointerEvent::Down { x, y } => self.pointer_down(x, y),
            PointerEvent::Click { x, y } => self.click(x, y),
        }
    }

    /// Handles pointer motion.
    ///
    /// While authoring, the rubber-band point follows the pointer. The form
    /// fields follow the active shape as drawn.
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.last_pointer = Some(point);

        let Some(id) = self.active else {
            return;
        };
        if self.state == InteractionState::Authoring {
            if let Some(shape) = self.shapes.get_mut(id) {
                shape.set_trailing(point);
            }
            self.refresh_points(id);
        }
        self.push_form();
    }

    /// Handles a primary button press.
    ///
    /// A press within the threshold of any existing point grabs that handle:
    /// the surface locks so the following click does not start a new shape.
    pub fn pointer_down(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.last_pointer = Some(point);

        if self.shapes.any_point_near(&point, self.options.threshold) {
            log::debug!("Handle grabbed at ({x:.1}, {y:.1})");
            self.locked = true;
        }
    }

    /// Handles a click (button release).
    ///
    /// Exactly one of these happens, checked in order:
    /// 1. while authoring, a click inside the surface adds a point
    /// 2. a locked surface unlocks and reads back dragged handles
    /// 3. on a mutable surface, a click inside starts a new shape
    pub fn click(&mut self, x: f64, y: f64) {
        let point = Point::new(x, y);
        self.last_pointer = Some(point);
        let inside = self.options.bounds().contains(x, y);

        if self.state == InteractionState::Authoring {
            if inside {
                self.add_active_point(point);
            }
            return;
        }

        if self.locked {
            self.locked = false;
            self.sync_from_renderer();
            return;
        }

        if self.options.mutable && inside {
            match self.options.default_kind() {
                Some(kind) => self.start_shape(kind, x, y),
                None => log::warn!(
                    "Annotation type with vector type {:?} cannot be drawn",
                    self.options.vector_type
                ),
            }
        }
    }

    fn add_active_point(&mut self, point: Point) {
        let Some(id) = self.active else {
            return;
        };
        let threshold = self.options.threshold;
        let outcome = match self.shapes.get_mut(id) {
            Some(shape) => shape.add_point(point, threshold),
            None => return,
        };
        match outcome {
            AddOutcome::Closed => self.finish_authoring(),
            AddOutcome::Extended => self.refresh_points(id),
            AddOutcome::Ignored => return,
        }
        self.push_form();
    }
}
