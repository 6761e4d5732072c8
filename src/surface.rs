//! The paint surface: one canvas, one gesture tracker, and the event
//! plumbing between them.

use std::time::Instant;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::draw::Canvas;
use crate::input::{
    GestureTracker, PaintCtx, PointerButton, PointerEvent, SurfaceGeometry,
};
use crate::tools::{ToolCtx, ToolFn};

/// One drawing surface and its transient input state.
///
/// The surface owns everything a tool invocation touches: the canvas,
/// the gesture tracker, the on-screen geometry, and the randomness
/// source. All methods run on the host's single event loop; nothing here
/// is re-entrant.
pub struct PaintSurface {
    canvas: Canvas,
    gesture: GestureTracker,
    geometry: Option<SurfaceGeometry>,
    /// Last viewport position seen, for synthesizing a release when the
    /// pointer leaves the window mid-gesture.
    last_pointer: Option<(f64, f64)>,
    rng: StdRng,
}

impl PaintSurface {
    /// Creates a surface with a transparent canvas of the given size.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            canvas: Canvas::new(width, height),
            gesture: GestureTracker::new(),
            geometry: None,
            last_pointer: None,
            rng: StdRng::from_entropy(),
        }
    }

    /// Reseeds the randomness source for deterministic dot placement
    /// (useful for tests and replays).
    pub fn reseed(&mut self, seed: u64) {
        self.rng = StdRng::seed_from_u64(seed);
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        &mut self.canvas
    }

    /// The surface's current on-screen geometry; a surface that has not
    /// been laid out maps events from the viewport origin.
    pub fn geometry(&self) -> SurfaceGeometry {
        self.geometry.unwrap_or_default()
    }

    pub fn set_geometry(&mut self, geometry: SurfaceGeometry) {
        self.geometry = Some(geometry);
    }

    pub fn gesture_active(&self) -> bool {
        self.gesture.is_active()
    }

    /// Invokes a tool with a press event.
    ///
    /// `now` anchors any gesture-scoped schedule the tool starts. Errors
    /// inside the tool are not caught here: a panicking tool unwinds to
    /// the host with the gesture aborted.
    pub fn dispatch(&mut self, tool: &ToolFn, event: &PointerEvent, now: Instant) {
        self.last_pointer = Some((event.x, event.y));
        let mut ctx = ToolCtx {
            canvas: &mut self.canvas,
            gesture: &mut self.gesture,
            geometry: self.geometry.unwrap_or_default(),
            now,
            rng: &mut self.rng,
        };
        tool.as_ref()(event, &mut ctx);
    }

    /// Forwards a pointer move to the active gesture, if any.
    pub fn pointer_moved(&mut self, event: &PointerEvent) {
        self.last_pointer = Some((event.x, event.y));
        let mut ctx = PaintCtx {
            canvas: &mut self.canvas,
            rng: &mut self.rng,
        };
        self.gesture.pointer_moved(event, &mut ctx);
    }

    /// Ends the active gesture, if any.
    pub fn pointer_released(&mut self, event: &PointerEvent) {
        self.last_pointer = Some((event.x, event.y));
        let mut ctx = PaintCtx {
            canvas: &mut self.canvas,
            rng: &mut self.rng,
        };
        self.gesture.pointer_released(event, &mut ctx);
    }

    /// Handles the pointer leaving the window.
    ///
    /// A pointer that leaves while logically "down" would otherwise leave
    /// the gesture active forever; it is treated as a release at the last
    /// known position so every teardown path (composite restore, ticker
    /// disposal) still runs.
    pub fn pointer_left(&mut self) {
        if self.gesture.is_active() {
            log::debug!("Pointer left the window mid-gesture; treating as release");
            let (x, y) = self.last_pointer.unwrap_or((0.0, 0.0));
            let event = PointerEvent::release(x, y, PointerButton::Primary);
            let mut ctx = PaintCtx {
                canvas: &mut self.canvas,
                rng: &mut self.rng,
            };
            self.gesture.pointer_released(&event, &mut ctx);
        }
        self.last_pointer = None;
    }

    /// Fires any gesture-scoped schedule for ticks due at `now`.
    pub fn pump(&mut self, now: Instant) {
        let mut ctx = PaintCtx {
            canvas: &mut self.canvas,
            rng: &mut self.rng,
        };
        self.gesture.pump(now, &mut ctx);
    }
}
