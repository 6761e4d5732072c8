//! Gesture tracking: an explicit state machine for press-move-release
//! interactions.
//!
//! The tracker decouples "a pointer button is held down and moving" from
//! any specific tool's drawing logic. A tool that wants to keep receiving
//! events after its initiating press hands the tracker a [`Gesture`] with
//! the callbacks it cares about; the tracker owns them until the gesture
//! ends and guarantees they are detached exactly once, on every exit
//! path.

use std::mem;
use std::time::Instant;

use rand::rngs::StdRng;

use super::events::PointerEvent;
use super::ticker::Ticker;
use crate::draw::Canvas;

/// Mutable state handed to gesture callbacks.
///
/// Everything here belongs to the surface that dispatched the gesture;
/// the single-threaded event loop means callbacks never observe a
/// half-updated canvas.
pub struct PaintCtx<'a> {
    pub canvas: &'a mut Canvas,
    pub rng: &'a mut StdRng,
}

type MoveHandler = Box<dyn FnMut(&PointerEvent, &mut PaintCtx<'_>)>;
type EndHandler = Box<dyn FnOnce(&PointerEvent, &mut PaintCtx<'_>)>;
type TickHandler = Box<dyn FnMut(&mut PaintCtx<'_>)>;

/// The callbacks (and optional background schedule) for one gesture.
///
/// Built by a tool at press time and consumed by
/// [`GestureTracker::track`].
#[derive(Default)]
pub struct Gesture {
    on_move: Option<MoveHandler>,
    on_end: Option<EndHandler>,
    ticker: Option<(Ticker, TickHandler)>,
}

impl Gesture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Invoked once per pointer-move event, in event order, for the
    /// duration of the gesture.
    pub fn on_move(mut self, f: impl FnMut(&PointerEvent, &mut PaintCtx<'_>) + 'static) -> Self {
        self.on_move = Some(Box::new(f));
        self
    }

    /// Invoked exactly once when the gesture ends; always the last
    /// callback delivered for the gesture.
    pub fn on_end(mut self, f: impl FnOnce(&PointerEvent, &mut PaintCtx<'_>) + 'static) -> Self {
        self.on_end = Some(Box::new(f));
        self
    }

    pub(crate) fn on_end_boxed(mut self, f: EndHandler) -> Self {
        self.on_end = Some(f);
        self
    }

    /// Attaches a repeating schedule whose handler fires once per due
    /// tick while the gesture is active. The ticker is owned by the
    /// gesture and disposed when it ends.
    pub fn every(mut self, ticker: Ticker, f: impl FnMut(&mut PaintCtx<'_>) + 'static) -> Self {
        self.ticker = Some((ticker, Box::new(f)));
        self
    }
}

enum TrackerState {
    /// No gesture in progress.
    Idle,
    /// A press has been tracked; callbacks fire until release.
    Active(Gesture),
}

/// Tracks at most one continuous pointer gesture per surface.
///
/// State machine: press (via [`track`]) moves Idle to Active; each move
/// while Active invokes the move callback; release moves Active to Idle,
/// disposing the ticker and detaching both callbacks before the end
/// callback runs. Events arriving while Idle are ignored, so a stray
/// release can never double-fire.
///
/// [`track`]: GestureTracker::track
pub struct GestureTracker {
    state: TrackerState,
}

impl Default for GestureTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl GestureTracker {
    pub fn new() -> Self {
        Self {
            state: TrackerState::Idle,
        }
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, TrackerState::Active(_))
    }

    /// Begins tracking a gesture.
    ///
    /// Tools must not start a second gesture before the first ends. If
    /// one does, the newest registration wins: the displaced gesture's
    /// ticker is disposed and its end callback is never invoked, since
    /// the gesture did not end - it was overwritten.
    pub fn track(&mut self, gesture: Gesture) {
        if self.is_active() {
            log::warn!("Gesture tracked while another was active; replacing it");
        }
        self.state = TrackerState::Active(gesture);
    }

    /// Delivers a pointer-move event to the active gesture, if any.
    pub fn pointer_moved(&mut self, event: &PointerEvent, ctx: &mut PaintCtx<'_>) {
        if let TrackerState::Active(gesture) = &mut self.state
            && let Some(on_move) = gesture.on_move.as_mut()
        {
            on_move(event, ctx);
        }
    }

    /// Ends the active gesture, if any.
    ///
    /// The transition to Idle happens first: the ticker is dropped and
    /// both callbacks are detached before the end callback is invoked, so
    /// no callback can outlive its gesture and nothing is torn down
    /// twice.
    pub fn pointer_released(&mut self, event: &PointerEvent, ctx: &mut PaintCtx<'_>) {
        let TrackerState::Active(gesture) = mem::replace(&mut self.state, TrackerState::Idle)
        else {
            return;
        };

        let Gesture {
            on_move,
            on_end,
            ticker,
        } = gesture;
        drop(on_move);
        drop(ticker);
        if let Some(on_end) = on_end {
            on_end(event, ctx);
        }
    }

    /// Fires the active gesture's ticker for every tick due at `now`.
    pub fn pump(&mut self, now: Instant, ctx: &mut PaintCtx<'_>) {
        if let TrackerState::Active(gesture) = &mut self.state
            && let Some((ticker, on_tick)) = gesture.ticker.as_mut()
        {
            for _ in 0..ticker.due_ticks(now) {
                on_tick(ctx);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    fn fixtures() -> (Canvas, StdRng) {
        (Canvas::new(10, 10), StdRng::seed_from_u64(0))
    }

    fn recording_gesture(calls: &Rc<RefCell<Vec<&'static str>>>) -> Gesture {
        let moves = Rc::clone(calls);
        let ends = Rc::clone(calls);
        Gesture::new()
            .on_move(move |_, _| moves.borrow_mut().push("move"))
            .on_end(move |_, _| ends.borrow_mut().push("end"))
    }

    #[test]
    fn moves_are_delivered_in_order_and_end_is_last() {
        let (mut canvas, mut rng) = fixtures();
        let mut tracker = GestureTracker::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        tracker.track(recording_gesture(&calls));

        let mut ctx = PaintCtx {
            canvas: &mut canvas,
            rng: &mut rng,
        };
        tracker.pointer_moved(&PointerEvent::motion(1.0, 1.0), &mut ctx);
        tracker.pointer_released(&PointerEvent::motion(2.0, 2.0), &mut ctx);

        assert_eq!(*calls.borrow(), vec!["move", "end"]);
        assert!(!tracker.is_active());
    }

    #[test]
    fn no_callbacks_after_release() {
        let (mut canvas, mut rng) = fixtures();
        let mut tracker = GestureTracker::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        tracker.track(recording_gesture(&calls));

        let mut ctx = PaintCtx {
            canvas: &mut canvas,
            rng: &mut rng,
        };
        tracker.pointer_moved(&PointerEvent::motion(1.0, 1.0), &mut ctx);
        tracker.pointer_released(&PointerEvent::motion(2.0, 2.0), &mut ctx);
        tracker.pointer_moved(&PointerEvent::motion(3.0, 3.0), &mut ctx);
        tracker.pointer_released(&PointerEvent::motion(3.0, 3.0), &mut ctx);

        assert_eq!(*calls.borrow(), vec!["move", "end"]);
    }

    #[test]
    fn release_without_moves_still_ends_exactly_once() {
        let (mut canvas, mut rng) = fixtures();
        let mut tracker = GestureTracker::new();
        let calls = Rc::new(RefCell::new(Vec::new()));
        tracker.track(recording_gesture(&calls));

        let mut ctx = PaintCtx {
            canvas: &mut canvas,
            rng: &mut rng,
        };
        tracker.pointer_released(&PointerEvent::motion(0.0, 0.0), &mut ctx);

        assert_eq!(*calls.borrow(), vec!["end"]);
    }

    #[test]
    fn ticker_fires_while_active_and_stops_on_release() {
        let (mut canvas, mut rng) = fixtures();
        let mut tracker = GestureTracker::new();
        let ticks = Rc::new(RefCell::new(0u32));
        let counted = Rc::clone(&ticks);

        let start = Instant::now();
        let period = Duration::from_millis(25);
        tracker.track(
            Gesture::new().every(Ticker::new(period, start), move |_| {
                *counted.borrow_mut() += 1;
            }),
        );

        let mut ctx = PaintCtx {
            canvas: &mut canvas,
            rng: &mut rng,
        };
        tracker.pump(start + Duration::from_millis(60), &mut ctx);
        assert_eq!(*ticks.borrow(), 2);

        tracker.pointer_released(&PointerEvent::motion(0.0, 0.0), &mut ctx);
        tracker.pump(start + Duration::from_millis(500), &mut ctx);
        assert_eq!(*ticks.borrow(), 2);
    }

    #[test]
    fn newest_registration_displaces_an_active_gesture() {
        let (mut canvas, mut rng) = fixtures();
        let mut tracker = GestureTracker::new();
        let calls = Rc::new(RefCell::new(Vec::new()));

        let displaced = Rc::clone(&calls);
        tracker.track(Gesture::new().on_end(move |_, _| displaced.borrow_mut().push("old end")));
        tracker.track(recording_gesture(&calls));

        let mut ctx = PaintCtx {
            canvas: &mut canvas,
            rng: &mut rng,
        };
        tracker.pointer_released(&PointerEvent::motion(0.0, 0.0), &mut ctx);

        // Only the winning gesture's end callback runs.
        assert_eq!(*calls.borrow(), vec!["end"]);
    }
}
