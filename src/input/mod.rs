//! Pointer input handling: event types, coordinate mapping, and the
//! gesture state machine.
//!
//! This module translates host pointer events into drawing activity. The
//! [`GestureTracker`] is the core primitive: it observes one continuous
//! press-move-release interaction and routes it to whatever callbacks the
//! active tool registered, including an optional gesture-scoped
//! repeating [`Ticker`].

pub mod events;
pub mod gesture;
pub mod position;
pub mod ticker;

// Re-export commonly used types at module level
pub use events::{PointerButton, PointerEvent};
pub use gesture::{Gesture, GestureTracker, PaintCtx};
pub use position::{relative_position, Position, SurfaceGeometry};
pub use ticker::Ticker;
