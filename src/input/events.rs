//! Generic pointer event types for cross-host compatibility.
//!
//! Host backends map their native pointer events to these types; the
//! widget core never sees a display server.

/// Pointer button identification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    /// Primary button (left mouse button) - the only button that starts a gesture
    Primary,
    /// Secondary button (right mouse button)
    Secondary,
    /// Middle button (currently unused)
    Middle,
}

/// One pointer event in viewport coordinates.
///
/// Positions are fractional viewport pixels exactly as a host reports
/// them; the coordinate mapper converts them to surface-local integer
/// pixels on demand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Horizontal viewport position
    pub x: f64,
    /// Vertical viewport position
    pub y: f64,
    /// Button involved, if the event is a press or release
    pub button: Option<PointerButton>,
}

impl PointerEvent {
    /// A button-press event.
    pub fn press(x: f64, y: f64, button: PointerButton) -> Self {
        Self {
            x,
            y,
            button: Some(button),
        }
    }

    /// A pointer-motion event.
    pub fn motion(x: f64, y: f64) -> Self {
        Self { x, y, button: None }
    }

    /// A button-release event.
    pub fn release(x: f64, y: f64, button: PointerButton) -> Self {
        Self {
            x,
            y,
            button: Some(button),
        }
    }
}
