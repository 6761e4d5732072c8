//! Coordinate mapping from viewport space to surface-local pixels.

use super::events::PointerEvent;

/// An integer pixel coordinate pair, local to the surface's top-left
/// origin.
///
/// Positions are derived from events on demand and only persist as the
/// "current position" inside an active gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Where (and how large) the surface currently is on screen.
///
/// `left`/`top` are the viewport coordinates of the surface's top-left
/// corner; `scale_x`/`scale_y` account for the surface being displayed at
/// a different size than its pixel dimensions (CSS scaling). A surface
/// that has not been laid out yet has no geometry, which the mapper
/// treats as an offset of (0, 0) at scale 1 by convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceGeometry {
    pub left: f64,
    pub top: f64,
    pub scale_x: f64,
    pub scale_y: f64,
}

impl Default for SurfaceGeometry {
    fn default() -> Self {
        Self {
            left: 0.0,
            top: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl SurfaceGeometry {
    /// Geometry at a plain viewport offset with no scaling.
    pub fn at(left: f64, top: f64) -> Self {
        Self {
            left,
            top,
            ..Self::default()
        }
    }
}

/// Maps a pointer event's viewport position to surface-local integer
/// pixels, flooring fractional values so pixel addresses are stable.
///
/// Pure function with no side effects; it never fails. Degenerate scale
/// values are treated as 1.0 rather than dividing by zero.
pub fn relative_position(event: &PointerEvent, geometry: SurfaceGeometry) -> Position {
    let scale_x = if geometry.scale_x > 0.0 {
        geometry.scale_x
    } else {
        1.0
    };
    let scale_y = if geometry.scale_y > 0.0 {
        geometry.scale_y
    } else {
        1.0
    };

    Position {
        x: ((event.x - geometry.left) / scale_x).floor() as i32,
        y: ((event.y - geometry.top) / scale_y).floor() as i32,
    }
}
