//! Drawing surface and paint-state primitives.
//!
//! This module defines the core raster types the widget draws with:
//! - [`Color`]: RGBA color representation with hex parsing and constants
//! - [`Canvas`]: the pixel buffer plus shared mutable paint state
//! - [`CompositeOperation`] / [`StrokeCap`]: the paint-state enums tools
//!   flip while drawing

pub mod canvas;
pub mod color;

// Re-export commonly used types at module level
pub use canvas::{Canvas, CompositeOperation, StrokeCap, MAX_DIMENSION};
pub use color::Color;

// Re-export color constants for public API
#[allow(unused_imports)]
pub use color::{BLACK, BLUE, GREEN, RED, TRANSPARENT, WHITE};
