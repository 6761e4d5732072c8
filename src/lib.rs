//! Embeddable raster paint surface with pluggable tools and controls.
//!
//! The widget core is backend-agnostic: a host owns the event loop,
//! forwards pointer events to a [`PaintWidget`], and pumps its timers.
//! Everything with behavior lives here - the gesture state machine, the
//! tool and control registries, the raster canvas, and import/export -
//! while window systems and toolbars-as-pixels stay on the host's side
//! of the boundary.

pub mod config;
pub mod draw;
pub mod input;
pub mod io;
pub mod surface;
pub mod toolbar;
pub mod tools;
pub mod widget;

pub use config::Config;
pub use draw::{Canvas, Color, CompositeOperation};
pub use input::{Gesture, GestureTracker, PointerButton, PointerEvent, Position, SurfaceGeometry};
pub use surface::PaintSurface;
pub use toolbar::{ControlRegistry, Toolbar};
pub use tools::ToolRegistry;
pub use widget::PaintWidget;
