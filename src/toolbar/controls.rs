//! The built-in toolbar controls.
//!
//! Each control is a small widget model bound to the shared drawing
//! context: its UI-event method mutates paint state (or performs
//! import/export) directly and synchronously. Controls never talk to
//! each other.

use std::path::Path;

use crate::draw::{Canvas, Color};
use crate::io::{export, import, ExportError};

/// The tool-selector control.
///
/// Holds the registry's tool names in registration order; the first
/// entry is selected initially. The dispatcher reads [`value`] at every
/// press, so changing the selection takes effect on the very next press.
///
/// [`value`]: ToolSelector::value
#[derive(Debug)]
pub struct ToolSelector {
    options: Vec<String>,
    selected: usize,
}

impl ToolSelector {
    pub fn new(options: Vec<String>) -> Self {
        Self {
            options,
            selected: 0,
        }
    }

    /// The selectable tool names, in registration order.
    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// The currently selected tool name, or `None` for an empty registry.
    pub fn value(&self) -> Option<&str> {
        self.options.get(self.selected).map(String::as_str)
    }

    /// Selects a tool by name. Returns whether the name was an option.
    pub fn select(&mut self, name: &str) -> bool {
        match self.options.iter().position(|option| option == name) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => {
                log::warn!("Unknown tool '{name}' selected; keeping current selection");
                false
            }
        }
    }
}

/// The color control: one value driving both stroke and fill color.
#[derive(Debug)]
pub struct ColorPicker {
    value: Color,
}

impl ColorPicker {
    pub fn new(initial: Color) -> Self {
        Self { value: initial }
    }

    pub fn value(&self) -> Color {
        self.value
    }

    /// Applies a new color to the drawing context.
    pub fn set(&mut self, canvas: &mut Canvas, color: Color) {
        self.value = color;
        canvas.set_fill_color(color);
        canvas.set_stroke_color(color);
    }

    /// Handles a change event carrying a `#rrggbb` input value. Returns
    /// whether the value parsed.
    pub fn change(&mut self, canvas: &mut Canvas, input: &str) -> bool {
        match Color::parse_hex(input) {
            Some(color) => {
                self.set(canvas, color);
                true
            }
            None => {
                log::warn!("Ignoring unparseable color input '{input}'");
                false
            }
        }
    }
}

/// The brush-size control: a fixed option list in pixels.
#[derive(Debug)]
pub struct BrushSizePicker {
    sizes: Vec<f32>,
    selected: usize,
}

impl BrushSizePicker {
    pub fn new(sizes: Vec<f32>, initial_width: f32) -> Self {
        let selected = sizes
            .iter()
            .position(|size| *size == initial_width)
            .unwrap_or(0);
        Self { sizes, selected }
    }

    pub fn sizes(&self) -> &[f32] {
        &self.sizes
    }

    /// The currently selected size, in pixels.
    pub fn value(&self) -> Option<f32> {
        self.sizes.get(self.selected).copied()
    }

    /// Handles a change event selecting one of the offered sizes and
    /// applies it as the context's line width. Returns whether the size
    /// was an option.
    pub fn select_size(&mut self, canvas: &mut Canvas, size: f32) -> bool {
        match self.sizes.iter().position(|option| *option == size) {
            Some(index) => {
                self.selected = index;
                canvas.set_line_width(size);
                true
            }
            None => {
                log::warn!("Brush size {size} is not an offered option; ignoring");
                false
            }
        }
    }
}

/// What the save control currently points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SnapshotLink {
    /// A `data:image/png;base64,...` snapshot of the canvas.
    Url(String),
    /// A non-navigating, user-visible message explaining why no snapshot
    /// is available.
    Unavailable(String),
}

/// The save control.
///
/// The snapshot link is recomputed on demand (hover/focus in a typical
/// host) rather than after every paint.
#[derive(Debug, Default)]
pub struct SaveButton {
    link: Option<SnapshotLink>,
}

impl SaveButton {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last refreshed link, if any.
    pub fn link(&self) -> Option<&SnapshotLink> {
        self.link.as_ref()
    }

    /// Recomputes the snapshot link from the current canvas pixels.
    ///
    /// A security failure (tainted canvas) is recognized by kind and
    /// converted into a visible [`SnapshotLink::Unavailable`] message;
    /// any other export failure is re-raised unchanged.
    pub fn refresh(&mut self, canvas: &Canvas) -> Result<(), ExportError> {
        match export::to_data_url(canvas) {
            Ok(url) => {
                self.link = Some(SnapshotLink::Url(url));
                Ok(())
            }
            Err(err @ ExportError::Tainted) => {
                self.link = Some(SnapshotLink::Unavailable(err.to_string()));
                Ok(())
            }
            Err(other) => Err(other),
        }
    }
}

/// The open-file control: best-effort image import from disk.
#[derive(Debug, Default)]
pub struct OpenFile;

impl OpenFile {
    /// Loads an image file into the canvas. Failures are logged and
    /// otherwise ignored - a bad file simply never replaces the canvas.
    pub fn open(&self, canvas: &mut Canvas, path: &Path) {
        if let Err(err) = import::load_file(canvas, path) {
            log::debug!("Open file '{}' failed (ignored): {err}", path.display());
        }
    }
}

/// The open-URL control: best-effort image import from URL-shaped input.
#[derive(Debug, Default)]
pub struct OpenUrl;

impl OpenUrl {
    /// Loads `data:`/`file:` URLs or local paths into the canvas.
    /// Failures are logged and otherwise ignored.
    pub fn open(&self, canvas: &mut Canvas, input: &str) {
        if let Err(err) = import::load_url(canvas, input) {
            log::debug!("Open URL '{input}' failed (ignored): {err}");
        }
    }

    /// Accepts bytes the host fetched from a remote URL; the canvas
    /// becomes tainted. Failures are logged and otherwise ignored.
    pub fn receive(&self, canvas: &mut Canvas, bytes: &[u8]) {
        if let Err(err) = import::receive_remote(canvas, bytes) {
            log::debug!("Remote image load failed (ignored): {err}");
        }
    }
}
