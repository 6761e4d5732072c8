//! The assembled paint widget: surface plus toolbar.

use std::path::Path;
use std::time::Instant;

use crate::config::Config;
use crate::draw::Canvas;
use crate::input::{PointerButton, PointerEvent, SurfaceGeometry};
use crate::io::ExportError;
use crate::surface::PaintSurface;
use crate::toolbar::{Control, ControlCtx, ControlRegistry, SnapshotLink, Toolbar};
use crate::tools::ToolRegistry;

/// A complete paint widget: one surface, one toolbar, and the registries
/// they were built from.
///
/// Registries are injected at construction - there is no process-wide
/// state, so any number of independent widgets can coexist. The host
/// forwards pointer events to the `pointer_*` methods and calls
/// [`pump`] periodically (or whenever a timer is due) to drive
/// gesture-scoped schedules.
///
/// [`pump`]: PaintWidget::pump
pub struct PaintWidget {
    tools: ToolRegistry,
    toolbar: Toolbar,
    surface: PaintSurface,
}

impl PaintWidget {
    /// Builds a widget with the built-in tools and controls.
    pub fn new(config: &Config) -> Self {
        Self::with_registries(
            config,
            ToolRegistry::with_defaults(),
            &ControlRegistry::with_defaults(),
        )
    }

    /// Builds a widget from explicit registries.
    pub fn with_registries(
        config: &Config,
        tools: ToolRegistry,
        controls: &ControlRegistry,
    ) -> Self {
        let toolbar = Toolbar::build(
            controls,
            &ControlCtx {
                config,
                tools: &tools,
            },
        );

        let mut surface = PaintSurface::new(config.surface.width, config.surface.height);
        let color = config.default_color();
        surface.canvas_mut().set_stroke_color(color);
        surface.canvas_mut().set_fill_color(color);
        surface
            .canvas_mut()
            .set_line_width(config.drawing.default_line_width);

        Self {
            tools,
            toolbar,
            surface,
        }
    }

    // ------------------------------------------------------------------
    // Pointer event entry points
    // ------------------------------------------------------------------

    /// Handles a pointer press on the surface.
    ///
    /// On a primary-button press the currently selected tool name is read
    /// from the selector (live, never cached) and looked up in the tool
    /// registry; the tool is invoked synchronously with the press event.
    /// Returns `true` when the press was dispatched, which the host
    /// should treat as consuming the event (suppressing any native drag
    /// or selection behavior).
    pub fn pointer_pressed(&mut self, event: &PointerEvent, now: Instant) -> bool {
        if event.button != Some(PointerButton::Primary) {
            return false;
        }

        let Some(name) = self.toolbar.selected_tool().map(str::to_owned) else {
            log::debug!("Press ignored: no tool selector or empty registry");
            return false;
        };
        let Some(tool) = self.tools.get(&name) else {
            log::warn!("Selected tool '{name}' is not registered; press ignored");
            return false;
        };

        log::debug!("Dispatching press to tool '{name}'");
        self.surface.dispatch(&tool, event, now);
        true
    }

    pub fn pointer_moved(&mut self, event: &PointerEvent) {
        self.surface.pointer_moved(event);
    }

    pub fn pointer_released(&mut self, event: &PointerEvent) {
        self.surface.pointer_released(event);
    }

    /// The pointer left the window; an active gesture ends as if
    /// released at the last known position.
    pub fn pointer_left(&mut self) {
        self.surface.pointer_left();
    }

    /// Drives gesture-scoped schedules up to `now`.
    pub fn pump(&mut self, now: Instant) {
        self.surface.pump(now);
    }

    // ------------------------------------------------------------------
    // Control convenience wrappers
    // ------------------------------------------------------------------

    /// Selects a tool by name on the toolbar's selector.
    pub fn select_tool(&mut self, name: &str) -> bool {
        self.toolbar
            .tool_selector_mut()
            .is_some_and(|selector| selector.select(name))
    }

    /// Applies a `#rrggbb` color input to the color control.
    pub fn set_color(&mut self, input: &str) -> bool {
        let Some(picker) = self.toolbar.color_picker_mut() else {
            return false;
        };
        picker.change(self.surface.canvas_mut(), input)
    }

    /// Selects one of the brush-size control's options.
    pub fn set_brush_size(&mut self, size: f32) -> bool {
        let Some(picker) = self.toolbar.brush_size_mut() else {
            return false;
        };
        picker.select_size(self.surface.canvas_mut(), size)
    }

    /// Refreshes the save control's snapshot link and returns it.
    pub fn refresh_save_link(&mut self) -> Result<Option<&SnapshotLink>, ExportError> {
        let Some(save) = self.toolbar.save_button_mut() else {
            return Ok(None);
        };
        save.refresh(self.surface.canvas())?;
        Ok(save.link())
    }

    /// Feeds a file path to the open-file control (best-effort).
    pub fn open_file(&mut self, path: &Path) {
        if let Some(Control::OpenFile(open)) = self.toolbar.control("open-file") {
            open.open(self.surface.canvas_mut(), path);
        }
    }

    /// Feeds URL-shaped input to the open-URL control (best-effort).
    pub fn open_url(&mut self, input: &str) {
        if let Some(Control::OpenUrl(open)) = self.toolbar.control("open-url") {
            open.open(self.surface.canvas_mut(), input);
        }
    }

    /// Feeds host-fetched remote image bytes to the open-URL control
    /// (best-effort; the canvas becomes tainted).
    pub fn receive_remote_image(&mut self, bytes: &[u8]) {
        if let Some(Control::OpenUrl(open)) = self.toolbar.control("open-url") {
            open.receive(self.surface.canvas_mut(), bytes);
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn canvas(&self) -> &Canvas {
        self.surface.canvas()
    }

    pub fn canvas_mut(&mut self) -> &mut Canvas {
        self.surface.canvas_mut()
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn toolbar_mut(&mut self) -> &mut Toolbar {
        &mut self.toolbar
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn tools_mut(&mut self) -> &mut ToolRegistry {
        &mut self.tools
    }

    pub fn surface(&self) -> &PaintSurface {
        &self.surface
    }

    pub fn set_geometry(&mut self, geometry: SurfaceGeometry) {
        self.surface.set_geometry(geometry);
    }

    /// Reseeds the surface's randomness source for deterministic
    /// behavior in tests and replays.
    pub fn reseed(&mut self, seed: u64) {
        self.surface.reseed(seed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::CompositeOperation;

    fn widget() -> PaintWidget {
        let mut widget = PaintWidget::new(&Config::default());
        widget.reseed(3);
        widget
    }

    #[test]
    fn construction_applies_config_defaults() {
        let mut config = Config::default();
        config.drawing.default_color = "#00ff00".to_string();
        config.drawing.default_line_width = 5.0;
        config.surface.width = 64;

        let widget = PaintWidget::new(&config);
        assert_eq!(widget.canvas().width(), 64);
        assert_eq!(widget.canvas().line_width(), 5.0);
        assert_eq!(widget.canvas().stroke_color().to_hex(), "#00ff00");
    }

    #[test]
    fn selector_value_is_read_at_each_press() {
        let mut widget = widget();

        // Drawn with Line first...
        assert!(widget.pointer_pressed(
            &PointerEvent::press(10.0, 10.0, PointerButton::Primary),
            Instant::now()
        ));
        widget.pointer_released(&PointerEvent::release(10.0, 10.0, PointerButton::Primary));

        // ...then switching tools affects the very next press.
        assert!(widget.select_tool("Erase"));
        widget.pointer_pressed(
            &PointerEvent::press(10.0, 10.0, PointerButton::Primary),
            Instant::now(),
        );
        assert_eq!(
            widget.canvas().composite_operation(),
            CompositeOperation::DestinationOut
        );
        widget.pointer_released(&PointerEvent::release(10.0, 10.0, PointerButton::Primary));
        assert_eq!(
            widget.canvas().composite_operation(),
            CompositeOperation::SourceOver
        );
    }

    #[test]
    fn non_primary_presses_are_not_dispatched() {
        let mut widget = widget();
        assert!(!widget.pointer_pressed(
            &PointerEvent::press(10.0, 10.0, PointerButton::Secondary),
            Instant::now()
        ));
        assert!(!widget.pointer_pressed(&PointerEvent::motion(10.0, 10.0), Instant::now()));
        assert!(!widget.surface().gesture_active());
    }

    #[test]
    fn unknown_selected_tool_is_ignored() {
        let mut widget = widget();
        // Simulate a selector/registry mismatch by removing the
        // registered tool after the toolbar was built.
        widget.tools_mut().remove("Line");
        assert!(!widget.pointer_pressed(
            &PointerEvent::press(0.0, 0.0, PointerButton::Primary),
            Instant::now()
        ));
    }

    #[test]
    fn control_wrappers_mutate_the_shared_context() {
        let mut widget = widget();
        assert!(widget.set_color("#0000ff"));
        assert!(widget.set_brush_size(25.0));
        assert_eq!(widget.canvas().stroke_color().to_hex(), "#0000ff");
        assert_eq!(widget.canvas().line_width(), 25.0);

        assert!(!widget.set_brush_size(7.5));
        assert_eq!(widget.canvas().line_width(), 25.0);
    }

    #[test]
    fn save_link_refreshes_from_current_pixels() {
        let mut widget = widget();
        let link = widget.refresh_save_link().unwrap().cloned();
        assert!(matches!(link, Some(SnapshotLink::Url(_))));
    }
}
