//! Toolbar controls and the registry that builds them.
//!
//! A control is a named toolbar widget bound to the shared drawing
//! context: the tool selector, color and brush-size inputs, and the
//! save/open affordances. Like the tool registry, the control registry
//! is constructor-injected so independent widgets cannot cross-talk.

pub mod controls;

pub use controls::{
    BrushSizePicker, ColorPicker, OpenFile, OpenUrl, SaveButton, SnapshotLink, ToolSelector,
};

use std::rc::Rc;

use crate::config::Config;
use crate::tools::ToolRegistry;

/// What a control builder may read while producing its widget.
pub struct ControlCtx<'a> {
    pub config: &'a Config,
    pub tools: &'a ToolRegistry,
}

/// One toolbar widget.
pub enum Control {
    ToolSelector(ToolSelector),
    Color(ColorPicker),
    BrushSize(BrushSizePicker),
    Save(SaveButton),
    OpenFile(OpenFile),
    OpenUrl(OpenUrl),
}

/// A control behavior: given the build context, produces one widget.
pub type ControlFn = Rc<dyn Fn(&ControlCtx<'_>) -> Control>;

/// Named set of toolbar widgets, in registration order.
#[derive(Default)]
pub struct ControlRegistry {
    entries: Vec<(String, ControlFn)>,
}

impl ControlRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in controls.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("tool", |ctx: &ControlCtx<'_>| {
            Control::ToolSelector(ToolSelector::new(
                ctx.tools.names().map(str::to_string).collect(),
            ))
        });
        registry.register("color", |ctx: &ControlCtx<'_>| {
            Control::Color(ColorPicker::new(ctx.config.default_color()))
        });
        registry.register("brush-size", |ctx: &ControlCtx<'_>| {
            Control::BrushSize(BrushSizePicker::new(
                ctx.config.drawing.brush_sizes.clone(),
                ctx.config.drawing.default_line_width,
            ))
        });
        registry.register("save", |_: &ControlCtx<'_>| Control::Save(SaveButton::new()));
        registry.register("open-file", |_: &ControlCtx<'_>| {
            Control::OpenFile(OpenFile)
        });
        registry.register("open-url", |_: &ControlCtx<'_>| Control::OpenUrl(OpenUrl));
        registry
    }

    /// Registers a control under `name`, replacing any previous entry
    /// with the same name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        control: impl Fn(&ControlCtx<'_>) -> Control + 'static,
    ) {
        let name = name.into();
        let control: ControlFn = Rc::new(control);
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            log::debug!("Replacing control registration '{name}'");
            entry.1 = control;
        } else {
            self.entries.push((name, control));
        }
    }

    /// Removes the control registered under `name`. Returns whether an
    /// entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(n, _)| n != name);
        self.entries.len() != before
    }

    /// Control names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

/// The built toolbar: every registered control, instantiated against one
/// drawing context's configuration.
pub struct Toolbar {
    controls: Vec<(String, Control)>,
}

impl Toolbar {
    /// Builds a toolbar by invoking every registered control builder in
    /// registration order.
    pub fn build(registry: &ControlRegistry, ctx: &ControlCtx<'_>) -> Self {
        let controls = registry
            .entries
            .iter()
            .map(|(name, builder)| (name.clone(), builder.as_ref()(ctx)))
            .collect();
        Self { controls }
    }

    /// Looks up a control by name.
    pub fn control(&self, name: &str) -> Option<&Control> {
        self.controls
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, control)| control)
    }

    /// Looks up a control by name, mutably.
    pub fn control_mut(&mut self, name: &str) -> Option<&mut Control> {
        self.controls
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, control)| control)
    }

    /// Control names in build order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.controls.iter().map(|(name, _)| name.as_str())
    }

    /// The first tool selector on the toolbar, if any.
    pub fn tool_selector(&self) -> Option<&ToolSelector> {
        self.controls.iter().find_map(|(_, control)| match control {
            Control::ToolSelector(selector) => Some(selector),
            _ => None,
        })
    }

    pub fn tool_selector_mut(&mut self) -> Option<&mut ToolSelector> {
        self.controls
            .iter_mut()
            .find_map(|(_, control)| match control {
                Control::ToolSelector(selector) => Some(selector),
                _ => None,
            })
    }

    /// The currently selected tool name, read live from the selector.
    pub fn selected_tool(&self) -> Option<&str> {
        self.tool_selector().and_then(ToolSelector::value)
    }

    pub fn color_picker_mut(&mut self) -> Option<&mut ColorPicker> {
        self.controls
            .iter_mut()
            .find_map(|(_, control)| match control {
                Control::Color(picker) => Some(picker),
                _ => None,
            })
    }

    pub fn brush_size_mut(&mut self) -> Option<&mut BrushSizePicker> {
        self.controls
            .iter_mut()
            .find_map(|(_, control)| match control {
                Control::BrushSize(picker) => Some(picker),
                _ => None,
            })
    }

    pub fn save_button_mut(&mut self) -> Option<&mut SaveButton> {
        self.controls
            .iter_mut()
            .find_map(|(_, control)| match control {
                Control::Save(save) => Some(save),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn build_default_toolbar() -> Toolbar {
        let config = Config::default();
        let tools = ToolRegistry::with_defaults();
        let registry = ControlRegistry::with_defaults();
        Toolbar::build(
            &registry,
            &ControlCtx {
                config: &config,
                tools: &tools,
            },
        )
    }

    #[test]
    fn default_toolbar_builds_every_control_in_order() {
        let toolbar = build_default_toolbar();
        let names: Vec<_> = toolbar.names().collect();
        assert_eq!(
            names,
            vec!["tool", "color", "brush-size", "save", "open-file", "open-url"]
        );
    }

    #[test]
    fn selector_lists_tools_in_registration_order() {
        let toolbar = build_default_toolbar();
        let selector = toolbar.tool_selector().unwrap();
        assert_eq!(selector.options(), ["Line", "Erase", "Spray", "Stamp"]);
        assert_eq!(toolbar.selected_tool(), Some("Line"));
    }

    #[test]
    fn custom_registrations_replace_defaults() {
        let mut registry = ControlRegistry::with_defaults();
        registry.register("save", |_: &ControlCtx<'_>| Control::Save(SaveButton::new()));
        assert_eq!(registry.names().count(), 6);
        assert!(registry.remove("open-url"));
        assert_eq!(registry.names().count(), 5);
    }
}
