//! Drawing tools and the registry that dispatches to them.
//!
//! A tool is a named behavior invoked with the initiating press event and
//! the surface's drawing state. An instantaneous tool draws and returns
//! (see [`stamp`]); a continuing tool hands callbacks to the gesture
//! tracker and returns immediately, with drawing happening as the
//! gesture delivers moves and ticks (see [`line`], [`erase`], [`spray`]).

pub mod erase;
pub mod line;
pub mod spray;
pub mod stamp;

pub use erase::erase;
pub use line::line;
pub use spray::spray;
pub use stamp::stamp;

use std::rc::Rc;
use std::time::Instant;

use rand::rngs::StdRng;

use crate::draw::Canvas;
use crate::input::{GestureTracker, PointerEvent, SurfaceGeometry};

/// Everything a tool may touch when it is invoked.
///
/// Borrowed from the owning surface for the duration of one tool call;
/// gesture callbacks registered by the tool later receive the narrower
/// [`crate::input::PaintCtx`].
pub struct ToolCtx<'a> {
    /// The shared drawing context.
    pub canvas: &'a mut Canvas,
    /// Tracker the tool may hand a gesture to.
    pub gesture: &'a mut GestureTracker,
    /// Surface geometry at press time, for coordinate mapping.
    pub geometry: SurfaceGeometry,
    /// The press instant, anchoring any gesture-scoped schedule.
    pub now: Instant,
    /// Randomness source for tools that sample (spray).
    pub rng: &'a mut StdRng,
}

/// A tool behavior: invoked with the initiating event and the tool
/// context. Cloned out of the registry at dispatch time.
pub type ToolFn = Rc<dyn Fn(&PointerEvent, &mut ToolCtx<'_>)>;

/// Named set of drawing behaviors.
///
/// Entries keep registration order so a selector control can list them
/// the way they were registered, with the first entry as the default.
/// The registry is constructor-injected into the widget - there are no
/// process-wide tool tables, so independent surfaces cannot cross-talk.
#[derive(Default)]
pub struct ToolRegistry {
    entries: Vec<(String, ToolFn)>,
}

impl ToolRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the built-in tools.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register("Line", line);
        registry.register("Erase", erase);
        registry.register("Spray", spray);
        registry.register("Stamp", stamp);
        registry
    }

    /// Registers a tool under `name`, replacing any previous entry with
    /// the same name.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        tool: impl Fn(&PointerEvent, &mut ToolCtx<'_>) + 'static,
    ) {
        let name = name.into();
        let tool: ToolFn = Rc::new(tool);
        if let Some(entry) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            log::debug!("Replacing tool registration '{name}'");
            entry.1 = tool;
        } else {
            self.entries.push((name, tool));
        }
    }

    /// Removes the tool registered under `name`. Returns whether an
    /// entry was removed.
    pub fn remove(&mut self, name: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(n, _)| n != name);
        self.entries.len() != before
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<ToolFn> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, tool)| Rc::clone(tool))
    }

    /// Tool names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_keep_registration_order() {
        let registry = ToolRegistry::with_defaults();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(names, vec!["Line", "Erase", "Spray", "Stamp"]);
    }

    #[test]
    fn lookup_is_by_exact_name() {
        let registry = ToolRegistry::with_defaults();
        assert!(registry.get("Line").is_some());
        assert!(registry.get("line").is_none());
        assert!(registry.get("Pencil").is_none());
    }

    #[test]
    fn register_replaces_without_duplicating() {
        let mut registry = ToolRegistry::with_defaults();
        let len = registry.len();
        registry.register("Line", |_, _| {});
        assert_eq!(registry.len(), len);
    }

    #[test]
    fn remove_supports_dynamic_registries() {
        let mut registry = ToolRegistry::with_defaults();
        assert!(registry.remove("Spray"));
        assert!(!registry.remove("Spray"));
        assert!(registry.get("Spray").is_none());
    }
}
