//! Stamp tool: instantaneous brush-sized dot.

use crate::input::{relative_position, PointerEvent};

use super::ToolCtx;

/// Fills one brush-radius disk at the press position and returns.
///
/// The instantaneous counterpart to the continuing tools: no gesture is
/// started, so the press is the whole interaction.
pub fn stamp(event: &PointerEvent, ctx: &mut ToolCtx<'_>) {
    let pos = relative_position(event, ctx.geometry);
    let radius = (ctx.canvas.line_width() / 2.0).max(0.5);
    ctx.canvas.fill_disk(pos, radius);
}
