//! Freehand line tool.

use crate::draw::StrokeCap;
use crate::input::{relative_position, Gesture, PaintCtx, PointerEvent};

use super::ToolCtx;

/// Draws a freehand line that follows the pointer.
///
/// Each move strokes one segment from the previous position to the new
/// one, so stroke color or width changes mid-gesture take effect on the
/// next segment immediately.
pub fn line(event: &PointerEvent, ctx: &mut ToolCtx<'_>) {
    track_segments(event, ctx, None);
}

/// Starts the per-segment stroking gesture shared by the line and erase
/// tools: round caps for smoother joins, then one stroked segment per
/// move from the previously tracked position.
pub(crate) fn track_segments(
    event: &PointerEvent,
    ctx: &mut ToolCtx<'_>,
    on_end: Option<Box<dyn FnOnce(&PointerEvent, &mut PaintCtx<'_>)>>,
) {
    ctx.canvas.set_stroke_cap(StrokeCap::Round);

    let geometry = ctx.geometry;
    let mut pos = relative_position(event, geometry);

    let mut gesture = Gesture::new().on_move(move |event, pctx| {
        let to = relative_position(event, geometry);
        pctx.canvas.stroke_segment(pos, to);
        pos = to;
    });
    if let Some(on_end) = on_end {
        gesture = gesture.on_end_boxed(on_end);
    }

    ctx.gesture.track(gesture);
}
