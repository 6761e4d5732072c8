//! Erase tool: the line tool's stroking with punch-through compositing.

use crate::draw::CompositeOperation;
use crate::input::{PaintCtx, PointerEvent};

use super::line::track_segments;
use super::ToolCtx;

/// Erases along the pointer path.
///
/// Reuses the line tool's per-segment stroking, with the composite
/// operation swapped to destination-out so new strokes remove existing
/// pixels instead of painting over them. The end callback restores
/// source-over unconditionally - it runs on every gesture exit path, so
/// punch-through mode can never leak into the next gesture.
pub fn erase(event: &PointerEvent, ctx: &mut ToolCtx<'_>) {
    ctx.canvas
        .set_composite_operation(CompositeOperation::DestinationOut);

    track_segments(
        event,
        ctx,
        Some(Box::new(|_event: &PointerEvent, pctx: &mut PaintCtx<'_>| {
            pctx.canvas
                .set_composite_operation(CompositeOperation::SourceOver);
        })),
    );
}
