//! The drawing surface: a pixel buffer plus the mutable paint state
//! shared by every tool and control invocation.

use crate::input::Position;
use tiny_skia::{
    BlendMode, FillRule, LineCap, Paint, PathBuilder, Pixmap, PixmapPaint, Rect, Stroke, Transform,
};

use super::color::{self, Color};

/// Largest accepted surface dimension, in pixels.
///
/// Dimensions are clamped on construction and resize so that pixel buffer
/// allocation cannot fail for any value a config file or an imported image
/// can produce.
pub const MAX_DIMENSION: u32 = 8192;

/// Pixel-blending rule applied when drawing onto existing content.
///
/// Mirrors the two composite operations the widget actually uses: normal
/// painting and the erase tool's punch-through mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompositeOperation {
    /// Paint over existing pixels (the default).
    #[default]
    SourceOver,
    /// Punch through existing pixels: new coverage removes old content.
    DestinationOut,
}

impl CompositeOperation {
    fn blend_mode(self) -> BlendMode {
        match self {
            CompositeOperation::SourceOver => BlendMode::SourceOver,
            CompositeOperation::DestinationOut => BlendMode::DestinationOut,
        }
    }
}

/// End-of-stroke cap style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrokeCap {
    /// Flat end exactly at the segment endpoint (the default).
    #[default]
    Butt,
    /// Semicircular end centered on the segment endpoint.
    Round,
}

impl StrokeCap {
    fn line_cap(self) -> LineCap {
        match self {
            StrokeCap::Butt => LineCap::Butt,
            StrokeCap::Round => LineCap::Round,
        }
    }
}

/// The drawing context: one pixel buffer plus mutable paint state.
///
/// There is exactly one canvas per surface and its lifetime equals the
/// surface's. Tools and controls receive it by mutable reference and read
/// or update the paint state directly; the single-threaded event loop
/// makes that safe without locking.
pub struct Canvas {
    pixmap: Pixmap,
    stroke_color: Color,
    fill_color: Color,
    line_width: f32,
    stroke_cap: StrokeCap,
    composite: CompositeOperation,
    /// Set when cross-origin image data was drawn into the buffer.
    /// A tainted canvas refuses to export its pixels.
    tainted: bool,
}

impl Canvas {
    /// Creates a transparent canvas of the given size.
    ///
    /// Dimensions are clamped to `1..=MAX_DIMENSION`.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            pixmap: Self::allocate(width, height),
            stroke_color: color::BLACK,
            fill_color: color::BLACK,
            line_width: 1.0,
            stroke_cap: StrokeCap::default(),
            composite: CompositeOperation::default(),
            tainted: false,
        }
    }

    fn allocate(width: u32, height: u32) -> Pixmap {
        let width = width.clamp(1, MAX_DIMENSION);
        let height = height.clamp(1, MAX_DIMENSION);
        // Cannot fail for clamped, non-zero dimensions.
        Pixmap::new(width, height).expect("clamped dimensions fit a pixmap")
    }

    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    // ------------------------------------------------------------------
    // Paint state
    // ------------------------------------------------------------------

    pub fn stroke_color(&self) -> Color {
        self.stroke_color
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    pub fn fill_color(&self) -> Color {
        self.fill_color
    }

    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    pub fn line_width(&self) -> f32 {
        self.line_width
    }

    /// Sets the stroke width in pixels. Non-positive widths are lifted to
    /// a hairline so a degenerate config value cannot make strokes vanish.
    pub fn set_line_width(&mut self, width: f32) {
        if width <= 0.0 {
            log::warn!("Ignoring non-positive line width {width}; using 1.0");
            self.line_width = 1.0;
        } else {
            self.line_width = width;
        }
    }

    pub fn stroke_cap(&self) -> StrokeCap {
        self.stroke_cap
    }

    pub fn set_stroke_cap(&mut self, cap: StrokeCap) {
        self.stroke_cap = cap;
    }

    pub fn composite_operation(&self) -> CompositeOperation {
        self.composite
    }

    pub fn set_composite_operation(&mut self, op: CompositeOperation) {
        self.composite = op;
    }

    pub fn is_tainted(&self) -> bool {
        self.tainted
    }

    /// Marks the canvas as holding cross-origin pixels.
    pub fn mark_tainted(&mut self) {
        self.tainted = true;
    }

    // ------------------------------------------------------------------
    // Drawing operations
    // ------------------------------------------------------------------

    /// Strokes one line segment with the current stroke color, width, cap
    /// style, and composite operation.
    ///
    /// Per-segment stroking (rather than accumulating one long path) is
    /// what lets color and width changes mid-gesture take effect on the
    /// very next segment.
    pub fn stroke_segment(&mut self, from: Position, to: Position) {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x as f32, from.y as f32);
        pb.line_to(to.x as f32, to.y as f32);
        let Some(path) = pb.finish() else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(self.stroke_color.to_skia());
        paint.anti_alias = true;
        paint.blend_mode = self.composite.blend_mode();

        let stroke = Stroke {
            width: self.line_width,
            line_cap: self.stroke_cap.line_cap(),
            ..Stroke::default()
        };

        self.pixmap
            .stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    /// Fills a single 1x1 pixel dot at the given (possibly fractional)
    /// surface coordinates with the current fill color.
    pub fn fill_dot(&mut self, x: f32, y: f32) {
        let Some(rect) = Rect::from_xywh(x, y, 1.0, 1.0) else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(self.fill_color.to_skia());
        paint.blend_mode = self.composite.blend_mode();

        self.pixmap
            .fill_rect(rect, &paint, Transform::identity(), None);
    }

    /// Fills a disk centered on `center` with the current fill color.
    pub fn fill_disk(&mut self, center: Position, radius: f32) {
        let Some(path) = PathBuilder::from_circle(center.x as f32, center.y as f32, radius.max(0.5))
        else {
            return;
        };

        let mut paint = Paint::default();
        paint.set_color(self.fill_color.to_skia());
        paint.anti_alias = true;
        paint.blend_mode = self.composite.blend_mode();

        self.pixmap
            .fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
    }

    // ------------------------------------------------------------------
    // Buffer replacement (image import)
    // ------------------------------------------------------------------

    /// Replaces the pixel buffer with a fresh transparent one of the given
    /// size and reinitializes all paint state to defaults, mirroring how a
    /// raster surface resets when its backing store is reallocated.
    ///
    /// Callers that need to keep color or width across a resize must save
    /// and restore them explicitly (the image importer does).
    pub fn reset_for_size(&mut self, width: u32, height: u32) {
        *self = Self::new(width, height);
    }

    /// Draws decoded RGBA8 image data (straight alpha, row-major) at the
    /// origin. Pixels outside the canvas are clipped.
    pub fn draw_rgba_image(&mut self, width: u32, height: u32, rgba: &[u8]) {
        let Some(source) = pixmap_from_rgba(width, height, rgba) else {
            log::warn!("Ignoring image data with mismatched dimensions {width}x{height}");
            return;
        };

        self.pixmap.draw_pixmap(
            0,
            0,
            source.as_ref(),
            &PixmapPaint::default(),
            Transform::identity(),
            None,
        );
    }

    // ------------------------------------------------------------------
    // Pixel access
    // ------------------------------------------------------------------

    /// Returns the premultiplied pixel at (x, y), or `None` outside the
    /// canvas bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<tiny_skia::PremultipliedColorU8> {
        self.pixmap.pixel(x, y)
    }

    /// True if no pixel has non-zero coverage.
    pub fn is_blank(&self) -> bool {
        self.pixmap.pixels().iter().all(|p| p.alpha() == 0)
    }

    pub(crate) fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

fn pixmap_from_rgba(width: u32, height: u32, rgba: &[u8]) -> Option<Pixmap> {
    let expected = (width as usize)
        .checked_mul(height as usize)?
        .checked_mul(4)?;
    if width == 0 || height == 0 || rgba.len() != expected {
        return None;
    }

    let mut pixmap = Pixmap::new(width, height)?;
    for (dst, src) in pixmap.pixels_mut().iter_mut().zip(rgba.chunks_exact(4)) {
        *dst = tiny_skia::ColorU8::from_rgba(src[0], src[1], src[2], src[3]).premultiply();
    }
    Some(pixmap)
}
