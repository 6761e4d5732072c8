//! Image import: replaces the canvas contents with decoded image data.

use std::fs;
use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use thiserror::Error;
use url::Url;

use crate::draw::Canvas;

/// Where imported image data came from, for the taint decision.
///
/// Cross-origin pixels taint the canvas: it keeps accepting drawing but
/// refuses to export. Data URLs and local files are same-origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    SameOrigin,
    CrossOrigin,
}

/// Errors that can occur while importing an image.
///
/// Callers that implement the best-effort controls log these and move
/// on; nothing here is fatal to the surface.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("Failed to decode image data: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Failed to read image file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed data URL")]
    MalformedDataUrl,

    #[error("Cannot load image from '{0}' without a host fetch")]
    UnsupportedUrl(String),
}

/// Decodes image bytes and replaces the canvas contents with them.
///
/// On success the canvas is resized to the image dimensions, the image
/// is drawn at the origin, and the previously-set stroke/fill color and
/// line width are restored across the resize (which reinitializes paint
/// state). Cross-origin data additionally taints the canvas.
pub fn load_from_bytes(
    canvas: &mut Canvas,
    bytes: &[u8],
    origin: ImageOrigin,
) -> Result<(), ImportError> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let (width, height) = (decoded.width(), decoded.height());

    let stroke = canvas.stroke_color();
    let fill = canvas.fill_color();
    let line_width = canvas.line_width();

    canvas.reset_for_size(width, height);
    canvas.draw_rgba_image(width, height, decoded.as_raw());

    canvas.set_stroke_color(stroke);
    canvas.set_fill_color(fill);
    canvas.set_line_width(line_width);

    if origin == ImageOrigin::CrossOrigin {
        canvas.mark_tainted();
    }

    log::debug!("Imported {width}x{height} image ({origin:?})");
    Ok(())
}

/// Loads an image from a `data:` URL.
///
/// Base64 payloads are decoded; a payload without the `;base64` marker
/// is taken as raw bytes.
pub fn load_data_url(canvas: &mut Canvas, url: &str) -> Result<(), ImportError> {
    let payload = url
        .strip_prefix("data:")
        .ok_or_else(|| ImportError::UnsupportedUrl(url.to_string()))?;
    let (metadata, data) = payload
        .split_once(',')
        .ok_or(ImportError::MalformedDataUrl)?;

    let bytes = if metadata.ends_with(";base64") {
        STANDARD
            .decode(data)
            .map_err(|_| ImportError::MalformedDataUrl)?
    } else {
        data.as_bytes().to_vec()
    };

    load_from_bytes(canvas, &bytes, ImageOrigin::SameOrigin)
}

/// Loads an image file from disk.
pub fn load_file(canvas: &mut Canvas, path: &Path) -> Result<(), ImportError> {
    let bytes = fs::read(path)?;
    load_from_bytes(canvas, &bytes, ImageOrigin::SameOrigin)
}

/// Loads an image from URL-shaped input: `data:` URLs and `file:` URLs
/// are handled here, and anything that does not parse as an absolute URL
/// is tried as a local path.
///
/// Remote schemes cannot be fetched by the widget core; the host fetches
/// the bytes itself and hands them to [`receive_remote`].
pub fn load_url(canvas: &mut Canvas, input: &str) -> Result<(), ImportError> {
    match Url::parse(input) {
        Ok(parsed) if parsed.scheme() == "data" => load_data_url(canvas, input),
        Ok(parsed) if parsed.scheme() == "file" => {
            let path = parsed
                .to_file_path()
                .map_err(|_| ImportError::UnsupportedUrl(input.to_string()))?;
            load_file(canvas, &path)
        }
        Ok(_) => Err(ImportError::UnsupportedUrl(input.to_string())),
        // Not an absolute URL; treat it as a local path.
        Err(_) => load_file(canvas, Path::new(input)),
    }
}

/// Accepts image bytes a host fetched from a remote URL. Remote data is
/// cross-origin and taints the canvas.
pub fn receive_remote(canvas: &mut Canvas, bytes: &[u8]) -> Result<(), ImportError> {
    load_from_bytes(canvas, bytes, ImageOrigin::CrossOrigin)
}
