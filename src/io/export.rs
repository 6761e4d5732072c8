//! Snapshot export: PNG encoding, data URLs, and file saving.

use std::fs;
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use chrono::Local;
use thiserror::Error;

use crate::draw::Canvas;

/// Errors that can occur while exporting a snapshot.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The canvas holds cross-origin image data. The save control
    /// recognizes this kind and substitutes a user-visible message; every
    /// other kind is re-raised unchanged.
    #[error("Can't save: the canvas contains cross-origin image data")]
    Tainted,

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    #[error("Failed to write snapshot: {0}")]
    Io(#[from] std::io::Error),
}

/// Encodes the current canvas pixels as PNG.
pub fn encode_png(canvas: &Canvas) -> Result<Vec<u8>, ExportError> {
    if canvas.is_tainted() {
        return Err(ExportError::Tainted);
    }
    canvas
        .pixmap()
        .encode_png()
        .map_err(|err| ExportError::Encode(err.to_string()))
}

/// Produces a `data:image/png;base64,...` snapshot URL of the current
/// canvas pixels.
pub fn to_data_url(canvas: &Canvas) -> Result<String, ExportError> {
    let png = encode_png(canvas)?;
    Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
}

/// Writes a PNG snapshot to an explicit path.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), ExportError> {
    let png = encode_png(canvas)?;
    fs::write(path, &png)?;
    log::info!("Snapshot saved to {} ({} bytes)", path.display(), png.len());
    Ok(())
}

/// Saves a PNG snapshot into `directory` under a templated filename.
///
/// # Arguments
/// * `directory` - Destination directory, created if missing
/// * `filename_template` - chrono format string for the base name
///
/// # Returns
/// The path the snapshot was written to.
pub fn save_snapshot(
    canvas: &Canvas,
    directory: &Path,
    filename_template: &str,
) -> Result<PathBuf, ExportError> {
    if !directory.exists() {
        log::info!("Creating snapshot directory: {}", directory.display());
        fs::create_dir_all(directory)?;
    }

    let path = directory.join(generate_filename(filename_template));
    save_png(canvas, &path)?;
    Ok(path)
}

/// Generates a `.png` filename from a chrono format template and the
/// current local time.
pub fn generate_filename(template: &str) -> String {
    format!("{}.png", Local::now().format(template))
}
