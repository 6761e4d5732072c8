//! Configuration data structures.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Initial surface dimensions in pixels.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface width in pixels
    #[serde(default = "default_width")]
    pub width: u32,
    /// Surface height in pixels
    #[serde(default = "default_height")]
    pub height: u32,
}

fn default_width() -> u32 {
    500
}

fn default_height() -> u32 {
    300
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
        }
    }
}

/// Drawing defaults applied when the widget is constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DrawingConfig {
    /// Initial stroke/fill color as a `#rrggbb` hex string
    #[serde(default = "default_color")]
    pub default_color: String,
    /// Initial line width in pixels
    #[serde(default = "default_line_width")]
    pub default_line_width: f32,
    /// Options offered by the brush-size control, in pixels
    #[serde(default = "default_brush_sizes")]
    pub brush_sizes: Vec<f32>,
}

fn default_color() -> String {
    "#000000".to_string()
}

fn default_line_width() -> f32 {
    1.0
}

pub(crate) fn default_brush_sizes() -> Vec<f32> {
    vec![1.0, 2.0, 3.0, 5.0, 8.0, 12.0, 25.0, 35.0, 50.0, 75.0, 100.0]
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_line_width: default_line_width(),
            brush_sizes: default_brush_sizes(),
        }
    }
}

/// Where and how snapshots are saved by default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory snapshots are saved to
    #[serde(default = "default_save_directory")]
    pub save_directory: PathBuf,
    /// Filename template (supports chrono format specifiers)
    #[serde(default = "default_filename_template")]
    pub filename_template: String,
}

fn default_save_directory() -> PathBuf {
    dirs::picture_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("paintpad")
}

fn default_filename_template() -> String {
    "paintpad_%Y-%m-%d_%H%M%S".to_string()
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            save_directory: default_save_directory(),
            filename_template: default_filename_template(),
        }
    }
}
