//! Configuration file support for paintpad.
//!
//! Handles loading and validating user settings from
//! `~/.config/paintpad/config.toml`: initial surface size, drawing
//! defaults, and snapshot export settings. If no config file exists,
//! sensible defaults are used automatically.

pub mod types;

// Re-export commonly used types at module level
pub use types::{DrawingConfig, ExportConfig, SurfaceConfig};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::draw::{color, Color, MAX_DIMENSION};

/// Widest line width a config file may set, matching the largest
/// brush-size option.
const MAX_LINE_WIDTH: f32 = 100.0;

/// Main configuration structure containing all user settings.
///
/// # Example TOML
/// ```toml
/// [surface]
/// width = 500
/// height = 300
///
/// [drawing]
/// default_color = "#225588"
/// default_line_width = 3.0
/// brush_sizes = [1.0, 5.0, 25.0]
///
/// [export]
/// save_directory = "/tmp/paintpad"
/// filename_template = "paintpad_%Y-%m-%d_%H%M%S"
/// ```
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Initial surface dimensions
    #[serde(default)]
    pub surface: SurfaceConfig,

    /// Drawing defaults (color, line width, brush-size options)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Snapshot export settings
    #[serde(default)]
    pub export: ExportConfig,
}

impl Config {
    /// Loads configuration from the default location, falling back to
    /// defaults when the file does not exist.
    pub fn load() -> Result<Self> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => {
                log::debug!("No config file found; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let mut config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        config.validate_and_clamp();
        log::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The initial paint color, falling back to black when the configured
    /// hex string does not parse.
    pub fn default_color(&self) -> Color {
        match Color::parse_hex(&self.drawing.default_color) {
            Some(color) => color,
            None => {
                log::warn!(
                    "Invalid default_color '{}'; falling back to black",
                    self.drawing.default_color
                );
                color::BLACK
            }
        }
    }

    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a
    /// warning is logged.
    ///
    /// Validated ranges:
    /// - `surface.width` / `surface.height`: 1 - 8192
    /// - `drawing.default_line_width`: 1.0 - 100.0
    /// - `drawing.brush_sizes`: non-empty, each 1.0 - 100.0
    fn validate_and_clamp(&mut self) {
        if !(1..=MAX_DIMENSION).contains(&self.surface.width) {
            log::warn!(
                "Invalid surface width {}, clamping to 1-{MAX_DIMENSION}",
                self.surface.width
            );
            self.surface.width = self.surface.width.clamp(1, MAX_DIMENSION);
        }
        if !(1..=MAX_DIMENSION).contains(&self.surface.height) {
            log::warn!(
                "Invalid surface height {}, clamping to 1-{MAX_DIMENSION}",
                self.surface.height
            );
            self.surface.height = self.surface.height.clamp(1, MAX_DIMENSION);
        }

        if !(1.0..=MAX_LINE_WIDTH).contains(&self.drawing.default_line_width) {
            log::warn!(
                "Invalid default_line_width {:.1}, clamping to 1.0-{MAX_LINE_WIDTH}",
                self.drawing.default_line_width
            );
            self.drawing.default_line_width =
                self.drawing.default_line_width.clamp(1.0, MAX_LINE_WIDTH);
        }

        if self.drawing.brush_sizes.is_empty() {
            log::warn!("Empty brush_sizes list; restoring the default options");
            self.drawing.brush_sizes = types::default_brush_sizes();
        }
        for size in &mut self.drawing.brush_sizes {
            if !(1.0..=MAX_LINE_WIDTH).contains(size) {
                log::warn!("Invalid brush size {size:.1}, clamping to 1.0-{MAX_LINE_WIDTH}");
                *size = size.clamp(1.0, MAX_LINE_WIDTH);
            }
        }
    }
}

/// Path of the user's config file, if a config directory exists.
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("paintpad").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn defaults_match_the_stock_widget() {
        let config = Config::default();
        assert_eq!(config.surface.width, 500);
        assert_eq!(config.surface.height, 300);
        assert_eq!(config.drawing.default_line_width, 1.0);
        assert_eq!(config.default_color(), color::BLACK);
        assert_eq!(config.drawing.brush_sizes.len(), 11);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str("[surface]\nwidth = 64\n").unwrap();
        assert_eq!(config.surface.width, 64);
        assert_eq!(config.surface.height, 300);
        assert_eq!(config.drawing.default_color, "#000000");
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config: Config = toml::from_str(
            "[surface]\nwidth = 0\nheight = 100000\n\n[drawing]\ndefault_line_width = 500.0\nbrush_sizes = [0.5, 3.0, 900.0]\n",
        )
        .unwrap();
        config.validate_and_clamp();

        assert_eq!(config.surface.width, 1);
        assert_eq!(config.surface.height, MAX_DIMENSION);
        assert_eq!(config.drawing.default_line_width, MAX_LINE_WIDTH);
        assert_eq!(config.drawing.brush_sizes, vec![1.0, 3.0, MAX_LINE_WIDTH]);
    }

    #[test]
    fn invalid_color_falls_back_to_black() {
        let mut config = Config::default();
        config.drawing.default_color = "teal-ish".to_string();
        assert_eq!(config.default_color(), color::BLACK);
    }

    #[test]
    fn load_from_reads_and_clamps_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[drawing]\ndefault_line_width = 0.1").unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.drawing.default_line_width, 1.0);
    }

    #[test]
    fn load_from_rejects_malformed_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }
}
