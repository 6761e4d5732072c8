//! Import/export collaborators for the drawing surface.
//!
//! Import replaces the canvas contents with decoded image data (files,
//! data URLs, host-fetched bytes); export produces PNG snapshots as
//! bytes, data URLs, or files on disk.

pub mod export;
pub mod import;

// Re-export commonly used types at module level
pub use export::ExportError;
pub use import::{ImageOrigin, ImportError};
