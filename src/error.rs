//! Error types for icon generation

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for icon operations
pub type Result<T> = std::result::Result<T, IconError>;

#[derive(Error, Debug)]
pub enum IconError {
    /// Requested icon size cannot be used as a pixel dimension
    #[error("icon size must be between 1 and {max} pixels, got {size}")]
    InvalidSize { size: u32, max: u32 },

    /// Output directory could not be created
    #[error("failed to create directory {}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// PNG encoder rejected the canvas
    #[error("failed to encode {size}x{size} icon as PNG")]
    Encode {
        size: u32,
        #[source]
        source: image::ImageError,
    },

    /// Writing the PNG to disk failed
    #[error("failed to write {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
