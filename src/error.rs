//! Resource error types
//!
//! Only resource problems are errors. A rune the face cannot map is reported
//! through `GlyphMetrics::found` instead.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading fonts or reading and writing images.
#[derive(Error, Debug)]
pub enum Error {
    /// A file could not be read or created
    #[error("I/O error on `{}`: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The font bytes were rejected by the parser
    #[error("Failed to parse font: {0}")]
    FontParse(&'static str),

    /// The face has no horizontal line metrics
    #[error("Font has no horizontal line metrics")]
    MissingLineMetrics,

    /// No face matched the query
    #[error("No font matched the query")]
    FontNotFound,

    /// The face is registered but its data could not be loaded
    #[error("Font face {0:?} is not available")]
    FaceUnavailable(fontdb::ID),

    /// Point sizes must be finite and positive
    #[error("Invalid point size: {0}")]
    InvalidPointSize(f32),

    /// Decoding or encoding an image failed
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for shiori operations
pub type Result<T> = std::result::Result<T, Error>;
