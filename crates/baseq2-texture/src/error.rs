//! Error types for texture normalization.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when configuring or running a normalization job.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image decoding or encoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// The root is missing or not a directory.
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// In-place mode and an explicit output directory were both requested.
    #[error("use either --in-place or --out, not both")]
    ConflictingOutput,

    /// No default output directory can be derived from the root.
    #[error("cannot derive an output directory next to {}; pass --out", .0.display())]
    NoOutputRoot(PathBuf),

    /// Gamma must be a finite number greater than zero.
    #[error("gamma must be > 0, got {0}")]
    InvalidGamma(f64),

    /// Malformed `#RRGGBB` color.
    #[error("expected 6-digit hex color like #046000, got {0:?}")]
    InvalidColor(String),
}

impl Error {
    /// Whether the error rejects the job configuration itself, before any file
    /// is touched.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::RootNotFound(_)
                | Error::ConflictingOutput
                | Error::NoOutputRoot(_)
                | Error::InvalidGamma(_)
                | Error::InvalidColor(_)
        )
    }
}

/// Result type for texture operations.
pub type Result<T> = std::result::Result<T, Error>;
