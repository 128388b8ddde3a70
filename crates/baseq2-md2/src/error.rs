//! Error types for MD2 header reading.

use thiserror::Error;

/// Errors that can occur when reading an MD2 header.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data is not a recognized MD2 file (short header, bad ident or version).
    #[error("not an MD2 (IDP2 v8) file: {0}")]
    NotMd2(String),
}

impl Error {
    /// Whether this is a format rejection rather than an I/O failure.
    pub fn is_format_error(&self) -> bool {
        matches!(self, Error::NotMd2(_))
    }
}

/// Result type for MD2 operations.
pub type Result<T> = std::result::Result<T, Error>;
