//! MD2 model header reader.
//!
//! MD2 (`IDP2`, version 8) models start with a fixed 68-byte header: the magic,
//! the version, then fifteen little-endian `i32` fields holding the skin size,
//! element counts and section offsets. This crate reads and validates that
//! header and nothing past it.
//!
//! # Example
//!
//! ```no_run
//! use baseq2_md2::read_summary;
//!
//! let summary = read_summary("models/items/healing/stimpack/tris.md2")?;
//! println!("{} triangles over {} frames", summary.num_tris, summary.num_frames);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod error;
mod header;
mod summary;

use std::fs::File;
use std::io::Read;
use std::path::Path;

pub use error::{Error, Result};
pub use header::Md2Header;
pub use summary::Md2Summary;

/// Read and validate the header of an MD2 file.
///
/// At most [`Md2Header::SIZE`] bytes are read from the file.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<Md2Header> {
    let mut data = Vec::with_capacity(Md2Header::SIZE);
    File::open(path)?
        .take(Md2Header::SIZE as u64)
        .read_to_end(&mut data)?;

    Md2Header::parse(&data)
}

/// Read the header of an MD2 file and reduce it to its summary.
pub fn read_summary<P: AsRef<Path>>(path: P) -> Result<Md2Summary> {
    read_header(path).map(|header| header.summary())
}
