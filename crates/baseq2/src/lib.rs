//! baseq2 - asset tooling for the baseq2 game directory.
//!
//! This crate provides a unified interface to the two tool libraries.
//!
//! # Crates
//!
//! - [`baseq2_md2`] - MD2 (`IDP2` v8) model header reading
//! - [`baseq2_texture`] - PNG skin normalization (resize, gamma, tint, alpha mask)
//!
//! # Example
//!
//! ```no_run
//! use baseq2::prelude::*;
//!
//! let summary = read_summary("models/items/healing/stimpack/tris.md2")?;
//! println!("skin {}x{}", summary.skin.0, summary.skin.1);
//!
//! let report = JobConfig::new("models/items/healing/stimpack").resolve()?.run();
//! println!("{} skins rewritten", report.written());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use baseq2_md2 as md2;
pub use baseq2_texture as texture;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use baseq2_md2::{read_header, read_summary, Md2Header, Md2Summary};
    pub use baseq2_texture::{
        Destination, Homogenizer, Job, JobConfig, JobReport, Outcome, Tint, DEFAULT_GAMMA,
    };
}

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
