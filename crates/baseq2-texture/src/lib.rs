//! Batch normalization of PNG skins.
//!
//! Every `.png` under a root directory is resized to 256x256, gamma-adjusted,
//! multiplied by a tint color and masked so that fully transparent texels end
//! up black. Alpha is preserved. Results are written over the sources
//! (optionally keeping a backup) or into a mirrored output tree.
//!
//! # Example
//!
//! ```no_run
//! use baseq2_texture::JobConfig;
//!
//! let mut config = JobConfig::new("baseq2/models");
//! config.backup_suffix = Some(".orig".to_string());
//!
//! let report = config.resolve()?.run();
//! println!("{} written, {} failed", report.written(), report.failed());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod color;
mod config;
mod error;
mod gamma;
mod job;

pub mod process;

pub use color::Tint;
pub use config::{Destination, JobConfig, DEFAULT_GAMMA, DEFAULT_OUTPUT_SUFFIX};
pub use error::{Error, Result};
pub use gamma::GammaLut;
pub use job::{backup_path, find_pngs, is_png, FileReport, Job, JobReport, Outcome, PngFile};
pub use process::{Homogenizer, TARGET_SIZE};
