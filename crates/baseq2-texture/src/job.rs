//! Batch processing over a directory tree.

use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};

use image::ImageFormat;
use tracing::{debug, error, info, warn};
use walkdir::WalkDir;

use crate::config::Destination;
use crate::process::Homogenizer;
use crate::Result;

/// A `.png` file found under the job root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PngFile {
    /// Full path, starting with the root.
    pub source: PathBuf,
    /// Path relative to the root.
    pub relative: PathBuf,
}

/// What happened to one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Dry run: would have been written.
    Planned,
    Written,
    /// The mirror output already exists and overwriting was not requested.
    SkippedExisting,
    /// The in-place backup already exists and overwriting was not requested.
    SkippedBackupExists(PathBuf),
    /// Open, process or save failed.
    Failed(String),
}

/// Result for a single source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub source: PathBuf,
    pub destination: PathBuf,
    pub outcome: Outcome,
}

/// Results of a whole job, in processing order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobReport {
    pub files: Vec<FileReport>,
}

impl JobReport {
    /// Exit status when no `.png` file was found.
    pub const EXIT_NO_FILES: u8 = 1;

    /// True when the traversal matched no file at all.
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn written(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Written))
    }

    pub fn skipped(&self) -> usize {
        self.count(|o| matches!(o, Outcome::SkippedExisting | Outcome::SkippedBackupExists(_)))
    }

    pub fn failed(&self) -> usize {
        self.count(|o| matches!(o, Outcome::Failed(_)))
    }

    /// Dry-run `(source, destination)` pairs.
    pub fn planned(&self) -> impl Iterator<Item = (&Path, &Path)> {
        self.files
            .iter()
            .filter(|f| f.outcome == Outcome::Planned)
            .map(|f| (f.source.as_path(), f.destination.as_path()))
    }

    /// 0 on success, including per-file failures; 1 if nothing matched.
    pub fn exit_code(&self) -> u8 {
        if self.is_empty() {
            Self::EXIT_NO_FILES
        } else {
            0
        }
    }

    fn count(&self, predicate: impl Fn(&Outcome) -> bool) -> usize {
        self.files.iter().filter(|f| predicate(&f.outcome)).count()
    }
}

/// A validated normalization job. Built by [`JobConfig::resolve`](crate::JobConfig::resolve).
#[derive(Debug, Clone)]
pub struct Job {
    root: PathBuf,
    destination: Destination,
    homogenizer: Homogenizer,
    dry_run: bool,
    overwrite: bool,
}

impl Job {
    pub(crate) fn new(
        root: PathBuf,
        destination: Destination,
        homogenizer: Homogenizer,
        dry_run: bool,
        overwrite: bool,
    ) -> Self {
        Self {
            root,
            destination,
            homogenizer,
            dry_run,
            overwrite,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn destination(&self) -> &Destination {
        &self.destination
    }

    pub fn homogenizer(&self) -> &Homogenizer {
        &self.homogenizer
    }

    /// Where `file` is written.
    pub fn destination_for(&self, file: &PngFile) -> PathBuf {
        match &self.destination {
            Destination::InPlace { .. } => file.source.clone(),
            Destination::Mirror(out) => out.join(&file.relative),
        }
    }

    /// Find every file under the root and process them one after another.
    ///
    /// The file list is collected up front, so files written during the run
    /// are never picked up. Per-file failures are logged and recorded in the
    /// report; they never abort the batch.
    pub fn run(&self) -> JobReport {
        let mirror_root = match &self.destination {
            Destination::Mirror(out) => Some(out.as_path()),
            Destination::InPlace { .. } => None,
        };
        let files = find_pngs(&self.root, mirror_root);

        if files.is_empty() {
            return JobReport::default();
        }

        info!("Found {} PNGs under {}", files.len(), self.root.display());

        let report = JobReport {
            files: files.iter().map(|file| self.process_file(file)).collect(),
        };

        if !self.dry_run {
            info!(
                "{} written, {} skipped, {} failed",
                report.written(),
                report.skipped(),
                report.failed()
            );
        }

        report
    }

    fn process_file(&self, file: &PngFile) -> FileReport {
        let destination = self.destination_for(file);

        let outcome = if !self.overwrite && !self.destination.is_in_place() && destination.exists() {
            debug!("Output exists, skipping: {}", destination.display());
            Outcome::SkippedExisting
        } else if self.dry_run {
            Outcome::Planned
        } else {
            match self.write(&file.source, &destination) {
                Ok(outcome) => outcome,
                Err(e) => {
                    error!("Failed: {} ({})", file.source.display(), e);
                    Outcome::Failed(e.to_string())
                }
            }
        };

        FileReport {
            source: file.source.clone(),
            destination,
            outcome,
        }
    }

    fn write(&self, source: &Path, destination: &Path) -> Result<Outcome> {
        let backup = match &self.destination {
            Destination::InPlace {
                backup_suffix: Some(suffix),
            } => Some(backup_path(source, suffix)),
            _ => None,
        };

        if let Some(backup) = &backup {
            if backup.exists() && !self.overwrite {
                warn!(
                    "Backup exists, skipping (use --overwrite to force): {}",
                    backup.display()
                );
                return Ok(Outcome::SkippedBackupExists(backup.clone()));
            }
        }

        let output = self.homogenizer.apply(image::open(source)?);

        if let Some(parent) = destination.parent() {
            fs::create_dir_all(parent)?;
        }

        // An existing backup is the pristine original, so it is never replaced.
        if let Some(backup) = backup.filter(|b| !b.exists()) {
            fs::rename(source, &backup)?;
        }

        output.save_with_format(destination, ImageFormat::Png)?;
        debug!("Wrote {}", destination.display());

        Ok(Outcome::Written)
    }
}

/// `<file name><suffix>` next to `source`.
pub fn backup_path(source: &Path, suffix: &str) -> PathBuf {
    let mut name = source.file_name().unwrap_or_default().to_os_string();
    name.push(suffix);
    source.with_file_name(name)
}

/// Case-insensitive `.png` extension check.
pub fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Recursively collect `.png` files under `root`, sorted by name per directory.
///
/// `skip` names a directory that is not descended into, such as a mirror
/// output root nested inside `root`. Unreadable entries are logged and ignored.
pub fn find_pngs(root: &Path, skip: Option<&Path>) -> Vec<PngFile> {
    WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || skip != Some(entry.path()))
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| is_png(entry.path()) && entry.path().is_file())
        .filter_map(|entry| {
            let relative = entry.path().strip_prefix(root).ok()?.to_path_buf();
            Some(PngFile {
                source: entry.into_path(),
                relative,
            })
        })
        .collect()
}
