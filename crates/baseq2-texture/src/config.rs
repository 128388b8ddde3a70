//! Job configuration and validation.

use std::fs;
use std::path::{Path, PathBuf};

use crate::color::Tint;
use crate::job::Job;
use crate::process::Homogenizer;
use crate::{Error, Result};

/// Gamma applied when none is given.
pub const DEFAULT_GAMMA: f64 = 0.89;

/// Suffix of the sibling directory used when writing out of place without `--out`.
pub const DEFAULT_OUTPUT_SUFFIX: &str = "_homogenized";

/// Raw options for a normalization job, as collected from the command line.
#[derive(Debug, Clone)]
pub struct JobConfig {
    /// Directory searched recursively for `.png` files.
    pub root: PathBuf,
    /// Mirror output root. Not allowed together with `in_place`.
    pub out: Option<PathBuf>,
    /// Rewrite the source files themselves.
    pub in_place: bool,
    /// Move each original to `<name><suffix>` before rewriting it in place.
    pub backup_suffix: Option<String>,
    pub gamma: f64,
    pub multiply: Tint,
    /// Only report what would be written.
    pub dry_run: bool,
    /// Replace existing outputs and ignore existing backups.
    pub overwrite: bool,
}

impl JobConfig {
    /// Defaults for everything but the root.
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self {
            root: root.into(),
            out: None,
            in_place: true,
            backup_suffix: None,
            gamma: DEFAULT_GAMMA,
            multiply: Tint::DEFAULT,
            dry_run: false,
            overwrite: false,
        }
    }

    /// Validate the options and build a runnable job.
    ///
    /// Nothing on disk is modified here; every returned error is fatal.
    pub fn resolve(self) -> Result<Job> {
        if !self.root.is_dir() {
            return Err(Error::RootNotFound(self.root));
        }

        if self.in_place && self.out.is_some() {
            return Err(Error::ConflictingOutput);
        }

        if !self.gamma.is_finite() || self.gamma <= 0.0 {
            return Err(Error::InvalidGamma(self.gamma));
        }

        let destination = if self.in_place {
            Destination::InPlace {
                backup_suffix: self.backup_suffix.filter(|suffix| !suffix.is_empty()),
            }
        } else {
            match self.out {
                Some(out) => Destination::Mirror(out),
                None => Destination::Mirror(default_output_root(&self.root)?),
            }
        };

        Ok(Job::new(
            self.root,
            destination,
            Homogenizer::new(self.gamma, self.multiply),
            self.dry_run,
            self.overwrite,
        ))
    }
}

/// Where processed images are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Over the source file, optionally keeping a backup.
    InPlace { backup_suffix: Option<String> },
    /// Under a separate root, mirroring the relative layout.
    Mirror(PathBuf),
}

impl Destination {
    pub fn is_in_place(&self) -> bool {
        matches!(self, Destination::InPlace { .. })
    }
}

/// `<parent>/<root-name>_homogenized`.
fn default_output_root(root: &Path) -> Result<PathBuf> {
    let root = match root.file_name() {
        Some(_) => root.to_path_buf(),
        None => fs::canonicalize(root)?,
    };

    let Some(name) = root.file_name() else {
        return Err(Error::NoOutputRoot(root));
    };

    let mut sibling = name.to_os_string();
    sibling.push(DEFAULT_OUTPUT_SUFFIX);
    Ok(root.with_file_name(sibling))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let err = JobConfig::new(dir.path().join("nope")).resolve().unwrap_err();

        assert!(matches!(err, Error::RootNotFound(_)));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_file_root_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("skin.png");
        fs::write(&file, b"not a dir").unwrap();

        assert!(matches!(JobConfig::new(file).resolve(), Err(Error::RootNotFound(_))));
    }

    #[test]
    fn test_in_place_and_out_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = JobConfig::new(dir.path());
        config.out = Some(dir.path().join("out"));

        let err = config.resolve().unwrap_err();
        assert!(matches!(err, Error::ConflictingOutput));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_root_checked_before_conflict() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = JobConfig::new(dir.path().join("nope"));
        config.out = Some(dir.path().join("out"));

        assert!(matches!(config.resolve(), Err(Error::RootNotFound(_))));
    }

    #[test]
    fn test_non_positive_gamma_rejected() {
        let dir = tempfile::tempdir().unwrap();

        for gamma in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let mut config = JobConfig::new(dir.path());
            config.gamma = gamma;
            assert!(matches!(config.resolve(), Err(Error::InvalidGamma(_))));
        }
    }

    #[test]
    fn test_defaults_are_in_place_without_backup() {
        let dir = tempfile::tempdir().unwrap();
        let job = JobConfig::new(dir.path()).resolve().unwrap();

        assert_eq!(job.destination(), &Destination::InPlace { backup_suffix: None });
        assert!(job.homogenizer().gamma_lut().is_some());
        assert_eq!(job.homogenizer().tint(), Tint::DEFAULT);
    }

    #[test]
    fn test_empty_backup_suffix_means_none() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = JobConfig::new(dir.path());
        config.backup_suffix = Some(String::new());

        let job = config.resolve().unwrap();
        assert_eq!(job.destination(), &Destination::InPlace { backup_suffix: None });
    }

    #[test]
    fn test_explicit_out_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = JobConfig::new(dir.path());
        config.in_place = false;
        config.out = Some(dir.path().join("out"));

        let job = config.resolve().unwrap();
        assert_eq!(job.destination(), &Destination::Mirror(dir.path().join("out")));
    }

    #[test]
    fn test_default_out_root_is_sibling() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("skins");
        fs::create_dir(&root).unwrap();

        let mut config = JobConfig::new(&root);
        config.in_place = false;

        let job = config.resolve().unwrap();
        assert_eq!(
            job.destination(),
            &Destination::Mirror(dir.path().join("skins_homogenized"))
        );
    }
}
