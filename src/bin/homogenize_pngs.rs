//! homogenize-pngs - normalize PNG skins in bulk.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{ArgAction, Parser};

use baseq2::prelude::*;

/// Exit status for invalid arguments, matching clap's own usage errors.
const EXIT_USAGE: u8 = 2;

/// Resize PNG skins to 256x256, apply gamma and a multiply tint, and black out
/// fully transparent texels
#[derive(Parser)]
#[command(name = "homogenize-pngs")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory searched recursively for .png files
    root: PathBuf,

    /// Write into a mirrored tree instead (requires --in-place=false)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Rewrite files in place
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true"
    )]
    in_place: bool,

    /// Keep each original as <name><suffix> when rewriting in place
    #[arg(long)]
    backup_suffix: Option<String>,

    /// Gamma exponent applied to RGB
    #[arg(long, env = "HOMOGENIZE_GAMMA", default_value_t = DEFAULT_GAMMA)]
    gamma: f64,

    /// Multiply tint as #RRGGBB
    #[arg(long, env = "HOMOGENIZE_MULTIPLY", default_value = "#046000")]
    multiply: Tint,

    /// Only print source -> destination
    #[arg(long)]
    dry_run: bool,

    /// Replace existing outputs and ignore existing backups
    #[arg(long)]
    overwrite: bool,
}

impl From<Cli> for JobConfig {
    fn from(cli: Cli) -> Self {
        Self {
            root: cli.root,
            out: cli.out,
            in_place: cli.in_place,
            backup_suffix: cli.backup_suffix,
            gamma: cli.gamma,
            multiply: cli.multiply,
            dry_run: cli.dry_run,
            overwrite: cli.overwrite,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = JobConfig::from(Cli::parse());
    let root = config.root.clone();

    let job = match config.resolve() {
        Ok(job) => job,
        Err(e) => {
            tracing::error!("{}", e);
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let report = job.run();

    for (source, destination) in report.planned() {
        println!("{} -> {}", source.display(), destination.display());
    }

    if report.is_empty() {
        tracing::error!("No PNGs found under {}", root.display());
    }

    ExitCode::from(report.exit_code())
}
