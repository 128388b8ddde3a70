//! md2info - print header summaries of MD2 models.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use baseq2::prelude::*;

/// Print the skin size and element counts of MD2 models
#[derive(Parser)]
#[command(name = "md2info")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// MD2 files to inspect
    #[arg(required = true)]
    paths: Vec<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    for path in &cli.paths {
        tracing::debug!("Reading {}", path.display());
        let summary = read_summary(path)
            .with_context(|| format!("Failed to read MD2 header: {}", path.display()))?;
        println!("{} {}", path.display(), summary);
    }

    Ok(())
}
