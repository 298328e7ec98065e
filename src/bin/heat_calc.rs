//! Runs a heat transfer case file and prints a summary.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use twine_heat::case::CaseFile;

/// Conduction and forced-convection heat transfer calculator
#[derive(Parser, Debug)]
#[command(name = "heat-calc", version, about, long_about = None)]
struct Args {
    /// Path to a TOML case file
    case: PathBuf,

    /// Log model decisions (regimes, correlations, property lookups)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if args.verbose { "debug" } else { "info" })
    });
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let case = CaseFile::load(&args.case)
        .with_context(|| format!("loading {}", args.case.display()))?;
    let report = case
        .run()
        .with_context(|| format!("running {}", args.case.display()))?;

    print!("{report}");
    Ok(())
}
