//! geogrid-convert: WRF geogrid (ENVI flat binary) to NetCDF-4.

use anyhow::{bail, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use geogrid_convert::{pipeline, Args, ConvertConfig};

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize tracing; stdout is reserved for the report
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);
    if args.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    let config = ConvertConfig::try_from(&args)?;
    info!(input = %config.input.display(), output = %config.output.display(), "Starting conversion");

    if config.verbose {
        print!("{}", config);
    }

    let summary = pipeline::run(&config)?;
    for line in summary.lines() {
        println!("{}", line);
    }

    if !summary.succeeded() {
        bail!(
            "{} of {} NetCDF steps failed for {}",
            summary.report.failures().count(),
            summary.report.steps().len(),
            config.output.display()
        );
    }

    Ok(())
}
