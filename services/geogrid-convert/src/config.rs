//! Converter configuration.
//!
//! [`Args`] is the command-line surface; [`ConvertConfig`] is the validated
//! form the pipeline consumes.

use std::fmt;
use std::path::PathBuf;

use clap::Parser;
use geogrid::{Endianness, GridSpec};

use crate::error::{ConfigError, ConvertError};

/// Command-line options.
#[derive(Parser, Debug, Clone)]
#[command(name = "geogrid-convert")]
#[command(about = "Convert a WRF geogrid file (an ENVI flat binary file) to NetCDF-4")]
#[command(
    after_help = "The WRF 'index' file is not parsed; the grid geometry and encoding must be given with the options above."
)]
pub struct Args {
    /// Input file (geogrid)
    #[arg(short, long, env = "GEOGRID_INPUT")]
    pub input: Option<PathBuf>,

    /// Output file (NetCDF)
    #[arg(short, long, env = "GEOGRID_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Grid size NX
    #[arg(short = 'x', long, default_value_t = 1, env = "GEOGRID_NX")]
    pub nx: usize,

    /// Grid size NY
    #[arg(short = 'y', long, default_value_t = 1, env = "GEOGRID_NY")]
    pub ny: usize,

    /// Grid size NZ
    #[arg(short = 'z', long, default_value_t = 1, env = "GEOGRID_NZ")]
    pub nz: usize,

    /// Word size in bytes (1, 2 or 4)
    #[arg(short = 'w', long = "wsize", default_value_t = 4, env = "GEOGRID_WSIZE")]
    pub word_size: usize,

    /// Scale factor
    #[arg(short, long, default_value_t = 1.0, env = "GEOGRID_SCALE")]
    pub scale: f64,

    /// Signed data (default unsigned)
    #[arg(short = 'm', long, env = "GEOGRID_SIGNED")]
    pub signed: bool,

    /// Little endian data (default big endian)
    #[arg(short = 'l', long = "littleendian", env = "GEOGRID_LITTLE_ENDIAN")]
    pub little_endian: bool,

    /// Print the resolved settings before converting
    #[arg(short, long)]
    pub verbose: bool,

    /// Log level (overridden by RUST_LOG)
    #[arg(long, default_value = "warn", env = "GEOGRID_LOG_LEVEL")]
    pub log_level: String,

    /// Emit logs as JSON
    #[arg(long)]
    pub log_json: bool,
}

/// Validated settings for one conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub spec: GridSpec,
    pub verbose: bool,
}

impl ConvertConfig {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, spec: GridSpec) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            spec,
            verbose: false,
        }
    }
}

impl TryFrom<&Args> for ConvertConfig {
    type Error = ConvertError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        let input = args.input.clone().ok_or(ConfigError::MissingInput)?;
        let output = args.output.clone().ok_or(ConfigError::MissingOutput)?;

        let endianness = if args.little_endian {
            Endianness::Little
        } else {
            Endianness::Big
        };

        let spec = GridSpec::new(
            args.nx,
            args.ny,
            args.nz,
            args.word_size,
            args.signed,
            endianness,
            args.scale,
        )?;

        Ok(Self {
            input,
            output,
            spec,
            verbose: args.verbose,
        })
    }
}

/// Settings table printed in verbose mode.
impl fmt::Display for ConvertConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Input file:\t\t{}", self.input.display())?;
        writeln!(f, "output file:\t\t{}", self.output.display())?;
        writeln!(f, "Grid NX:\t\t{}", self.spec.nx)?;
        writeln!(f, "Grid NY:\t\t{}", self.spec.ny)?;
        writeln!(f, "Grid NZ:\t\t{}", self.spec.nz)?;
        writeln!(f, "Word size:\t\t{}", self.spec.word_size)?;
        writeln!(f, "Scale factor:\t\t{:.6}", self.spec.scale)?;
        writeln!(
            f,
            "Signed:\t\t\t{}",
            if self.spec.signed { "yes" } else { "no" }
        )?;
        writeln!(f, "Endianness:\t\t{}", self.spec.endianness)
    }
}
