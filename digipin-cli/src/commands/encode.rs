//! `digipin encode` command.

use clap::Args;
use tracing::debug;

use digipin::config::ConfigFile;
use digipin::{Coordinate, Encoder};

use super::common::{format_result, FormatArg, OutputOptions, Primary};
use crate::error::CliError;

/// Arguments for the encode command.
#[derive(Debug, Args)]
pub struct EncodeArgs {
    /// Latitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lat: f64,

    /// Longitude in decimal degrees
    #[arg(long, allow_hyphen_values = true)]
    pub lon: f64,

    /// Print the code without separators
    #[arg(long)]
    pub compact: bool,

    /// Output format (defaults to output.format from config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Encode one coordinate and print the result.
pub fn run(args: EncodeArgs, config: &ConfigFile) -> Result<(), CliError> {
    let options = OutputOptions::resolve(args.format, args.compact, config);
    let code = Encoder::standard().encode(args.lat, args.lon)?;
    debug!(lat = args.lat, lon = args.lon, code = %code, "Encoded coordinate");

    let line = format_result(
        &options,
        &code,
        Coordinate::new(args.lat, args.lon),
        Primary::Code,
    )?;
    println!("{}", line);
    Ok(())
}
