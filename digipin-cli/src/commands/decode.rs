//! `digipin decode` command.

use clap::Args;
use tracing::debug;

use digipin::config::ConfigFile;
use digipin::Decoder;

use super::common::{format_result, FormatArg, OutputOptions, Primary};
use crate::error::CliError;

/// Arguments for the decode command.
#[derive(Debug, Args)]
pub struct DecodeArgs {
    /// DIGIPIN code, with or without separators (e.g. 39J-49L-L8T4)
    pub code: String,

    /// Output format (defaults to output.format from config)
    #[arg(long, value_enum)]
    pub format: Option<FormatArg>,
}

/// Decode one code and print its centroid.
pub fn run(args: DecodeArgs, config: &ConfigFile) -> Result<(), CliError> {
    let options = OutputOptions::resolve(args.format, false, config);
    let decoder = Decoder::standard();

    let code = decoder.parse(&args.code)?;
    let coord = decoder.decode_code(&code)?;
    debug!(code = %code, lat = coord.lat, lon = coord.lon, "Decoded code");

    println!("{}", format_result(&options, &code, coord, Primary::Coordinate)?);
    Ok(())
}
