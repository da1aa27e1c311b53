//! `digipin batch` command: process many records from a file or stdin.
//!
//! Blank lines and lines starting with `#` are skipped. A record that fails
//! is reported on stderr with its line number and processing continues.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

use clap::{Args, Subcommand};
use tracing::{debug, info};

use digipin::config::ConfigFile;
use digipin::{Code, CodecError, Coordinate, Decoder, Encoder};

use super::common::{format_result, FormatArg, OutputOptions, Primary};
use crate::error::CliError;

/// Arguments for the batch command.
#[derive(Debug, Args)]
pub struct BatchArgs {
    #[command(subcommand)]
    pub mode: BatchMode,

    /// Input file (defaults to stdin)
    #[arg(long, short, global = true)]
    pub input: Option<PathBuf>,

    /// Print codes without separators
    #[arg(long, global = true)]
    pub compact: bool,

    /// Output format (defaults to output.format from config)
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,
}

/// What each input line holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum BatchMode {
    /// Each line is `lat,lon`
    Encode,
    /// Each line is a code
    Decode,
}

/// Outcome counts of a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub total: usize,
    pub failed: usize,
}

/// Why a single record failed.
#[derive(Debug, PartialEq)]
enum RecordError {
    Malformed(String),
    Codec(CodecError),
}

impl std::fmt::Display for RecordError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordError::Malformed(msg) => write!(f, "{}", msg),
            RecordError::Codec(e) => write!(f, "{}", e),
        }
    }
}

impl From<CodecError> for RecordError {
    fn from(e: CodecError) -> Self {
        RecordError::Codec(e)
    }
}

/// Run a batch over the configured input.
pub fn run(args: BatchArgs, config: &ConfigFile) -> Result<(), CliError> {
    let options = OutputOptions::resolve(args.format, args.compact, config);
    let stdout = io::stdout();
    let stderr = io::stderr();

    let summary = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|error| CliError::Input {
                path: Some(path.clone()),
                error,
            })?;
            process(
                args.mode,
                BufReader::new(file),
                &mut stdout.lock(),
                &mut stderr.lock(),
                &options,
            )
            .map_err(|e| with_input_path(e, &args.input))?
        }
        None => process(
            args.mode,
            io::stdin().lock(),
            &mut stdout.lock(),
            &mut stderr.lock(),
            &options,
        )?,
    };

    info!(
        total = summary.total,
        failed = summary.failed,
        "Batch complete"
    );

    if summary.failed > 0 {
        return Err(CliError::Batch {
            failed: summary.failed,
            total: summary.total,
        });
    }
    Ok(())
}

fn with_input_path(error: CliError, input: &Option<PathBuf>) -> CliError {
    match error {
        CliError::Input { path: None, error } => CliError::Input {
            path: input.clone(),
            error,
        },
        other => other,
    }
}

/// Process every record from `reader`, writing results and per-line errors.
///
/// Only an I/O failure on `reader` or the writers aborts the run. A line that
/// is not valid UTF-8 counts as a failed record.
fn process<R, W, E>(
    mode: BatchMode,
    mut reader: R,
    out: &mut W,
    err: &mut E,
    options: &OutputOptions,
) -> Result<BatchSummary, CliError>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    let encoder = Encoder::standard();
    let decoder = Decoder::standard();
    let primary = match mode {
        BatchMode::Encode => Primary::Code,
        BatchMode::Decode => Primary::Coordinate,
    };
    let mut summary = BatchSummary::default();
    let mut buffer = Vec::new();
    let mut line_number: usize = 0;

    loop {
        buffer.clear();
        let read = reader
            .read_until(b'\n', &mut buffer)
            .map_err(|error| CliError::Input { path: None, error })?;
        if read == 0 {
            break;
        }
        line_number += 1;

        let result = match std::str::from_utf8(&buffer) {
            Ok(line) => {
                let record = line.trim();
                if record.is_empty() || record.starts_with('#') {
                    continue;
                }
                match mode {
                    BatchMode::Encode => encode_record(&encoder, record),
                    BatchMode::Decode => decode_record(&decoder, record),
                }
            }
            Err(_) => Err(RecordError::Malformed(
                "line is not valid UTF-8".to_string(),
            )),
        };
        summary.total += 1;

        match result {
            Ok((code, coord)) => {
                writeln!(out, "{}", format_result(options, &code, coord, primary)?)?;
            }
            Err(e) => {
                summary.failed += 1;
                debug!(line = line_number, error = %e, "Skipping record");
                writeln!(err, "line {}: {}", line_number, e)?;
            }
        }
    }

    out.flush()?;
    Ok(summary)
}

/// Encodes a `lat,lon` record, returning the code and the input coordinate.
fn encode_record(encoder: &Encoder<'_>, record: &str) -> Result<(Code, Coordinate), RecordError> {
    let (lat, lon) = parse_coordinate(record)?;
    let code = encoder.encode(lat, lon)?;
    Ok((code, Coordinate::new(lat, lon)))
}

/// Decodes a code record, returning the parsed code and its centroid.
fn decode_record(decoder: &Decoder<'_>, record: &str) -> Result<(Code, Coordinate), RecordError> {
    let code = decoder.parse(record)?;
    let coord = decoder.decode_code(&code)?;
    Ok((code, coord))
}

/// Parses a `lat,lon` record.
fn parse_coordinate(record: &str) -> Result<(f64, f64), RecordError> {
    let malformed = || RecordError::Malformed(format!("expected 'lat,lon', found '{}'", record));

    let (lat, lon) = record.split_once(',').ok_or_else(malformed)?;
    let lat = lat.trim().parse::<f64>().map_err(|_| malformed())?;
    let lon = lon.trim().parse::<f64>().map_err(|_| malformed())?;
    Ok((lat, lon))
}
