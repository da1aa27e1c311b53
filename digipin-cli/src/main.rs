//! DIGIPIN CLI - Command-line interface
//!
//! Encodes coordinates to DIGIPIN codes and decodes them back, singly or in
//! batches, using the `digipin` library.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use tracing::{debug, warn};

use commands::batch::BatchArgs;
use commands::config::ConfigCommands;
use commands::decode::DecodeArgs;
use commands::encode::EncodeArgs;
use digipin::config::ConfigFile;
use digipin::logging::{init_logging, LoggingGuard};
use error::CliError;

#[derive(Parser)]
#[command(name = "digipin")]
#[command(version, about = "Encode and decode DIGIPIN location codes", long_about = None)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a latitude/longitude into a DIGIPIN code
    Encode(EncodeArgs),

    /// Decode a DIGIPIN code into the centre of its cell
    Decode(DecodeArgs),

    /// Encode or decode one record per line from a file or stdin
    Batch(BatchArgs),

    /// Show the region bounds and symbol grid
    Grid,

    /// View and modify configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let (config, load_error) = match ConfigFile::load() {
        Ok(config) => (config, None),
        Err(e) => (ConfigFile::default(), Some(e)),
    };

    let _guard = start_logging(&config, cli.verbose)?;

    if let Some(e) = load_error {
        warn!(error = %e, "Using default configuration");
    }
    debug!(?config, "Configuration loaded");

    match cli.command {
        Commands::Encode(args) => commands::encode::run(args, &config),
        Commands::Decode(args) => commands::decode::run(args, &config),
        Commands::Batch(args) => commands::batch::run(args, &config),
        Commands::Grid => commands::grid::run(),
        Commands::Config { command } => commands::config::run(command),
    }
}

fn start_logging(config: &ConfigFile, verbose: bool) -> Result<LoggingGuard, CliError> {
    let level = if verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };

    init_logging(level, config.logging.file.as_deref())
        .map_err(|e| CliError::LoggingInit(e.to_string()))
}
