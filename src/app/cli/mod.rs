//! CLI Adapter.

mod index;

use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::domain::{AppError, BracketPolicy, TimestampSource};

#[derive(Parser)]
#[command(name = "lagprep")]
#[command(version)]
#[command(
    about = "Index input files for a MOHID Lagrangian case definition",
    long_about = None
)]
struct Cli {
    /// .xml file with the case definition for the Lagrangian run
    #[arg(short = 'i', long = "input", value_name = "CASE_XML")]
    input: PathBuf,
    /// Indexer settings file (TOML)
    #[arg(short = 's', long, value_name = "TOML")]
    settings: Option<PathBuf>,
    /// Timestamp source for input files (filename, modified)
    #[arg(long = "timestamps", value_name = "SOURCE")]
    timestamp_source: Option<TimestampSource>,
    /// Files kept outside the window (nearest, none)
    #[arg(long, value_name = "POLICY")]
    bracket: Option<BracketPolicy>,
    /// Accepted file extension; repeat for several
    #[arg(long = "ext", value_name = "EXT")]
    extensions: Vec<String>,
    /// Index dot-files as well
    #[arg(long)]
    include_hidden: bool,
    /// Report format written to stdout
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the JSON manifest to this path
    #[arg(short = 'o', long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Treat warnings as failures
    #[arg(long)]
    strict: bool,
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count, conflicts_with = "quiet")]
    verbose: u8,
    /// Only log errors (default logs warnings)
    #[arg(short = 'q', long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

fn log_level(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::ERROR;
    }
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(verbose, quiet))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result: Result<i32, AppError> = index::run_index(index::IndexArgs {
        input: cli.input,
        settings: cli.settings,
        timestamp_source: cli.timestamp_source,
        bracket: cli.bracket,
        extensions: cli.extensions,
        include_hidden: cli.include_hidden,
        format: cli.format,
        output: cli.output,
        strict: cli.strict,
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
