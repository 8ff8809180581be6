//! Index command implementation.

use std::path::PathBuf;

use super::OutputFormat;
use crate::app::api::{self, IndexOutcome, IndexOverrides, IndexRequest, Manifest};
use crate::domain::{AppError, BracketPolicy, TimestampSource};

pub(crate) struct IndexArgs {
    pub input: PathBuf,
    pub settings: Option<PathBuf>,
    pub timestamp_source: Option<TimestampSource>,
    pub bracket: Option<BracketPolicy>,
    pub extensions: Vec<String>,
    pub include_hidden: bool,
    pub format: OutputFormat,
    pub output: Option<PathBuf>,
    pub strict: bool,
}

pub(crate) fn run_index(args: IndexArgs) -> Result<i32, AppError> {
    if args.format == OutputFormat::Text {
        println!("-> Case definition file is {}", args.input.display());
    }

    let outcome = api::index_case(IndexRequest {
        case_path: args.input,
        settings_path: args.settings,
        overrides: IndexOverrides {
            timestamp_source: args.timestamp_source,
            bracket: args.bracket,
            extensions: args.extensions,
            include_hidden: args.include_hidden,
        },
        strict: args.strict,
    })?;

    let manifest = Manifest::from_outcome(&outcome);
    match args.format {
        OutputFormat::Text => print_report(&outcome),
        OutputFormat::Json => println!("{}", manifest.to_json()?),
    }

    outcome.diagnostics.emit();

    if let Some(path) = &args.output {
        api::write_manifest(path, &manifest)?;
        if args.format == OutputFormat::Text {
            println!("-> Manifest written to {}", path.display());
        }
    }

    let warnings = outcome.diagnostics.warning_count();
    if warnings > 0 {
        if outcome.exit_code == 0 {
            eprintln!("Indexing completed with {} warning(s).", warnings);
        } else {
            eprintln!("Indexing failed: {} warning(s) found in strict mode.", warnings);
        }
    }

    Ok(outcome.exit_code)
}

fn print_report(outcome: &IndexOutcome) {
    let dirs: Vec<String> = outcome.directories.iter().map(|d| d.display().to_string()).collect();
    if dirs.len() > 1 {
        println!("-> Input data directories are {:?}", dirs);
    } else {
        println!("-> Input data directory is {:?}", dirs);
    }
    println!("-> Simulation window is {}", outcome.window);

    for file in &outcome.files {
        println!(
            "   {}  {:<10} {}",
            crate::domain::time_window::format_timestamp(&file.timestamp),
            file.placement.to_string(),
            file.path.display()
        );
    }
    println!("-> Selected {} input file(s)", outcome.files.len());
}
