//! Index command: case definition -> parameters -> selected input files.

mod manifest;

use std::path::{Path, PathBuf};

use tracing::info;

use crate::app::AppContext;
use crate::domain::index::{self, CandidateFile, IndexOptions};
use crate::domain::{AppError, Diagnostics, DirectorySet, TimeWindow, extract, load_case};
use crate::ports::DataDirectoryReader;

pub use manifest::{Manifest, ManifestFile, ManifestWindow, write_manifest};

#[derive(Debug, Clone, Default)]
pub struct IndexCaseOptions {
    pub case_path: PathBuf,
    pub index: IndexOptions,
    /// Treat unreadable-entry warnings as a failing exit code.
    pub strict: bool,
}

#[derive(Debug)]
pub struct IndexOutcome {
    pub case_path: PathBuf,
    /// Search roots in document order, resolved against the case file location.
    pub directories: Vec<PathBuf>,
    pub window: TimeWindow,
    pub files: Vec<CandidateFile>,
    pub diagnostics: Diagnostics,
    pub exit_code: i32,
}

pub fn execute<R: DataDirectoryReader>(
    ctx: &AppContext<R>,
    options: IndexCaseOptions,
) -> Result<IndexOutcome, AppError> {
    info!(case = %options.case_path.display(), "loading case definition");
    let case = load_case(&options.case_path)?;
    let resolved = extract(&case)?;
    info!(
        directories = resolved.directories.len(),
        window = %resolved.window,
        "resolved case parameters"
    );

    let directories = resolve_directories(&resolved.directories, &options.case_path);
    let mut diagnostics = Diagnostics::default();
    let files = index::index(
        ctx.reader(),
        &directories,
        &resolved.window,
        &options.index,
        &mut diagnostics,
    )?;
    info!(selected = files.len(), warnings = diagnostics.warning_count(), "indexing complete");

    let exit_code = if options.strict && diagnostics.has_warnings() { 2 } else { 0 };

    Ok(IndexOutcome {
        case_path: options.case_path,
        directories,
        window: resolved.window,
        files,
        diagnostics,
        exit_code,
    })
}

/// Relative directory names are taken relative to the case file's directory.
fn resolve_directories(directories: &DirectorySet, case_path: &Path) -> Vec<PathBuf> {
    let base = case_path.parent().unwrap_or(Path::new(""));
    directories
        .iter()
        .map(|name| {
            let dir = Path::new(name);
            if dir.is_absolute() { dir.to_path_buf() } else { base.join(dir) }
        })
        .collect()
}
