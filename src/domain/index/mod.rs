//! Time-windowed indexing of input data directories.

pub mod selection;
pub mod timestamp;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::domain::{AppError, Diagnostics, TimeWindow};
use crate::ports::{DataDirectoryReader, DirectoryEntry, EntryKind};

pub use selection::{BracketPolicy, Placement, classify};
pub use timestamp::{TimestampSource, timestamp_from_filename};

/// Indexer tuning, loaded from the `[index]` settings table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IndexOptions {
    #[serde(default)]
    pub timestamp_source: TimestampSource,
    #[serde(default)]
    pub bracket: BracketPolicy,
    /// Accepted file extensions, case-insensitive. Empty accepts any.
    #[serde(default)]
    pub extensions: Vec<String>,
    #[serde(default)]
    pub include_hidden: bool,
}

impl IndexOptions {
    pub fn validate(&self) -> Result<(), AppError> {
        if self.extensions.iter().any(|ext| ext.trim_start_matches('.').trim().is_empty()) {
            return Err(AppError::Validation("extensions must not contain empty entries".into()));
        }
        Ok(())
    }

    fn accepts_extension(&self, name: &str) -> bool {
        if self.extensions.is_empty() {
            return true;
        }
        let Some(ext) = Path::new(name).extension().and_then(|ext| ext.to_str()) else {
            return false;
        };
        self.extensions
            .iter()
            .any(|allowed| allowed.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// An input file selected for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    /// Search root the file was found under.
    pub directory: PathBuf,
    pub name: String,
    pub path: PathBuf,
    pub timestamp: NaiveDateTime,
    pub placement: Placement,
}

/// Index every directory and return the selected files.
///
/// Directories are de-duplicated by the reader's canonical key. Output is
/// ordered by timestamp, then directory, then file name.
pub fn index<R: DataDirectoryReader + ?Sized>(
    reader: &R,
    directories: &[PathBuf],
    window: &TimeWindow,
    options: &IndexOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<CandidateFile>, AppError> {
    let mut seen = HashSet::new();
    let mut selected = Vec::new();

    for dir in directories {
        let key = reader.canonical_key(dir)?;
        if !seen.insert(key) {
            debug!(directory = %dir.display(), "skipping duplicate input directory");
            continue;
        }
        selected.extend(index_directory(reader, dir, window, options, diagnostics)?);
    }

    selected.sort_by(|a, b| {
        a.timestamp
            .cmp(&b.timestamp)
            .then_with(|| a.directory.cmp(&b.directory))
            .then_with(|| a.name.cmp(&b.name))
    });
    Ok(selected)
}

fn index_directory<R: DataDirectoryReader + ?Sized>(
    reader: &R,
    dir: &Path,
    window: &TimeWindow,
    options: &IndexOptions,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<CandidateFile>, AppError> {
    let entries = reader.list_entries(dir)?;
    let total = entries.len();

    let mut dated: Vec<(DirectoryEntry, NaiveDateTime)> = Vec::new();
    for entry in entries {
        if let Some(timestamp) = entry_timestamp(&entry, options, diagnostics) {
            dated.push((entry, timestamp));
        }
    }

    let timestamps: Vec<NaiveDateTime> = dated.iter().map(|(_, ts)| *ts).collect();
    let placements = classify(&timestamps, window, options.bracket);

    let files: Vec<CandidateFile> = dated
        .into_iter()
        .zip(placements)
        .filter_map(|((entry, timestamp), placement)| {
            placement.map(|placement| CandidateFile {
                directory: dir.to_path_buf(),
                name: entry.name,
                path: entry.path,
                timestamp,
                placement,
            })
        })
        .collect();

    debug!(
        directory = %dir.display(),
        entries = total,
        dated = timestamps.len(),
        selected = files.len(),
        "indexed input directory"
    );
    if files.is_empty() {
        warn!(directory = %dir.display(), window = %window, "no input files selected");
    }
    Ok(files)
}

/// Timestamp for an entry that passes the filters, recording a warning when
/// a candidate cannot be read or dated.
fn entry_timestamp(
    entry: &DirectoryEntry,
    options: &IndexOptions,
    diagnostics: &mut Diagnostics,
) -> Option<NaiveDateTime> {
    // Name filters first: an excluded entry is never a candidate, readable or not.
    if !options.include_hidden && entry.name.starts_with('.') {
        return None;
    }
    if !options.accepts_extension(&entry.name) {
        return None;
    }

    let modified = match &entry.kind {
        EntryKind::File { modified } => *modified,
        EntryKind::Unreadable(reason) => {
            record_unreadable(entry, reason, diagnostics);
            return None;
        }
        EntryKind::Directory | EntryKind::Other => return None,
    };

    let derived = match options.timestamp_source {
        TimestampSource::Filename => timestamp_from_filename(&entry.name),
        TimestampSource::Modified => modified,
    };
    if derived.is_none() {
        let reason = match options.timestamp_source {
            TimestampSource::Filename => "no date found in file name",
            TimestampSource::Modified => "modification time unavailable",
        };
        record_unreadable(entry, reason, diagnostics);
    }
    derived
}

fn record_unreadable(entry: &DirectoryEntry, reason: &str, diagnostics: &mut Diagnostics) {
    debug!(file = %entry.path.display(), reason, "skipping unreadable entry");
    diagnostics.push_warning(entry.path.display().to_string(), reason);
}
