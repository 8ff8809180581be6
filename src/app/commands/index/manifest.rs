//! Serializable record of an index run for the config-composition step.

use std::fs;
use std::path::Path;

use serde::Serialize;

use super::IndexOutcome;
use crate::domain::time_window::format_timestamp;
use crate::domain::{AppError, Placement, UnreadableEntryWarning};

#[derive(Debug, Serialize)]
pub struct Manifest {
    pub case: String,
    pub window: ManifestWindow,
    pub directories: Vec<String>,
    pub files: Vec<ManifestFile>,
    pub warnings: Vec<UnreadableEntryWarning>,
}

#[derive(Debug, Serialize)]
pub struct ManifestWindow {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Serialize)]
pub struct ManifestFile {
    pub path: String,
    pub directory: String,
    pub name: String,
    pub timestamp: String,
    pub placement: Placement,
}

impl Manifest {
    pub fn from_outcome(outcome: &IndexOutcome) -> Self {
        Self {
            case: outcome.case_path.display().to_string(),
            window: ManifestWindow {
                start: format_timestamp(&outcome.window.start()),
                end: format_timestamp(&outcome.window.end()),
            },
            directories: outcome.directories.iter().map(|d| d.display().to_string()).collect(),
            files: outcome
                .files
                .iter()
                .map(|file| ManifestFile {
                    path: file.path.display().to_string(),
                    directory: file.directory.display().to_string(),
                    name: file.name.clone(),
                    timestamp: format_timestamp(&file.timestamp),
                    placement: file.placement,
                })
                .collect(),
            warnings: outcome.diagnostics.warnings().to_vec(),
        }
    }

    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Write the manifest as JSON, creating parent directories as needed.
pub fn write_manifest(path: &Path, manifest: &Manifest) -> Result<(), AppError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, format!("{}\n", manifest.to_json()?))?;
    Ok(())
}
