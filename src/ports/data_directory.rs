//! Read-only access to input data directories.
//!
//! The indexer enumerates search roots through this port so it never touches
//! the filesystem directly.

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::domain::AppError;

/// What a directory entry turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    File { modified: Option<NaiveDateTime> },
    Directory,
    Other,
    /// Metadata could not be read; the reason is reported as a warning.
    Unreadable(String),
}

/// A direct child of an input data directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Port for enumerating input data directories.
pub trait DataDirectoryReader {
    /// Identity used to collapse different spellings of the same directory.
    ///
    /// Fails with `DirectoryAccess` when the directory cannot be resolved.
    fn canonical_key(&self, dir: &Path) -> Result<PathBuf, AppError>;

    /// Direct entries of `dir`, without recursion.
    ///
    /// Fails with `DirectoryAccess` when `dir` is missing, not a directory, or
    /// cannot be listed.
    fn list_entries(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, AppError>;
}
