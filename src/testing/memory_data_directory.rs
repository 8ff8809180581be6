use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

use crate::domain::AppError;
use crate::ports::{DataDirectoryReader, DirectoryEntry, EntryKind};

/// In-memory data directories for indexer tests.
#[derive(Debug, Default)]
pub struct MemoryDataDirectory {
    dirs: HashMap<PathBuf, Vec<DirectoryEntry>>,
    aliases: HashMap<PathBuf, PathBuf>,
}

impl MemoryDataDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add regular files without a modification time.
    pub fn with_files(mut self, dir: &str, names: &[&str]) -> Self {
        for name in names {
            self.push(dir, name, EntryKind::File { modified: None });
        }
        self
    }

    pub fn with_modified_file(
        mut self,
        dir: &str,
        name: &str,
        modified: Option<NaiveDateTime>,
    ) -> Self {
        self.push(dir, name, EntryKind::File { modified });
        self
    }

    pub fn with_unreadable(mut self, dir: &str, name: &str, reason: &str) -> Self {
        self.push(dir, name, EntryKind::Unreadable(reason.to_string()));
        self
    }

    /// Register `alias` as another spelling of `target`.
    pub fn with_alias(mut self, alias: &str, target: &str) -> Self {
        self.aliases.insert(PathBuf::from(alias), PathBuf::from(target));
        self
    }

    fn push(&mut self, dir: &str, name: &str, kind: EntryKind) {
        let dir = PathBuf::from(dir);
        let path = dir.join(name);
        self.dirs.entry(dir).or_default().push(DirectoryEntry {
            name: name.to_string(),
            path,
            kind,
        });
    }

    fn resolve(&self, dir: &Path) -> Result<PathBuf, AppError> {
        let target = self.aliases.get(dir).cloned().unwrap_or_else(|| dir.to_path_buf());
        if self.dirs.contains_key(&target) {
            Ok(target)
        } else {
            Err(AppError::DirectoryAccess {
                path: dir.display().to_string(),
                details: "No such file or directory".to_string(),
            })
        }
    }
}

impl DataDirectoryReader for MemoryDataDirectory {
    fn canonical_key(&self, dir: &Path) -> Result<PathBuf, AppError> {
        self.resolve(dir)
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, AppError> {
        let target = self.resolve(dir)?;
        Ok(self.dirs.get(&target).cloned().unwrap_or_default())
    }
}
