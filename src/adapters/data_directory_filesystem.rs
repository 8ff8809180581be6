use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use crate::domain::AppError;
use crate::ports::{DataDirectoryReader, DirectoryEntry, EntryKind};

/// Filesystem-backed data directory reader.
#[derive(Debug, Clone, Copy, Default)]
pub struct FilesystemDataDirectory;

impl FilesystemDataDirectory {
    pub fn new() -> Self {
        Self
    }
}

fn access_error(dir: &Path, err: &io::Error) -> AppError {
    AppError::DirectoryAccess { path: dir.display().to_string(), details: err.to_string() }
}

fn entry_kind(path: &Path) -> EntryKind {
    // Follows symlinks so linked data files are indexed like regular ones.
    let metadata = match fs::metadata(path) {
        Ok(metadata) => metadata,
        Err(err) => return EntryKind::Unreadable(err.to_string()),
    };

    if metadata.is_dir() {
        EntryKind::Directory
    } else if metadata.is_file() {
        let modified =
            metadata.modified().ok().map(|time| DateTime::<Utc>::from(time).naive_utc());
        EntryKind::File { modified }
    } else {
        EntryKind::Other
    }
}

impl DataDirectoryReader for FilesystemDataDirectory {
    fn canonical_key(&self, dir: &Path) -> Result<PathBuf, AppError> {
        fs::canonicalize(dir).map_err(|err| access_error(dir, &err))
    }

    fn list_entries(&self, dir: &Path) -> Result<Vec<DirectoryEntry>, AppError> {
        let metadata = fs::metadata(dir).map_err(|err| access_error(dir, &err))?;
        if !metadata.is_dir() {
            return Err(AppError::DirectoryAccess {
                path: dir.display().to_string(),
                details: "not a directory".to_string(),
            });
        }

        let mut entries = Vec::new();
        for entry in fs::read_dir(dir).map_err(|err| access_error(dir, &err))? {
            let entry = entry.map_err(|err| access_error(dir, &err))?;
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            let kind = entry_kind(&path);
            entries.push(DirectoryEntry { name, path, kind });
        }
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lists_files_and_subdirectories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("hydro_20190101.nc"), b"x").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();

        let mut entries = FilesystemDataDirectory::new().list_entries(dir.path()).unwrap();
        entries.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].name, "hydro_20190101.nc");
        assert!(matches!(entries[0].kind, EntryKind::File { modified: Some(_) }));
        assert_eq!(entries[1].name, "nested");
        assert_eq!(entries[1].kind, EntryKind::Directory);
    }

    #[test]
    fn missing_directory_is_an_access_error() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("missing");

        let err = FilesystemDataDirectory::new().list_entries(&missing).unwrap_err();
        match err {
            AppError::DirectoryAccess { path, .. } => assert!(path.ends_with("missing")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(matches!(
            FilesystemDataDirectory::new().canonical_key(&missing),
            Err(AppError::DirectoryAccess { .. })
        ));
    }

    #[test]
    fn file_path_is_not_a_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, b"x").unwrap();

        assert!(matches!(
            FilesystemDataDirectory::new().list_entries(&file),
            Err(AppError::DirectoryAccess { .. })
        ));
    }

    #[test]
    fn canonical_key_collapses_spellings() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("a")).unwrap();
        let reader = FilesystemDataDirectory::new();

        let plain = reader.canonical_key(&dir.path().join("a")).unwrap();
        let dotted = reader.canonical_key(&dir.path().join("a").join(".")).unwrap();
        assert_eq!(plain, dotted);
    }
}
