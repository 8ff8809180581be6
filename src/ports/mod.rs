mod data_directory;

pub use data_directory::{DataDirectoryReader, DirectoryEntry, EntryKind};
