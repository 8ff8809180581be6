pub mod data_directory_filesystem;

pub use data_directory_filesystem::FilesystemDataDirectory;
