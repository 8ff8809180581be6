mod memory_data_directory;

pub use memory_data_directory::MemoryDataDirectory;
