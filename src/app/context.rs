use crate::ports::DataDirectoryReader;

/// Application context holding dependencies for command execution.
pub struct AppContext<R: DataDirectoryReader> {
    reader: R,
}

impl<R: DataDirectoryReader> AppContext<R> {
    /// Create a new application context.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// Get a reference to the data directory reader.
    pub fn reader(&self) -> &R {
        &self.reader
    }
}
