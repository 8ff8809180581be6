use std::io;

use thiserror::Error;

/// Library-wide error type for lagprep operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Case definition path does not resolve to a readable file.
    #[error("Case definition not found: {path} ({details})")]
    ConfigNotFound { path: String, details: String },

    /// Case definition is not well-formed or lacks a required attribute.
    #[error("Malformed case definition {path}: {details}")]
    MalformedConfig { path: String, details: String },

    /// A required configuration entry is absent.
    #[error("Missing configuration: '{key}' is required")]
    MissingConfiguration { key: String },

    /// A timestamp value does not match `YYYY MM DD HH MM SS`.
    #[error("Invalid timestamp for '{key}': '{value}' (expected 'YYYY MM DD HH MM SS')")]
    InvalidTimestamp { key: String, value: String },

    /// StartTime is later than EndTime.
    #[error("Invalid time window: StartTime {start} is after EndTime {end}")]
    InvalidTimeWindow { start: String, end: String },

    /// An input data directory is missing or unreadable.
    #[error("Cannot access input data directory '{path}': {details}")]
    DirectoryAccess { path: String, details: String },

    /// Indexer settings file missing.
    #[error("Settings file not found: {0}")]
    SettingsNotFound(String),

    /// Settings value failed validation.
    #[error("Invalid settings: {0}")]
    Validation(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Manifest serialization failed.
    #[error("Failed to serialize manifest: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AppError {
    pub fn missing<S: Into<String>>(key: S) -> Self {
        AppError::MissingConfiguration { key: key.into() }
    }

    /// Provide an `io::ErrorKind`-like view for callers mapping errors to exit paths.
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            AppError::Io(err) => err.kind(),
            AppError::MalformedConfig { .. }
            | AppError::MissingConfiguration { .. }
            | AppError::InvalidTimestamp { .. }
            | AppError::InvalidTimeWindow { .. }
            | AppError::Validation(_)
            | AppError::TomlParseError(_) => io::ErrorKind::InvalidInput,
            AppError::ConfigNotFound { .. }
            | AppError::DirectoryAccess { .. }
            | AppError::SettingsNotFound(_) => io::ErrorKind::NotFound,
            AppError::Serialization(_) => io::ErrorKind::Other,
        }
    }
}
