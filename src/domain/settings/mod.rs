//! Indexer settings file (TOML).

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::AppError;
use crate::domain::index::IndexOptions;

/// Settings loaded from an optional TOML file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    #[serde(default)]
    pub index: IndexOptions,
}

impl Settings {
    pub fn validate(&self) -> Result<(), AppError> {
        self.index.validate()
    }
}

/// Load and validate settings from `path`.
pub fn load_settings(path: &Path) -> Result<Settings, AppError> {
    if !path.is_file() {
        return Err(AppError::SettingsNotFound(path.display().to_string()));
    }
    let content = fs::read_to_string(path)?;
    parse_settings_content(&content)
}

/// Parse settings from string content.
pub fn parse_settings_content(content: &str) -> Result<Settings, AppError> {
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}
