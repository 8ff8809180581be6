//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation,
//! settings resolution and command execution.

use std::path::PathBuf;

use crate::adapters::FilesystemDataDirectory;
use crate::app::AppContext;
use crate::app::commands::index::{self, IndexCaseOptions};
use crate::domain::{BracketPolicy, IndexOptions, Settings, TimestampSource, load_settings};

pub use crate::app::commands::index::{IndexOutcome, Manifest, write_manifest};
pub use crate::domain::AppError;

/// Command-line values that take precedence over the settings file.
#[derive(Debug, Clone, Default)]
pub struct IndexOverrides {
    pub timestamp_source: Option<TimestampSource>,
    pub bracket: Option<BracketPolicy>,
    pub extensions: Vec<String>,
    pub include_hidden: bool,
}

impl IndexOverrides {
    fn apply(self, options: &mut IndexOptions) {
        if let Some(source) = self.timestamp_source {
            options.timestamp_source = source;
        }
        if let Some(bracket) = self.bracket {
            options.bracket = bracket;
        }
        if !self.extensions.is_empty() {
            options.extensions = self.extensions;
        }
        if self.include_hidden {
            options.include_hidden = true;
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IndexRequest {
    pub case_path: PathBuf,
    pub settings_path: Option<PathBuf>,
    pub overrides: IndexOverrides,
    pub strict: bool,
}

/// Resolve the case definition and index its input data directories on disk.
pub fn index_case(request: IndexRequest) -> Result<IndexOutcome, AppError> {
    let settings = match &request.settings_path {
        Some(path) => load_settings(path)?,
        None => Settings::default(),
    };

    let mut options = settings.index;
    request.overrides.apply(&mut options);
    options.validate()?;

    let ctx = AppContext::new(FilesystemDataDirectory::new());
    index::execute(
        &ctx,
        IndexCaseOptions { case_path: request.case_path, index: options, strict: request.strict },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write_fixture(root: &std::path::Path) -> PathBuf {
        let data = root.join("data");
        fs::create_dir_all(&data).unwrap();
        for name in ["h_20190101.nc", "h_20190105.nc", "h_20190105.txt", "h_20190110.nc"] {
            fs::write(data.join(name), b"").unwrap();
        }
        let case = root.join("case.xml");
        fs::write(
            &case,
            r#"<case>
  <casedef><inputData><inputDataDir name="data"/></inputData></casedef>
  <execution><parameters>
    <parameter key="StartTime" value="2019 01 03 00 00 00"/>
    <parameter key="EndTime" value="2019 01 08 00 00 00"/>
  </parameters></execution>
</case>"#,
        )
        .unwrap();
        case
    }

    #[test]
    fn settings_file_and_overrides_combine() {
        let dir = tempdir().unwrap();
        let case_path = write_fixture(dir.path());
        let settings_path = dir.path().join("lagprep.toml");
        fs::write(&settings_path, "[index]\nextensions = [\"nc\"]\n").unwrap();

        let outcome = index_case(IndexRequest {
            case_path,
            settings_path: Some(settings_path),
            overrides: IndexOverrides {
                bracket: Some(BracketPolicy::WindowOnly),
                ..IndexOverrides::default()
            },
            strict: false,
        })
        .unwrap();

        let names: Vec<&str> = outcome.files.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["h_20190105.nc"]);
    }

    #[test]
    fn missing_settings_file_is_an_error() {
        let dir = tempdir().unwrap();
        let case_path = write_fixture(dir.path());

        let result = index_case(IndexRequest {
            case_path,
            settings_path: Some(dir.path().join("absent.toml")),
            ..IndexRequest::default()
        });
        assert!(matches!(result, Err(AppError::SettingsNotFound(_))));
    }

    #[test]
    fn invalid_override_is_rejected() {
        let dir = tempdir().unwrap();
        let case_path = write_fixture(dir.path());

        let result = index_case(IndexRequest {
            case_path,
            overrides: IndexOverrides { extensions: vec![String::new()], ..Default::default() },
            ..IndexRequest::default()
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }
}
