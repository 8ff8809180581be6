//! Typed parameter extraction from a parsed case definition.

use std::collections::HashMap;

use chrono::NaiveDateTime;

use super::table::{self, ParameterKey, ParameterValue};
use crate::domain::case::CaseDefinition;
use crate::domain::{AppError, DirectorySet, TimeWindow};

/// Key reported when a case declares no input directories.
pub const INPUT_DATA_DIR_PATH: &str = "casedef/inputData/inputDataDir";

/// Search roots and time window resolved from a case definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedCase {
    pub directories: DirectorySet,
    pub window: TimeWindow,
}

/// Extract the directory set and time window. Pure; performs no I/O.
pub fn extract(doc: &CaseDefinition) -> Result<ResolvedCase, AppError> {
    let directories: DirectorySet =
        doc.input_directories().iter().map(|dir| dir.name.as_str()).collect();
    if directories.is_empty() {
        return Err(AppError::missing(INPUT_DATA_DIR_PATH));
    }

    let values = recognized_values(doc)?;
    let start = require_timestamp(&values, ParameterKey::StartTime)?;
    let end = require_timestamp(&values, ParameterKey::EndTime)?;
    let window = TimeWindow::new(start, end)?;

    Ok(ResolvedCase { directories, window })
}

/// Parse every recognized parameter; later occurrences replace earlier ones.
fn recognized_values(
    doc: &CaseDefinition,
) -> Result<HashMap<ParameterKey, ParameterValue>, AppError> {
    let mut values = HashMap::new();
    for param in doc.parameters() {
        let Some(entry) = table::lookup(&param.key) else {
            continue;
        };
        values.insert(entry.key, (entry.parse)(param)?);
    }
    Ok(values)
}

fn require_timestamp(
    values: &HashMap<ParameterKey, ParameterValue>,
    key: ParameterKey,
) -> Result<NaiveDateTime, AppError> {
    match values.get(&key) {
        Some(ParameterValue::Timestamp(ts)) => Ok(*ts),
        None => Err(AppError::missing(key.name())),
    }
}
