//! Recognized execution parameters.
//!
//! Each recognized key maps to a typed parser. Keys not listed here are
//! ignored so newer case files keep loading.

use chrono::NaiveDateTime;

use crate::domain::AppError;
use crate::domain::case::ExecutionParameter;
use crate::domain::time_window::parse_case_timestamp;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKey {
    StartTime,
    EndTime,
}

impl ParameterKey {
    pub fn name(self) -> &'static str {
        match self {
            ParameterKey::StartTime => "StartTime",
            ParameterKey::EndTime => "EndTime",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterValue {
    Timestamp(NaiveDateTime),
}

type ParameterParser = fn(&ExecutionParameter) -> Result<ParameterValue, AppError>;

pub struct ParameterEntry {
    pub key: ParameterKey,
    pub parse: ParameterParser,
}

pub const PARAMETER_TABLE: &[ParameterEntry] = &[
    ParameterEntry { key: ParameterKey::StartTime, parse: parse_timestamp },
    ParameterEntry { key: ParameterKey::EndTime, parse: parse_timestamp },
];

/// Find the table entry for a raw parameter key.
pub fn lookup(name: &str) -> Option<&'static ParameterEntry> {
    PARAMETER_TABLE.iter().find(|entry| entry.key.name() == name)
}

fn parse_timestamp(param: &ExecutionParameter) -> Result<ParameterValue, AppError> {
    param
        .value
        .as_deref()
        .and_then(parse_case_timestamp)
        .map(ParameterValue::Timestamp)
        .ok_or_else(|| AppError::InvalidTimestamp {
            key: param.key.clone(),
            value: param.value.clone().unwrap_or_default(),
        })
}
