//! Simulation time window and the case timestamp literal.

use std::fmt;

use chrono::NaiveDateTime;

use crate::domain::AppError;

/// Timestamp literal used by case definitions: `YYYY MM DD HH MM SS`.
pub const CASE_TIMESTAMP_FORMAT: &str = "%Y %m %d %H %M %S";

/// Rendering used in reports and manifests.
pub const DISPLAY_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Parse a case timestamp literal.
///
/// Requires exactly six space-separated integer fields: a four-digit year,
/// then five one- or two-digit fields. Zero padding is optional but every
/// field must be a valid calendar/clock component.
pub fn parse_case_timestamp(value: &str) -> Option<NaiveDateTime> {
    let fields: Vec<&str> = value.split_whitespace().collect();
    let [year, rest @ ..] = fields.as_slice() else {
        return None;
    };
    if rest.len() != 5
        || !fields.iter().all(|f| f.chars().all(|c| c.is_ascii_digit()))
        || year.len() != 4
        || !rest.iter().all(|f| (1..=2).contains(&f.len()))
    {
        return None;
    }
    NaiveDateTime::parse_from_str(&fields.join(" "), CASE_TIMESTAMP_FORMAT).ok()
}

pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format(DISPLAY_TIMESTAMP_FORMAT).to_string()
}

/// Inclusive `[start, end]` interval of simulated time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    start: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, AppError> {
        if start > end {
            return Err(AppError::InvalidTimeWindow {
                start: format_timestamp(&start),
                end: format_timestamp(&end),
            });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        *timestamp >= self.start && *timestamp <= self.end
    }
}

impl fmt::Display for TimeWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", format_timestamp(&self.start), format_timestamp(&self.end))
    }
}
