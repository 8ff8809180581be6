//! Timestamp derivation for candidate files.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Where a candidate file's timestamp comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampSource {
    /// First date embedded in the file stem.
    #[default]
    Filename,
    /// Filesystem modification time (UTC).
    Modified,
}

impl FromStr for TimestampSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "filename" => Ok(TimestampSource::Filename),
            "modified" => Ok(TimestampSource::Modified),
            other => Err(format!("unknown timestamp source '{}' (filename, modified)", other)),
        }
    }
}

impl fmt::Display for TimestampSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimestampSource::Filename => write!(f, "filename"),
            TimestampSource::Modified => write!(f, "modified"),
        }
    }
}

/// Derive a timestamp from the file stem of `name`.
///
/// Recognized, in scan order over the digit runs of the stem:
/// `YYYYMMDD`, optionally followed by `HH`, `HHMM` or `HHMMSS` in the same run
/// or by a separate six-digit `HHMMSS` run; `YYYY?MM?DD` with any non-digit
/// separators, optionally followed by a six-digit run or by `HH?MM[?SS]`.
/// The first run that forms a valid calendar date wins.
pub fn timestamp_from_filename(name: &str) -> Option<NaiveDateTime> {
    let stem = Path::new(name).file_stem()?.to_str()?;
    let runs = digit_runs(stem);

    for (i, run) in runs.iter().enumerate() {
        if let Some(ts) = compact(run, runs.get(i + 1).copied()) {
            return Some(ts);
        }
        if let Some(ts) = separated(&runs[i..]) {
            return Some(ts);
        }
    }
    None
}

fn digit_runs(s: &str) -> Vec<&str> {
    s.split(|c: char| !c.is_ascii_digit()).filter(|run| !run.is_empty()).collect()
}

/// `YYYYMMDD[HH[MM[SS]]]`, or `YYYYMMDD` followed by an `HHMMSS` run.
/// An invalid time part falls back to midnight.
fn compact(run: &str, next: Option<&str>) -> Option<NaiveDateTime> {
    if !matches!(run.len(), 8 | 10 | 12 | 14) {
        return None;
    }
    let date = ymd(&run[0..4], &run[4..6], &run[6..8])?;

    let time = if run.len() == 8 {
        next.filter(|n| n.len() == 6).and_then(hms_compact)
    } else {
        let clock = &run[8..];
        hms_parts(clock_field(clock, 0), clock_field(clock, 2), clock_field(clock, 4))
    };
    Some(date.and_time(time.unwrap_or(NaiveTime::MIN)))
}

/// `YYYY?MM?DD` with optional trailing time runs.
fn separated(runs: &[&str]) -> Option<NaiveDateTime> {
    let [year, month, day, rest @ ..] = runs else {
        return None;
    };
    if year.len() != 4 || !short(month) || !short(day) {
        return None;
    }
    let date = ymd(year, month, day)?;

    let time = match rest {
        [hms, ..] if hms.len() == 6 => hms_compact(hms),
        [h, m, s, ..] if short(h) && short(m) && short(s) => hms_parts(h, m, s),
        [h, m, ..] if short(h) && short(m) => hms_parts(h, m, "0"),
        _ => None,
    };
    Some(date.and_time(time.unwrap_or(NaiveTime::MIN)))
}

/// Two-digit field at `offset`, or `"0"` when the run stops short.
fn clock_field(clock: &str, offset: usize) -> &str {
    clock.get(offset..offset + 2).unwrap_or("0")
}

fn short(run: &str) -> bool {
    (1..=2).contains(&run.len())
}

fn ymd(year: &str, month: &str, day: &str) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, day.parse().ok()?)
}

fn hms_compact(run: &str) -> Option<NaiveTime> {
    hms_parts(&run[0..2], &run[2..4], &run[4..6])
}

fn hms_parts(hour: &str, minute: &str, second: &str) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hour.parse().ok()?, minute.parse().ok()?, second.parse().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d).unwrap().and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn compact_dates() {
        assert_eq!(timestamp_from_filename("hydro_20190105.nc"), Some(at(2019, 1, 5, 0, 0, 0)));
        assert_eq!(
            timestamp_from_filename("hydro_20190105123000.nc"),
            Some(at(2019, 1, 5, 12, 30, 0))
        );
        assert_eq!(
            timestamp_from_filename("hydro_20190105_123015.hdf5"),
            Some(at(2019, 1, 5, 12, 30, 15))
        );
        assert_eq!(timestamp_from_filename("wrf_2019010518.nc"), Some(at(2019, 1, 5, 18, 0, 0)));
    }

    #[test]
    fn separated_dates() {
        assert_eq!(timestamp_from_filename("2019-01-05.nc"), Some(at(2019, 1, 5, 0, 0, 0)));
        assert_eq!(
            timestamp_from_filename("meteo_2019-01-05T06:30:00.nc"),
            Some(at(2019, 1, 5, 6, 30, 0))
        );
        assert_eq!(
            timestamp_from_filename("meteo_2019-1-5_6-30.nc"),
            Some(at(2019, 1, 5, 6, 30, 0))
        );
    }

    #[test]
    fn period_names_use_the_first_date() {
        assert_eq!(
            timestamp_from_filename("Hydrodynamic_2019-01-05_2019-01-06.hdf5"),
            Some(at(2019, 1, 5, 0, 0, 0))
        );
    }

    #[test]
    fn extension_digits_are_ignored() {
        assert_eq!(timestamp_from_filename("run.hdf5"), None);
    }

    #[test]
    fn skips_runs_that_are_not_dates() {
        assert_eq!(
            timestamp_from_filename("grid12345678_20190105.nc"),
            Some(at(2019, 1, 5, 0, 0, 0))
        );
        assert_eq!(timestamp_from_filename("v2_2019-13-40.nc"), None);
    }

    #[test]
    fn invalid_trailing_time_falls_back_to_midnight() {
        assert_eq!(
            timestamp_from_filename("hydro_20190105_999999.nc"),
            Some(at(2019, 1, 5, 0, 0, 0))
        );
    }

    #[test]
    fn invalid_inline_time_falls_back_to_midnight() {
        assert_eq!(timestamp_from_filename("wrf_2019010599.nc"), Some(at(2019, 1, 5, 0, 0, 0)));
        assert_eq!(
            timestamp_from_filename("wrf_20190105127500.nc"),
            Some(at(2019, 1, 5, 0, 0, 0))
        );
        assert_eq!(timestamp_from_filename("wrf_201901051230.nc"), Some(at(2019, 1, 5, 12, 30, 0)));
    }

    #[test]
    fn names_without_dates() {
        assert_eq!(timestamp_from_filename("README"), None);
        assert_eq!(timestamp_from_filename("bathymetry.nc"), None);
        assert_eq!(timestamp_from_filename(""), None);
    }

    #[test]
    fn source_parses_from_str() {
        assert_eq!("filename".parse::<TimestampSource>(), Ok(TimestampSource::Filename));
        assert_eq!("Modified".parse::<TimestampSource>(), Ok(TimestampSource::Modified));
        assert!("ctime".parse::<TimestampSource>().is_err());
    }
}
