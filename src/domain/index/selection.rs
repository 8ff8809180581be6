//! Window selection with bracketing entries.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::TimeWindow;

/// Which entries outside the window are kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BracketPolicy {
    /// Keep the closest entries before and after the window.
    #[default]
    Nearest,
    /// Keep in-window entries only.
    #[serde(rename = "none")]
    WindowOnly,
}

impl FromStr for BracketPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nearest" => Ok(BracketPolicy::Nearest),
            "none" => Ok(BracketPolicy::WindowOnly),
            other => Err(format!("unknown bracket policy '{}' (nearest, none)", other)),
        }
    }
}

impl fmt::Display for BracketPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BracketPolicy::Nearest => write!(f, "nearest"),
            BracketPolicy::WindowOnly => write!(f, "none"),
        }
    }
}

/// Why an entry was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Placement {
    Preceding,
    InWindow,
    Following,
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Placement::Preceding => write!(f, "preceding"),
            Placement::InWindow => write!(f, "in-window"),
            Placement::Following => write!(f, "following"),
        }
    }
}

/// Classify each timestamp against the window; `None` means not selected.
///
/// Under `Nearest`, every entry sharing the latest timestamp before the window
/// and every entry sharing the earliest timestamp after it are kept.
pub fn classify(
    timestamps: &[NaiveDateTime],
    window: &TimeWindow,
    policy: BracketPolicy,
) -> Vec<Option<Placement>> {
    let preceding = timestamps.iter().filter(|ts| **ts < window.start()).max().copied();
    let following = timestamps.iter().filter(|ts| **ts > window.end()).min().copied();

    timestamps
        .iter()
        .map(|ts| {
            if window.contains(ts) {
                Some(Placement::InWindow)
            } else if policy == BracketPolicy::WindowOnly {
                None
            } else if Some(*ts) == preceding {
                Some(Placement::Preceding)
            } else if Some(*ts) == following {
                Some(Placement::Following)
            } else {
                None
            }
        })
        .collect()
}
