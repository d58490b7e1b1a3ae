//! Explicit publication-date type.
//!
//! Front matter carries dates as strings. Rather than relying on ambient
//! string comparison, dates are parsed into a concrete timestamp with a
//! documented format and ordering rule:
//!
//! | Input format              | Interpretation                     |
//! |---------------------------|------------------------------------|
//! | `YYYY-MM-DD`              | that calendar day at 00:00:00      |
//! | RFC 3339 (with offset)    | the equivalent UTC instant         |
//!
//! Ordering is chronological on the resulting naive UTC timestamp.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Date parsing errors
#[derive(Debug, Error)]
pub enum DateError {
    #[error("unrecognized date `{0}` (expected YYYY-MM-DD or RFC 3339)")]
    Unrecognized(String),
}

/// Publication timestamp parsed from front matter.
///
/// Wraps a naive UTC timestamp so comparisons are plain chronological
/// ordering with no locale or timezone surprises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct PublishDate(NaiveDateTime);

impl FromStr for PublishDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            // and_hms_opt(0, 0, 0) is always valid
            let midnight = date.and_hms_opt(0, 0, 0).unwrap_or_default();
            return Ok(Self(midnight));
        }

        if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(dt.naive_utc()));
        }

        Err(DateError::Unrecognized(s.to_string()))
    }
}

impl fmt::Display for PublishDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}
