//! # Timestamp — canonical version identifier
//!
//! A fixed-width, lexicographically sortable point-in-time value. The
//! canonical encoding is `YYYYMMDDHHmmss` — exactly 14 ASCII digits,
//! zero-padded, 24-hour clock, no timezone suffix. Because the encoding is
//! fixed-width and digit-only, byte comparison of two canonical strings
//! agrees with chronological order, which is what lets versioned filenames
//! sort newest-first with a plain string sort.
//!
//! Values are truncated to whole seconds on construction, so `Eq`/`Ord` on
//! `Timestamp` and byte order on its canonical string are the same total
//! order.
//!
//! ## Example
//!
//! ```rust
//! use timestamp::Timestamp;
//!
//! let ts = Timestamp::parse("20221019140203").unwrap();
//! assert_eq!(ts.to_string(), "20221019140203");
//! assert_eq!(ts.long_string(), "2022-10-19 14:02:03");
//! assert_eq!(ts.simple_date_string(), "2022-10-19");
//! ```

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing a canonical timestamp or a simple date string.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TimestampError {
    /// The input is not exactly 14 ASCII digits.
    #[error("timestamp {0:?} must be exactly 14 digits (YYYYMMDDHHmmss)")]
    Malformed(String),

    /// The digits do not form a valid calendar date or clock time.
    #[error("timestamp {0:?} has out-of-range date or time fields")]
    OutOfRange(String),

    /// The input is not a `YYYY-M-D` date.
    #[error("date {0:?} must be in YYYY-M-D form")]
    MalformedDate(String),
}

/// A point in time with second precision and a canonical 14-digit encoding.
///
/// `Display` renders the canonical form; [`Timestamp::parse`] (or `FromStr`)
/// is its inverse. The derived `Ord` matches byte order of the canonical
/// string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Returns the current local wall-clock instant, truncated to seconds.
    pub fn now() -> Self {
        Self::from_datetime(Local::now().naive_local())
    }

    /// Wraps an explicit instant, truncating any sub-second component.
    pub fn from_datetime(dt: NaiveDateTime) -> Self {
        Timestamp(dt.with_nanosecond(0).unwrap_or(dt))
    }

    /// Parses the canonical `YYYYMMDDHHmmss` form.
    ///
    /// The input must be exactly 14 ASCII digits and the fields must be in
    /// valid calendar/clock ranges (month 1-12, day valid for the month,
    /// hour 0-23, minute/second 0-59).
    pub fn parse(s: &str) -> Result<Self, TimestampError> {
        if s.len() != 14 || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TimestampError::Malformed(s.to_string()));
        }
        let field = |range: std::ops::Range<usize>| -> u32 {
            s.as_bytes()[range]
                .iter()
                .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
        };
        let date = NaiveDate::from_ymd_opt(field(0..4) as i32, field(4..6), field(6..8))
            .ok_or_else(|| TimestampError::OutOfRange(s.to_string()))?;
        let time = NaiveTime::from_hms_opt(field(8..10), field(10..12), field(12..14))
            .ok_or_else(|| TimestampError::OutOfRange(s.to_string()))?;
        Ok(Timestamp(NaiveDateTime::new(date, time)))
    }

    /// Parses a `YYYY-M-D` date (zero-padding optional), time forced to
    /// midnight.
    pub fn parse_simple_date(s: &str) -> Result<Self, TimestampError> {
        let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map_err(|_| TimestampError::MalformedDate(s.to_string()))?;
        Ok(Timestamp(date.and_time(NaiveTime::MIN)))
    }

    /// Returns the wrapped instant.
    #[must_use]
    pub fn datetime(&self) -> NaiveDateTime {
        self.0
    }

    /// Human-readable `YYYY-MM-DD HH:mm:ss` form. Derived and lossy; never
    /// used for ordering or filenames.
    #[must_use]
    pub fn long_string(&self) -> String {
        self.0.format("%Y-%m-%d %H:%M:%S").to_string()
    }

    /// Simple `YYYY-M-D` date form without zero padding. Derived and lossy.
    #[must_use]
    pub fn simple_date_string(&self) -> String {
        self.0.format("%Y-%-m-%-d").to_string()
    }

    /// Returns the same calendar day at midnight.
    #[must_use]
    pub fn start_of_day(&self) -> Self {
        Timestamp(self.0.date().and_time(NaiveTime::MIN))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y%m%d%H%M%S"))
    }
}

impl FromStr for Timestamp {
    type Err = TimestampError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
