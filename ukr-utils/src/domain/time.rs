//! Time-of-day handling.
//!
//! Times arrive as "HH:MM" or "HH:MM:SS" strings with no date attached. They
//! are compared by seconds since midnight and shifted with wraparound on a
//! 24-hour clock.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;
use std::str::FromStr;

use super::error::DateError;

const PATTERN: &str = "HH:mm:ss or HH:mm";

/// A time of day without a date.
///
/// Displays as `HH:MM` when the seconds are zero and `HH:MM:SS` otherwise.
///
/// # Examples
///
/// ```
/// use ukr_utils::domain::TimeOfDay;
///
/// let time = TimeOfDay::parse("23:20").unwrap();
/// assert_eq!(time.add_minutes(5).to_string(), "23:25");
///
/// // Wraps past midnight
/// assert_eq!(time.add_minutes(45).to_string(), "00:05");
///
/// // Invalid formats
/// assert!(TimeOfDay::parse("2320").is_err());
/// assert!(TimeOfDay::parse("24:00").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    pub fn new(time: NaiveTime) -> Self {
        Self(time)
    }

    /// Parse a time from "HH:MM" or "HH:MM:SS".
    pub fn parse(s: &str) -> Result<Self, DateError> {
        let fail = || DateError::format(s, PATTERN);
        let bytes = s.as_bytes();

        // HH:MM or HH:MM:SS
        if bytes.len() != 5 && bytes.len() != 8 {
            return Err(fail());
        }
        if bytes[2] != b':' || (bytes.len() == 8 && bytes[5] != b':') {
            return Err(fail());
        }

        let hour = parse_two_digits(&bytes[0..2]).ok_or_else(fail)?;
        let minute = parse_two_digits(&bytes[3..5]).ok_or_else(fail)?;
        let second = match bytes.get(6..8) {
            Some(digits) => parse_two_digits(digits).ok_or_else(fail)?,
            None => 0,
        };

        // Rejects hour > 23, minute > 59, second > 59
        NaiveTime::from_hms_opt(hour, minute, second)
            .map(Self)
            .ok_or_else(fail)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Seconds since midnight.
    pub fn seconds_of_day(&self) -> u32 {
        self.0.num_seconds_from_midnight()
    }

    /// Add `minutes`, wrapping around midnight. Negative values go backwards.
    pub fn add_minutes(self, minutes: i64) -> Self {
        // Reduce first so the Duration can never overflow
        let minutes = minutes.rem_euclid(24 * 60);
        let (time, _days) = self
            .0
            .overflowing_add_signed(Duration::minutes(minutes));
        Self(time)
    }

    /// Returns the underlying chrono time.
    pub fn naive(&self) -> NaiveTime {
        self.0
    }
}

impl FromStr for TimeOfDay {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "TimeOfDay({:02}:{:02}:{:02})",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())?;
        if self.second() != 0 {
            write!(f, ":{:02}", self.second())?;
        }
        Ok(())
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}
