//! Dates with a time of day, in the strict `dd.MM.yyyy HH:mm:ss` layout.

use chrono::{NaiveDateTime, NaiveTime};
use std::fmt;
use std::str::FromStr;

use super::date::CalendarDate;
use super::error::DateError;

const PATTERN: &str = "dd.MM.yyyy HH:mm:ss";
const STRFTIME: &str = "%d.%m.%Y %H:%M:%S";

/// A calendar date with hour, minute and second.
///
/// Unlike [`CalendarDate`], there is no layout fallback: the text must be
/// exactly `dd.MM.yyyy HH:mm:ss`.
///
/// # Examples
///
/// ```
/// use ukr_utils::domain::CalendarDateTime;
///
/// let a = CalendarDateTime::parse("27.04.2024 14:46:29").unwrap();
/// let b = CalendarDateTime::parse("27.04.2024 14:46:30").unwrap();
/// assert!(a < b);
/// assert_eq!(a.to_string(), "27.04.2024 14:46:29");
///
/// // Seconds are required
/// assert!(CalendarDateTime::parse("27.04.2024 14:46").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDateTime(NaiveDateTime);

impl CalendarDateTime {
    pub fn new(date_time: NaiveDateTime) -> Self {
        Self(date_time)
    }

    /// Parse strictly as `dd.MM.yyyy HH:mm:ss`.
    pub fn parse(s: &str) -> Result<Self, DateError> {
        NaiveDateTime::parse_from_str(s, STRFTIME)
            .map(Self)
            .map_err(|_| DateError::format(s, PATTERN))
    }

    /// Returns the date, discarding the time of day.
    pub fn date(&self) -> CalendarDate {
        CalendarDate::new(self.0.date())
    }

    /// Returns the underlying chrono value.
    pub fn naive(&self) -> NaiveDateTime {
        self.0
    }
}

impl From<CalendarDate> for CalendarDateTime {
    /// Midnight at the start of `date`.
    fn from(date: CalendarDate) -> Self {
        Self(date.naive().and_time(NaiveTime::MIN))
    }
}

impl FromStr for CalendarDateTime {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Debug for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDateTime({})", self.0)
    }
}

impl fmt::Display for CalendarDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(STRFTIME))
    }
}
