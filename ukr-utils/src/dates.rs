//! Text-level date and time helpers.
//!
//! Every function here takes and returns plain strings in the layouts used
//! across the application (`dd.MM.yyyy`, `dd.MM.yyyy HH:mm:ss`, `HH:mm`), and
//! delegates to the value types in [`crate::domain`]. All of them are pure and
//! reentrant.

use chrono::Local;
use std::cmp::Ordering;

use crate::domain::{CalendarDate, CalendarDateTime, DateError, DateLayout, TimeOfDay};

pub use crate::domain::{elapsed_since, format_elapsed, format_elapsed_nanos};

/// Longest text [`is_valid_date`] accepts: the width of `dd.MM.yyyy`.
const MAX_DATE_LEN: usize = 10;

/// Parse a date, trying `dd.MM.yyyy`, then `MM.yyyy`, then `yyyy`.
///
/// Only the start of `text` is read, so a trailing time is ignored. Empty
/// text means "no date" and yields `Ok(None)`.
pub fn parse_date(text: &str) -> Result<Option<CalendarDate>, DateError> {
    CalendarDate::parse(text)
}

/// Render a date as `dd.MM.yyyy`; no date renders as nothing.
pub fn format_date(date: Option<CalendarDate>) -> Option<String> {
    date.map(|d| d.to_string())
}

/// Returns true if `text` is present, at most 10 characters long, and parses
/// as a date.
///
/// Parsing ignores text after the date; the length limit is what rejects
/// trailing junk such as "22.06.2022,".
///
/// # Examples
///
/// ```
/// use ukr_utils::dates::is_valid_date;
///
/// assert!(is_valid_date(Some("22.06.2022")));
/// assert!(is_valid_date(Some("06.2022")));
/// assert!(!is_valid_date(Some("22.06.2022,")));
/// assert!(!is_valid_date(Some("no date")));
/// assert!(!is_valid_date(Some("")));
/// assert!(!is_valid_date(None));
/// ```
pub fn is_valid_date(text: Option<&str>) -> bool {
    match text {
        Some(text) if text.chars().count() <= MAX_DATE_LEN => {
            matches!(CalendarDate::parse(text), Ok(Some(_)))
        }
        _ => false,
    }
}

/// Shift a date by `days`; negative values go backwards.
pub fn add_days(date: CalendarDate, days: i64) -> Result<CalendarDate, DateError> {
    date.add_days(days)
}

/// Shift a date by `months`, clamping the day to the end of the month.
pub fn add_months(date: CalendarDate, months: i32) -> Result<CalendarDate, DateError> {
    date.add_months(months)
}

/// Signed day count from `begin` to `end`.
///
/// Returns `None` when either date is absent, so an absent input can't be
/// confused with a span of minus one day.
pub fn days_between(begin: Option<CalendarDate>, end: Option<CalendarDate>) -> Option<i64> {
    Some(begin?.days_until(end?))
}

/// Monday of the ISO week containing `date`.
pub fn week_start(date: CalendarDate) -> Result<CalendarDate, DateError> {
    date.week_start()
}

/// Sunday of the ISO week containing `date`.
pub fn week_end(date: CalendarDate) -> Result<CalendarDate, DateError> {
    date.week_end()
}

/// Returns the third dot-separated component of `text` as a year.
///
/// # Examples
///
/// ```
/// use ukr_utils::dates::year_of;
///
/// assert_eq!(year_of("22.06.2022").unwrap(), 2022);
/// assert!(year_of("06.2022").is_err());
/// assert!(year_of("22.06.20x2").is_err());
/// ```
pub fn year_of(text: &str) -> Result<i32, DateError> {
    let component = text
        .split('.')
        .nth(2)
        .ok_or_else(|| DateError::format(text, DateLayout::Long.pattern()))?;

    component.parse().map_err(|_| DateError::Number {
        input: component.to_string(),
    })
}

/// Two-digit day of a `dd.MM.yyyy` date.
pub fn day_of(text: &str) -> Result<String, DateError> {
    let date = CalendarDate::parse_long(text)?;
    Ok(format!("{:02}", date.day()))
}

/// Ukrainian genitive month name of a `dd.MM.yyyy` date, e.g. "березня".
pub fn month_genitive(text: &str) -> Result<&'static str, DateError> {
    Ok(CalendarDate::parse_long(text)?.month_genitive())
}

/// Four-digit year of a `dd.MM.yyyy` date.
pub fn year_text(text: &str) -> Result<String, DateError> {
    let date = CalendarDate::parse_long(text)?;
    Ok(format!("{:04}", date.year()))
}

/// Returns true if `a` is strictly before `b`.
///
/// Both go through the [`parse_date`] fallback; empty text is an error since
/// there is nothing to compare.
pub fn is_date_before(a: &str, b: &str) -> Result<bool, DateError> {
    Ok(a.parse::<CalendarDate>()? < b.parse::<CalendarDate>()?)
}

/// Returns true if `a` is before or on the same day as `b`.
pub fn is_date_on_or_before(a: &str, b: &str) -> Result<bool, DateError> {
    Ok(a.parse::<CalendarDate>()? <= b.parse::<CalendarDate>()?)
}

/// Convert a date to the Postgres layout `yyyy-MM-dd`.
pub fn to_postgres(text: &str) -> Result<String, DateError> {
    Ok(text.parse::<CalendarDate>()?.to_postgres())
}

/// Convert a Postgres `yyyy-MM-dd` date to `dd.MM.yyyy`.
pub fn from_postgres(text: &str) -> Result<String, DateError> {
    Ok(DateLayout::Postgres.parse(text)?.to_string())
}

/// Returns the time part of a "date time" string: everything after the first
/// space.
///
/// # Examples
///
/// ```
/// use ukr_utils::dates::time_of_day_from_date_time;
///
/// assert_eq!(time_of_day_from_date_time("22.06.2022 14:30").unwrap(), "14:30");
/// assert!(time_of_day_from_date_time("22.06.2022").is_err());
/// ```
pub fn time_of_day_from_date_time(text: &str) -> Result<&str, DateError> {
    match text.split_once(' ') {
        Some((_, time)) if !time.is_empty() => Ok(time),
        _ => Err(DateError::format(
            text,
            "dd.MM.yyyy HH:mm:ss or dd.MM.yyyy HH:mm",
        )),
    }
}

/// Add `minutes` to an `HH:mm` or `HH:mm:ss` time, wrapping past midnight.
///
/// Zero or negative offsets return `time` untouched, without parsing it.
pub fn add_minutes(time: &str, minutes: i64) -> Result<String, DateError> {
    if minutes <= 0 {
        return Ok(time.to_string());
    }
    Ok(TimeOfDay::parse(time)?.add_minutes(minutes).to_string())
}

/// Returns true if `a` is strictly earlier in the day than `b`.
pub fn is_time_before(a: &str, b: &str) -> Result<bool, DateError> {
    Ok(TimeOfDay::parse(a)?.seconds_of_day() < TimeOfDay::parse(b)?.seconds_of_day())
}

/// Returns true if `a` is strictly later in the day than `b`.
///
/// Equal times are neither before nor after each other.
pub fn is_time_after(a: &str, b: &str) -> Result<bool, DateError> {
    Ok(TimeOfDay::parse(a)?.seconds_of_day() > TimeOfDay::parse(b)?.seconds_of_day())
}

/// Compare two `dd.MM.yyyy HH:mm:ss` strings.
///
/// `Less`, `Equal` and `Greater` correspond to -1, 0 and 1. No layout
/// fallback is applied.
pub fn compare_date_times(a: &str, b: &str) -> Result<Ordering, DateError> {
    Ok(CalendarDateTime::parse(a)?.cmp(&CalendarDateTime::parse(b)?))
}

/// Today's date on the local clock.
pub fn today() -> CalendarDate {
    CalendarDate::new(Local::now().date_naive())
}

/// Today's date as `dd.MM.yyyy`.
pub fn today_text() -> String {
    today().to_string()
}

/// Current local time as `HH:mm:ss`.
pub fn current_time_text() -> String {
    now_with_format("%H:%M:%S")
}

/// Current local date and time as `dd.MM.yyyy HH:mm`.
pub fn current_date_time_text() -> String {
    now_with_format("%d.%m.%Y %H:%M")
}

/// Current local date and time as `dd.MM.yyyy HH:mm:ss`.
pub fn current_date_time_seconds_text() -> String {
    now_with_format("%d.%m.%Y %H:%M:%S")
}

/// Current local date and time as `yyyy.MM.dd HH:mm`, which sorts as text.
pub fn current_date_time_desc_text() -> String {
    now_with_format("%Y.%m.%d %H:%M")
}

/// Current local date and time as `yyyy.MM.dd HH:mm:ss`.
pub fn current_date_time_seconds_desc_text() -> String {
    now_with_format("%Y.%m.%d %H:%M:%S")
}

fn now_with_format(format: &str) -> String {
    Local::now().format(format).to_string()
}
