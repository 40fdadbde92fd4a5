//! Calendar dates and the textual layouts they are parsed from.
//!
//! Dates arrive as "dd.MM.yyyy" text, sometimes truncated to "MM.yyyy" or a
//! bare year, and sometimes followed by a time or other trailing text.
//! [`CalendarDate::parse`] tries each layout in a fixed priority order and
//! reads the first one that matches the start of the input.

use chrono::format::{Parsed, StrftimeItems, parse};
use chrono::{Datelike, Days, Months, NaiveDate, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::error::DateError;
use super::month;

/// A textual date layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateLayout {
    /// `dd.MM.yyyy`, the canonical long form
    Long,
    /// `MM.yyyy`; the day defaults to the first of the month
    MonthYear,
    /// `yyyy`; the date defaults to 1 January
    Year,
    /// `yyyy-MM-dd`, as stored in Postgres `date` columns
    Postgres,
}

impl DateLayout {
    /// Layouts tried by [`CalendarDate::parse`], in priority order.
    pub const FALLBACK: [DateLayout; 3] =
        [DateLayout::Long, DateLayout::MonthYear, DateLayout::Year];

    /// Returns the layout pattern, e.g. `dd.MM.yyyy`.
    pub fn pattern(self) -> &'static str {
        match self {
            DateLayout::Long => "dd.MM.yyyy",
            DateLayout::MonthYear => "MM.yyyy",
            DateLayout::Year => "yyyy",
            DateLayout::Postgres => "yyyy-MM-dd",
        }
    }

    fn strftime(self) -> &'static str {
        match self {
            DateLayout::Long => "%d.%m.%Y",
            DateLayout::MonthYear => "%m.%Y",
            DateLayout::Year => "%Y",
            DateLayout::Postgres => "%Y-%m-%d",
        }
    }

    /// Byte shape of the layout: `d` is an ASCII digit, anything else is a
    /// literal separator.
    fn shape(self) -> &'static [u8] {
        match self {
            DateLayout::Long => b"dd.dd.dddd",
            DateLayout::MonthYear => b"dd.dddd",
            DateLayout::Year => b"dddd",
            DateLayout::Postgres => b"dddd-dd-dd",
        }
    }

    /// Returns the start of `s` if it has this layout's shape.
    fn leading_match(self, s: &str) -> Option<&str> {
        let shape = self.shape();
        let head = s.as_bytes().get(..shape.len())?;
        let fits = shape.iter().zip(head).all(|(&want, &got)| match want {
            b'd' => got.is_ascii_digit(),
            separator => got == separator,
        });
        // All-ASCII head, so the cut is on a char boundary
        fits.then(|| &s[..shape.len()])
    }

    /// Resolve text of exactly this layout's shape to a date.
    fn resolve(self, head: &str) -> Option<CalendarDate> {
        let mut parsed = Parsed::new();
        parse(&mut parsed, head, StrftimeItems::new(self.strftime())).ok()?;

        match self {
            DateLayout::MonthYear => parsed.set_day(1).ok()?,
            DateLayout::Year => {
                parsed.set_month(1).ok()?;
                parsed.set_day(1).ok()?;
            }
            DateLayout::Long | DateLayout::Postgres => {}
        }

        parsed.to_naive_date().ok().map(CalendarDate)
    }

    /// Parse the start of `s` with this layout. Anything after the layout's
    /// width is ignored.
    ///
    /// Every field must be zero-padded ASCII digits; signs and whitespace
    /// are rejected. Fields the layout omits default to the start of the
    /// period.
    ///
    /// # Examples
    ///
    /// ```
    /// use ukr_utils::domain::DateLayout;
    ///
    /// let date = DateLayout::MonthYear.parse("03.2022").unwrap();
    /// assert_eq!(date.to_string(), "01.03.2022");
    ///
    /// let date = DateLayout::Long.parse("22.06.2022 10:00").unwrap();
    /// assert_eq!(date.to_string(), "22.06.2022");
    ///
    /// assert!(DateLayout::Long.parse("03.2022").is_err());
    /// assert!(DateLayout::Long.parse("31.02.2022").is_err());
    /// assert!(DateLayout::Year.parse(" 2022").is_err());
    /// ```
    pub fn parse(self, s: &str) -> Result<CalendarDate, DateError> {
        self.leading_match(s)
            .and_then(|head| self.resolve(head))
            .ok_or_else(|| DateError::format(s, self.pattern()))
    }
}

impl fmt::Display for DateLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.pattern())
    }
}

fn fallback_patterns() -> String {
    let [long, month_year, year] = DateLayout::FALLBACK.map(DateLayout::pattern);
    format!("{long}, {month_year} or {year}")
}

/// A calendar date without a time of day.
///
/// Displays in the canonical long form `dd.MM.yyyy`.
///
/// # Examples
///
/// ```
/// use ukr_utils::domain::CalendarDate;
///
/// let date = CalendarDate::parse("26.02.2022").unwrap().unwrap();
/// assert_eq!(date.week_start().unwrap().to_string(), "21.02.2022");
/// assert_eq!(date.add_days(3).unwrap().to_string(), "01.03.2022");
///
/// // Empty text is "no date", not an error
/// assert_eq!(CalendarDate::parse("").unwrap(), None);
/// assert!(CalendarDate::parse("no date").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Wrap a chrono date.
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// Build a date from its components, or `None` if no such day exists.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self)
    }

    /// Parse with the layout fallback: `dd.MM.yyyy`, then `MM.yyyy`, then
    /// `yyyy`.
    ///
    /// The first layout whose shape matches the start of the input is used
    /// and the rest of the input is ignored, so "22.06.2022 10:00" is
    /// 22.06.2022. If that layout names an impossible day, such as
    /// 31.02.2022, parsing fails rather than falling back. Empty input
    /// yields `Ok(None)`. Input is not trimmed.
    pub fn parse(s: &str) -> Result<Option<Self>, DateError> {
        if s.is_empty() {
            return Ok(None);
        }

        let (layout, head) = DateLayout::FALLBACK
            .iter()
            .find_map(|&layout| layout.leading_match(s).map(|head| (layout, head)))
            .ok_or_else(|| DateError::format(s, fallback_patterns()))?;

        layout
            .resolve(head)
            .map(Some)
            .ok_or_else(|| DateError::format(s, layout.pattern()))
    }

    /// Parse in the canonical long form `dd.MM.yyyy`, with no fallback.
    pub fn parse_long(s: &str) -> Result<Self, DateError> {
        DateLayout::Long.parse(s)
    }

    /// Returns the underlying chrono date.
    pub fn naive(&self) -> NaiveDate {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the Ukrainian genitive name of this date's month.
    pub fn month_genitive(&self) -> &'static str {
        month::GENITIVE[self.0.month0() as usize]
    }

    /// Add `days` calendar days; negative values go backwards.
    pub fn add_days(self, days: i64) -> Result<Self, DateError> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        shifted
            .map(Self)
            .ok_or_else(|| DateError::out_of_range("add days"))
    }

    /// Add `months` calendar months; negative values go backwards.
    ///
    /// The day of month is clamped to the last day of the target month, so
    /// 31.01.2022 plus one month is 28.02.2022.
    pub fn add_months(self, months: i32) -> Result<Self, DateError> {
        let shifted = if months >= 0 {
            self.0.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.0.checked_sub_months(Months::new(months.unsigned_abs()))
        };
        shifted
            .map(Self)
            .ok_or_else(|| DateError::out_of_range("add months"))
    }

    /// Returns the signed number of days from `self` to `end`.
    ///
    /// Negative if `end` is before `self`.
    pub fn days_until(self, end: Self) -> i64 {
        end.0.signed_duration_since(self.0).num_days()
    }

    /// Returns the Monday of this date's ISO week (this date if it is a
    /// Monday).
    pub fn week_start(self) -> Result<Self, DateError> {
        let mut day = self.0;
        while day.weekday() != Weekday::Mon {
            day = day
                .pred_opt()
                .ok_or_else(|| DateError::out_of_range("week start"))?;
        }
        Ok(Self(day))
    }

    /// Returns the Sunday of this date's ISO week (this date if it is a
    /// Sunday).
    pub fn week_end(self) -> Result<Self, DateError> {
        let mut day = self.0;
        while day.weekday() != Weekday::Sun {
            day = day
                .succ_opt()
                .ok_or_else(|| DateError::out_of_range("week end"))?;
        }
        Ok(Self(day))
    }

    /// Render in the Postgres layout `yyyy-MM-dd`.
    pub fn to_postgres(&self) -> String {
        self.0.format(DateLayout::Postgres.strftime()).to_string()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl FromStr for CalendarDate {
    type Err = DateError;

    /// Like [`CalendarDate::parse`], but empty input is an error.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)?.ok_or_else(|| DateError::format(s, fallback_patterns()))
    }
}

impl fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CalendarDate({})", self.0)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DateLayout::Long.strftime()))
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> CalendarDate {
        CalendarDate::parse(s).unwrap().unwrap()
    }

    fn ymd(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn parse_long_form() {
        assert_eq!(date("19.04.2022"), ymd(2022, 4, 19));
        assert_eq!(date("01.01.1900"), ymd(1900, 1, 1));
        assert_eq!(date("31.12.2023"), ymd(2023, 12, 31));
    }

    #[test]
    fn month_year_defaults_to_first_of_month() {
        assert_eq!(date("03.2022"), ymd(2022, 3, 1));
        assert_eq!(date("12.2023"), ymd(2023, 12, 1));
    }

    #[test]
    fn year_defaults_to_first_of_january() {
        assert_eq!(date("2022"), ymd(2022, 1, 1));
    }

    #[test]
    fn empty_is_absent() {
        assert_eq!(CalendarDate::parse("").unwrap(), None);
    }

    #[test]
    fn reject_unparseable() {
        for s in ["no date", " ", "13.2022", "ab.cd.efgh", "2.6.2022", "22/06/2022"] {
            assert!(CalendarDate::parse(s).is_err(), "{s:?} should not parse");
        }
    }

    #[test]
    fn reads_leading_date() {
        assert_eq!(date("22.06.2022 10:00"), ymd(2022, 6, 22));
        assert_eq!(date("22.06.2022,"), ymd(2022, 6, 22));
        assert_eq!(date("22.06.20221"), ymd(2022, 6, 22));
        assert_eq!(date("06.2022 р."), ymd(2022, 6, 1));
        // Only the year has the shape of a layout here
        assert_eq!(date("2022-06-22"), ymd(2022, 1, 1));
    }

    #[test]
    fn reject_signs_and_whitespace() {
        for s in [" 2022", "+2022", "-2022", "22. 06.2022", " 22.06.2022", "\t06.2022"] {
            assert!(CalendarDate::parse(s).is_err(), "{s:?} should not parse");
        }
        assert!(DateLayout::Postgres.parse("-2022-06-22").is_err());
        assert!(DateLayout::Postgres.parse("2022-+6-22").is_err());
    }

    #[test]
    fn impossible_long_form_does_not_fall_back() {
        // Would otherwise read as the year 31 or 32
        assert_eq!(
            CalendarDate::parse("31.02.2022"),
            Err(DateError::Format {
                input: "31.02.2022".into(),
                expected: "dd.MM.yyyy".into(),
            })
        );
        assert!(CalendarDate::parse("32.01.2022 10:00").is_err());
    }

    #[test]
    fn reject_impossible_dates() {
        assert!(CalendarDate::parse("31.02.2022").is_err());
        assert!(CalendarDate::parse("32.01.2022").is_err());
        assert!(CalendarDate::parse("29.02.2023").is_err());
        assert!(CalendarDate::parse("29.02.2024").is_ok());
    }

    #[test]
    fn parse_error_lists_layouts() {
        let err = CalendarDate::parse("no date").unwrap_err();
        assert_eq!(
            err,
            DateError::Format {
                input: "no date".into(),
                expected: "dd.MM.yyyy, MM.yyyy or yyyy".into(),
            }
        );
    }

    #[test]
    fn from_str_rejects_empty() {
        assert!("".parse::<CalendarDate>().is_err());
        assert_eq!("2022".parse::<CalendarDate>().unwrap(), ymd(2022, 1, 1));
    }

    #[test]
    fn display_is_zero_padded() {
        assert_eq!(ymd(2022, 4, 9).to_string(), "09.04.2022");
        assert_eq!(ymd(987, 1, 2).to_string(), "02.01.0987");
    }

    #[test]
    fn debug_format() {
        assert_eq!(format!("{:?}", ymd(2022, 4, 9)), "CalendarDate(2022-04-09)");
    }

    #[test]
    fn add_days_crosses_boundaries() {
        assert_eq!(date("19.04.2022").add_days(-1).unwrap(), date("18.04.2022"));
        assert_eq!(date("31.12.2022").add_days(1).unwrap(), date("01.01.2023"));
        assert_eq!(date("01.03.2024").add_days(-1).unwrap(), date("29.02.2024"));
        assert_eq!(date("01.03.2022").add_days(0).unwrap(), date("01.03.2022"));
    }

    #[test]
    fn add_days_out_of_range() {
        assert_eq!(
            date("01.01.2022").add_days(i64::MAX),
            Err(DateError::out_of_range("add days"))
        );
        assert!(date("01.01.2022").add_days(i64::MIN).is_err());
    }

    #[test]
    fn add_months_clamps_day() {
        assert_eq!(date("31.01.2022").add_months(1).unwrap(), date("28.02.2022"));
        assert_eq!(date("31.03.2024").add_months(-1).unwrap(), date("29.02.2024"));
        assert_eq!(date("15.11.2022").add_months(3).unwrap(), date("15.02.2023"));
        assert_eq!(date("15.02.2023").add_months(-14).unwrap(), date("15.12.2021"));
    }

    #[test]
    fn days_until_counts_calendar_days() {
        assert_eq!(date("12.04.2022").days_until(date("12.05.2022")), 30);
        assert_eq!(date("12.05.2022").days_until(date("12.06.2022")), 31);
        assert_eq!(date("12.06.2022").days_until(date("12.05.2022")), -31);
        assert_eq!(date("12.06.2022").days_until(date("12.06.2022")), 0);
    }

    #[test]
    fn week_start_walks_back_to_monday() {
        assert_eq!(date("26.02.2022").week_start().unwrap(), date("21.02.2022"));
        assert_eq!(date("28.02.2022").week_start().unwrap(), date("28.02.2022"));
        assert_eq!(date("01.03.2022").week_start().unwrap(), date("28.02.2022"));
        assert_eq!(date("04.03.2022").week_start().unwrap(), date("28.02.2022"));
        assert_eq!(date("06.03.2022").week_start().unwrap(), date("28.02.2022"));
    }

    #[test]
    fn week_end_walks_forward_to_sunday() {
        assert_eq!(date("28.02.2022").week_end().unwrap(), date("06.03.2022"));
        assert_eq!(date("27.02.2022").week_end().unwrap(), date("27.02.2022"));
        assert_eq!(date("31.12.2021").week_end().unwrap(), date("02.01.2022"));
    }

    #[test]
    fn month_genitive_every_month() {
        let names: Vec<_> = (1..=12)
            .map(|m| ymd(2022, m, 1).month_genitive())
            .collect();
        assert_eq!(names, month::GENITIVE);
    }

    #[test]
    fn month_genitive() {
        assert_eq!(date("12.01.2022").month_genitive(), "січня");
        assert_eq!(date("12.03.2022").month_genitive(), "березня");
        assert_eq!(date("12.12.2022").month_genitive(), "грудня");
    }

    #[test]
    fn postgres_layout() {
        assert_eq!(date("09.04.2022").to_postgres(), "2022-04-09");
        assert_eq!(DateLayout::Postgres.parse("2022-04-09").unwrap(), ymd(2022, 4, 9));
        assert!(DateLayout::Postgres.parse("09.04.2022").is_err());
    }

    #[test]
    fn serde_uses_long_form() {
        let json = serde_json::to_string(&ymd(2022, 4, 9)).unwrap();
        assert_eq!(json, "\"09.04.2022\"");

        let back: CalendarDate = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ymd(2022, 4, 9));

        assert!(serde_json::from_str::<CalendarDate>("\"not a date\"").is_err());
    }

    #[test]
    fn ordering() {
        assert!(date("21.06.2022") < date("22.06.2022"));
        assert!(date("21.06.2022") < date("21.07.2022"));
        assert!(date("21.06.2022") > date("21.06.2021"));
    }
}
