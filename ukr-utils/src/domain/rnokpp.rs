//! RNOKPP (Ukrainian taxpayer registration number) type.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::date::CalendarDate;
use super::error::ValidationError;

/// Weights applied to the first nine digits when computing the control digit.
const WEIGHTS: [i32; 9] = [-1, 5, 7, 9, 4, 6, 10, 5, 7];

/// Day zero of the embedded date.
const EPOCH: (i32, u32, u32) = (1899, 12, 31);

/// Gender encoded in the ninth digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gender::Male => f.write_str("male"),
            Gender::Female => f.write_str("female"),
        }
    }
}

/// A structurally valid RNOKPP: exactly 10 ASCII decimal digits.
///
/// The layout is:
/// - digits 0-4: days since 31.12.1899 (the date of birth)
/// - digit 8: gender, odd for male and even for female
/// - digit 9: control digit
///
/// Parsing only checks the shape. The control digit is checked separately
/// by [`Rnokpp::is_checksum_valid`], so codes with a wrong control digit can
/// still be decoded.
///
/// # Examples
///
/// ```
/// use ukr_utils::domain::{Gender, Rnokpp};
///
/// let code = Rnokpp::parse("3184710691").unwrap();
/// assert!(code.is_checksum_valid());
/// assert_eq!(code.date_of_issue(), "12.03.1987");
/// assert_eq!(code.gender(), Gender::Male);
///
/// // Wrong shape is rejected
/// assert!(Rnokpp::parse("318471069").is_err());
/// assert!(Rnokpp::parse("318471069X").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rnokpp([u8; 10]);

impl Rnokpp {
    /// Parse an RNOKPP from a string of exactly 10 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let bytes: [u8; 10] = s
            .as_bytes()
            .try_into()
            .map_err(|_| ValidationError::new(s))?;

        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(ValidationError::new(s));
        }

        Ok(Rnokpp(bytes))
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store ASCII digits
        std::str::from_utf8(&self.0).unwrap()
    }

    fn digit(&self, index: usize) -> u8 {
        self.0[index] - b'0'
    }

    /// Computes the expected control digit from the first nine digits.
    ///
    /// The weighted sum can be negative (the first weight is -1). The
    /// remainder truncates towards zero, so a negative sum yields a negative
    /// control value that no digit can match.
    pub fn control_digit(&self) -> i32 {
        let control_sum: i32 = WEIGHTS
            .iter()
            .enumerate()
            .map(|(i, weight)| i32::from(self.digit(i)) * weight)
            .sum();

        (control_sum % 11) % 10
    }

    /// Returns whether the last digit matches the computed control digit.
    pub fn is_checksum_valid(&self) -> bool {
        self.control_digit() == i32::from(self.digit(9))
    }

    /// Returns the date encoded in the first five digits.
    pub fn issue_date(&self) -> CalendarDate {
        let offset: u64 = (0..5).fold(0, |acc, i| acc * 10 + u64::from(self.digit(i)));
        let (year, month, day) = EPOCH;
        // At most 99999 days past 1899, always within chrono's range
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .and_then(|epoch| epoch.checked_add_days(chrono::Days::new(offset)))
            .expect("RNOKPP date offset within range");
        CalendarDate::new(date)
    }

    /// Returns the encoded date in the canonical `dd.MM.yyyy` form.
    pub fn date_of_issue(&self) -> String {
        self.issue_date().to_string()
    }

    /// Returns the gender encoded in the ninth digit.
    pub fn gender(&self) -> Gender {
        if self.digit(8) % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl fmt::Debug for Rnokpp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rnokpp({})", self.as_str())
    }
}

impl fmt::Display for Rnokpp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
