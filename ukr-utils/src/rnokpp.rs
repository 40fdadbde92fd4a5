//! RNOKPP validation and decoding over raw text.
//!
//! [`is_valid`] is a cheap probe for use in conditionals and never fails.
//! [`date_of_issue`] and [`gender`] re-check the shape on every call and
//! report a [`ValidationError`] when the code is not 10 digits. They do not
//! check the control digit.

use crate::domain::Rnokpp;

pub use crate::domain::{Gender, ValidationError};

/// Returns true if `code` is 10 decimal digits with a matching control digit.
///
/// # Examples
///
/// ```
/// use ukr_utils::rnokpp::is_valid;
///
/// assert!(is_valid(Some("3184710691")));
/// assert!(!is_valid(Some("3184710690")));
/// assert!(!is_valid(Some("")));
/// assert!(!is_valid(None));
/// ```
pub fn is_valid(code: Option<&str>) -> bool {
    code.and_then(|c| Rnokpp::parse(c).ok())
        .is_some_and(|c| c.is_checksum_valid())
}

/// Decode the date of birth as `dd.MM.yyyy`.
///
/// # Examples
///
/// ```
/// use ukr_utils::rnokpp::date_of_issue;
///
/// assert_eq!(date_of_issue("3184710691").unwrap(), "12.03.1987");
/// assert!(date_of_issue("31847").is_err());
/// ```
pub fn date_of_issue(code: &str) -> Result<String, ValidationError> {
    Ok(Rnokpp::parse(code)?.date_of_issue())
}

/// Decode the gender: odd ninth digit is male, even is female.
pub fn gender(code: &str) -> Result<Gender, ValidationError> {
    Ok(Rnokpp::parse(code)?.gender())
}
