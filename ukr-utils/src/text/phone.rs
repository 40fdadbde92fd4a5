//! Phone number normalisation.

use serde::{Deserialize, Serialize};

/// Parameters for [`normalize_phone`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhoneConfig {
    /// Prefix added to bare national numbers.
    pub country_prefix: String,

    /// Digit count of a national number without the country code.
    pub national_digits: usize,
}

impl PhoneConfig {
    pub fn new(country_prefix: impl Into<String>, national_digits: usize) -> Self {
        Self {
            country_prefix: country_prefix.into(),
            national_digits,
        }
    }
}

impl Default for PhoneConfig {
    /// Ukraine: "+38" followed by a 10-digit national number starting with 0.
    fn default() -> Self {
        Self {
            country_prefix: "+38".to_string(),
            national_digits: 10,
        }
    }
}

/// Normalise a phone number to `+<digits>`.
///
/// Separators such as spaces, dashes and parentheses are removed. A bare
/// national number gets the country prefix. Anything else that does not start
/// with `+` is returned unchanged, as is blank input.
///
/// # Examples
///
/// ```
/// use ukr_utils::text::{PhoneConfig, normalize_phone};
///
/// let config = PhoneConfig::default();
/// assert_eq!(normalize_phone("050 123-45-67", &config), "+380501234567");
/// assert_eq!(normalize_phone("+38 (050) 123-45-67", &config), "+380501234567");
/// assert_eq!(normalize_phone("12345", &config), "12345");
/// ```
pub fn normalize_phone(phone: &str, config: &PhoneConfig) -> String {
    if phone.trim().is_empty() {
        return phone.to_string();
    }

    let digits: String = phone
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    if digits.starts_with('+') {
        digits
    } else if digits.len() == config.national_digits {
        format!("{}{}", config.country_prefix, digits)
    } else {
        phone.to_string()
    }
}
