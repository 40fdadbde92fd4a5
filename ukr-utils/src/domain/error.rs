//! Domain error types.
//!
//! These errors represent text that does not match an accepted layout and
//! identifiers that fail structural validation. They are distinct from the
//! I/O and serialization errors of the glue modules.

/// Errors from date and time parsing and calendar arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// Input does not match any accepted layout, or names an impossible
    /// calendar value such as 31.02.2022
    #[error("failed to parse \"{input}\": expected {expected}")]
    Format { input: String, expected: String },

    /// A numeric date component is not an integer
    #[error("not a number: \"{input}\"")]
    Number { input: String },

    /// Calendar arithmetic left the representable range
    #[error("date out of range: {operation}")]
    OutOfRange { operation: &'static str },
}

impl DateError {
    pub(crate) fn format(input: &str, expected: impl Into<String>) -> Self {
        DateError::Format {
            input: input.trim().to_string(),
            expected: expected.into(),
        }
    }

    pub(crate) fn out_of_range(operation: &'static str) -> Self {
        DateError::OutOfRange { operation }
    }
}

/// Error returned when an RNOKPP code is not exactly 10 decimal digits.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid RNOKPP code format: \"{code}\": must contain exactly 10 digits")]
pub struct ValidationError {
    code: String,
}

impl ValidationError {
    pub(crate) fn new(code: &str) -> Self {
        Self {
            code: code.to_string(),
        }
    }

    /// Returns the rejected input.
    pub fn code(&self) -> &str {
        &self.code
    }
}
