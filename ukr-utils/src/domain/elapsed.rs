//! Human-readable elapsed time, in Ukrainian.

use std::time::{Duration, Instant};

const MILLIS_PER_SECOND: u128 = 1_000;
const MILLIS_PER_MINUTE: u128 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u128 = 60 * MILLIS_PER_MINUTE;
const MILLIS_PER_DAY: u128 = 24 * MILLIS_PER_HOUR;

/// Unit sizes in milliseconds with their labels, largest first.
const UNITS: [(u128, &str); 5] = [
    (MILLIS_PER_DAY, "дн."),
    (MILLIS_PER_HOUR, "г."),
    (MILLIS_PER_MINUTE, "хв."),
    (MILLIS_PER_SECOND, "сек."),
    (1, "мс."),
];

const ZERO: &str = "0 мс.";

/// Render a duration as days, hours, minutes, seconds and milliseconds.
///
/// Units with a zero value are left out. Sub-millisecond precision is
/// truncated, so anything under 1 ms renders as "0 мс.".
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use ukr_utils::domain::format_elapsed;
///
/// assert_eq!(format_elapsed(Duration::from_millis(90_061_001)), "1 дн. 1 г. 1 хв. 1 сек. 1 мс.");
/// assert_eq!(format_elapsed(Duration::from_secs(120)), "2 хв.");
/// assert_eq!(format_elapsed(Duration::ZERO), "0 мс.");
/// ```
pub fn format_elapsed(duration: Duration) -> String {
    let mut remaining = duration.as_millis();
    let mut parts = Vec::with_capacity(UNITS.len());

    for (size, label) in UNITS {
        let value = remaining / size;
        remaining %= size;
        if value > 0 {
            parts.push(format!("{value} {label}"));
        }
    }

    if parts.is_empty() {
        ZERO.to_string()
    } else {
        parts.join(" ")
    }
}

/// Like [`format_elapsed`], for a signed nanosecond count such as the
/// difference of two monotonic clock readings.
///
/// Negative input renders as "0 мс.".
pub fn format_elapsed_nanos(nanos: i64) -> String {
    let nanos = u64::try_from(nanos).unwrap_or(0);
    format_elapsed(Duration::from_nanos(nanos))
}

/// Render the time elapsed since `start`.
pub fn elapsed_since(start: Instant) -> String {
    format_elapsed(start.elapsed())
}
