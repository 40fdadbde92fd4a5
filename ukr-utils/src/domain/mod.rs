//! Domain types for dates, times and RNOKPP codes.
//!
//! This module contains the value types behind the text-level helpers in
//! [`crate::dates`] and [`crate::rnokpp`]. All types enforce their invariants
//! at construction time, so code that receives them can trust their validity.

mod date;
mod date_time;
mod elapsed;
mod error;
pub mod month;
mod rnokpp;
mod time;

pub use date::{CalendarDate, DateLayout};
pub use date_time::CalendarDateTime;
pub use elapsed::{elapsed_since, format_elapsed, format_elapsed_nanos};
pub use error::{DateError, ValidationError};
pub use rnokpp::{Gender, Rnokpp};
pub use time::TimeOfDay;
