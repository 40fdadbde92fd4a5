//! Ukrainian-locale utility library.
//!
//! Date text in the `dd.MM.yyyy` family of layouts, calendar arithmetic,
//! RNOKPP taxpayer number validation and decoding, plus the small text, JSON
//! and file helpers that sit around them.

pub mod dates;
pub mod domain;
pub mod files;
pub mod json;
pub mod rnokpp;
pub mod text;
