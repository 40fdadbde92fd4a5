//! Ukrainian month names.

/// Month names in the genitive case, January first, as used in dates like
/// "12 березня 2022".
pub const GENITIVE: [&str; 12] = [
    "січня",
    "лютого",
    "березня",
    "квітня",
    "травня",
    "червня",
    "липня",
    "серпня",
    "вересня",
    "жовтня",
    "листопада",
    "грудня",
];
