//! Text cleanup, name formatting and phone normalisation.

mod names;
mod phone;
mod strings;

pub use names::{
    FullNamed, abbreviated_from_full, correct_name, full_name, short_name, shortest_from_full,
    shortest_name,
};
pub use phone::{PhoneConfig, normalize_phone};
pub use strings::{
    capitalize, decapitalize, drop_first_word, drop_last_path_component, is_all_upper_case,
    is_blank, is_capitalized, is_integer, last_char, last_path_component, remove_newlines,
    split_file_name, trim_all, trim_all_and_colon, trim_leading, trim_leading_colon,
    truncate_chars,
};
