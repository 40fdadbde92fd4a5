//! String cleanup and inspection.

/// Trim both ends and collapse every internal whitespace run to one space.
pub fn trim_all(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop leading whitespace.
pub fn trim_leading(s: &str) -> &str {
    s.trim_start()
}

/// Drop a single leading colon.
pub fn trim_leading_colon(s: &str) -> &str {
    s.strip_prefix(':').unwrap_or(s)
}

/// [`trim_leading_colon`] followed by [`trim_all`].
pub fn trim_all_and_colon(s: &str) -> String {
    trim_all(trim_leading_colon(s))
}

/// Returns true if `s` parses as a 32-bit signed integer.
pub fn is_integer(s: &str) -> bool {
    s.parse::<i32>().is_ok()
}

/// Upper-case the first character.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Lower-case the first character.
pub fn decapitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Keep at most `max_chars` characters.
pub fn truncate_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((end, _)) => &s[..end],
        None => s,
    }
}

pub fn last_char(s: &str) -> Option<char> {
    s.chars().next_back()
}

/// Returns true if `s` is absent, empty, or whitespace only.
pub fn is_blank(s: Option<&str>) -> bool {
    s.is_none_or(|s| s.trim().is_empty())
}

/// Drop the first word and the space after it.
///
/// Leading whitespace is ignored. A single word yields an empty string.
pub fn drop_first_word(s: &str) -> &str {
    trim_leading(s)
        .split_once(' ')
        .map_or("", |(_, rest)| rest)
}

/// Drop everything after the last `/`, keeping the slash.
pub fn drop_last_path_component(s: &str) -> &str {
    s.rfind('/').map_or("", |i| &s[..=i])
}

/// Returns the final path component.
///
/// `"/"` and the empty string are returned as is; a trailing slash is
/// ignored, so `"a/b/"` yields `"b"`.
pub fn last_path_component(s: &str) -> &str {
    if s.is_empty() || s == "/" {
        return s;
    }
    s.trim_end_matches('/').rsplit('/').next().unwrap_or("")
}

/// Split a file name into stem and extension.
///
/// Dot-files and names ending in a dot have no extension.
pub fn split_file_name(file_name: &str) -> (&str, &str) {
    match file_name.rfind('.') {
        Some(dot) if dot > 0 && dot < file_name.len() - 1 => {
            (&file_name[..dot], &file_name[dot + 1..])
        }
        _ => (file_name, ""),
    }
}

/// Remove `\r\n` and `\n` line breaks.
pub fn remove_newlines(s: &str) -> String {
    s.replace("\r\n", "").replace('\n', "")
}

/// Returns true if `s` is non-empty and has no lower-case letters.
///
/// Characters that are not letters are ignored.
pub fn is_all_upper_case(s: &str) -> bool {
    !s.is_empty() && !s.chars().any(|c| c.is_alphabetic() && !c.is_uppercase())
}

/// Returns true if `s` is one upper-case letter followed only by lower-case
/// letters.
pub fn is_capitalized(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.is_uppercase() && chars.all(char::is_lowercase),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_all_collapses() {
        assert_eq!(trim_all("  one \t two\n\nthree  "), "one two three");
        assert_eq!(trim_all(""), "");
        assert_eq!(trim_all("   "), "");
    }

    #[test]
    fn trim_leading_cases() {
        assert_eq!(trim_leading(""), "");
        assert_eq!(trim_leading("one two"), "one two");
        assert_eq!(trim_leading("one  two   "), "one  two   ");
        assert_eq!(trim_leading("  one  two   "), "one  two   ");
    }

    #[test]
    fn colon_trimming() {
        assert_eq!(trim_leading_colon(":"), "");
        assert_eq!(trim_leading_colon(": "), " ");
        assert_eq!(trim_leading_colon(": diagnosis"), " diagnosis");
        assert_eq!(trim_leading_colon("::x"), ":x");
        assert_eq!(trim_all_and_colon(": diagnosis"), "diagnosis");
        assert_eq!(trim_all_and_colon(":diagnosis:"), "diagnosis:");
    }

    #[test]
    fn integers() {
        assert!(is_integer("42"));
        assert!(is_integer("-7"));
        assert!(!is_integer("4.2"));
        assert!(!is_integer(""));
        assert!(!is_integer("99999999999"));
    }

    #[test]
    fn capitalization() {
        assert_eq!(capitalize("іван"), "Іван");
        assert_eq!(capitalize("iVAN"), "IVAN");
        assert_eq!(capitalize(""), "");
        assert_eq!(decapitalize("Іван"), "іван");
        assert_eq!(decapitalize(""), "");
    }

    #[test]
    fn truncation() {
        assert_eq!(truncate_chars("Мельниченко", 5), "Мельн");
        assert_eq!(truncate_chars("abc", 5), "abc");
        assert_eq!(truncate_chars("abc", 0), "");
    }

    #[test]
    fn last_character() {
        assert_eq!(last_char("abc"), Some('c'));
        assert_eq!(last_char("їжак"), Some('к'));
        assert_eq!(last_char(""), None);
    }

    #[test]
    fn blank() {
        assert!(is_blank(None));
        assert!(is_blank(Some("")));
        assert!(is_blank(Some(" \t\n")));
        assert!(!is_blank(Some(" a ")));
    }

    #[test]
    fn drop_first_word_cases() {
        assert_eq!(drop_first_word(""), "");
        assert_eq!(drop_first_word("one"), "");
        assert_eq!(drop_first_word("one two "), "two ");
        assert_eq!(drop_first_word("  one two "), "two ");
    }

    #[test]
    fn path_components() {
        assert_eq!(drop_last_path_component("/a/b/c.txt"), "/a/b/");
        assert_eq!(drop_last_path_component("c.txt"), "");
        assert_eq!(last_path_component("/a/b/c.txt"), "c.txt");
        assert_eq!(last_path_component("a/b/"), "b");
        assert_eq!(last_path_component("c.txt"), "c.txt");
        assert_eq!(last_path_component("/"), "/");
        assert_eq!(last_path_component(""), "");
    }

    #[test]
    fn file_names() {
        assert_eq!(split_file_name("report.pdf"), ("report", "pdf"));
        assert_eq!(split_file_name("archive.tar.gz"), ("archive.tar", "gz"));
        assert_eq!(split_file_name(".bashrc"), (".bashrc", ""));
        assert_eq!(split_file_name("name."), ("name.", ""));
        assert_eq!(split_file_name("README"), ("README", ""));
    }

    #[test]
    fn newlines() {
        assert_eq!(remove_newlines("a\r\nb\nc"), "abc");
    }

    #[test]
    fn upper_case_detection() {
        assert!(is_all_upper_case("МЕЛЬНИЧЕНКО"));
        assert!(is_all_upper_case("О'НІЛ-2"));
        assert!(!is_all_upper_case("МЕЛЬНИчЕНКО"));
        assert!(!is_all_upper_case("мельниченко"));
        assert!(!is_all_upper_case(""));
    }

    #[test]
    fn capitalized_detection() {
        assert!(is_capitalized("Іван"));
        assert!(!is_capitalized("ІВАН"));
        assert!(!is_capitalized("іван"));
        assert!(!is_capitalized("іВан"));
        assert!(!is_capitalized(""));
    }
}
