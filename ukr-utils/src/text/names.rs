//! Personal name formatting.
//!
//! Full names are written surname first: "Василишин Іван Михайлович".

use super::strings::capitalize;

/// Patronymic suffixes after a hyphen, as in "Мустафа-огли". Left as
/// written.
const PATRONYMIC_SUFFIXES: [&str; 3] = ["огли", "заде", "кизи"];

/// Particle written in lower case at the start of a name, as in "да Море".
const LOWERCASE_PARTICLE: &str = "да";

/// Something with a first name, a surname and a patronymic.
pub trait FullNamed {
    fn first_name(&self) -> Option<&str>;
    fn last_name(&self) -> Option<&str>;
    fn fathers_name(&self) -> Option<&str>;

    /// "Last First Fathers", skipping absent parts.
    fn full_name(&self) -> String {
        full_name(self.first_name(), self.fathers_name(), self.last_name())
    }
}

/// "Last First Fathers", skipping absent parts.
pub fn full_name(first: Option<&str>, fathers: Option<&str>, last: Option<&str>) -> String {
    [last, first, fathers]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// "First LAST": capitalised first name, upper-case surname.
pub fn short_name(first: Option<&str>, last: Option<&str>) -> String {
    let first = first.map(capitalize);
    let last = last.map(str::to_uppercase);
    [first, last]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

/// "F. Last": first initial and capitalised surname.
pub fn shortest_name(first: Option<&str>, last: Option<&str>) -> String {
    let mut result = String::new();
    if let Some(initial) = first.and_then(|f| f.chars().next()) {
        result.extend(initial.to_uppercase());
    }
    if let Some(last) = last {
        result.push_str(". ");
        result.push_str(&capitalize(last));
    }
    result.trim().to_string()
}

/// [`shortest_name`] from a "Last First [Fathers]" string.
///
/// A single word is returned unchanged.
pub fn shortest_from_full(full: &str) -> String {
    let mut parts = full.split(' ');
    match (parts.next(), parts.next()) {
        (Some(last), Some(first)) => shortest_name(Some(first), Some(last)),
        _ => full.to_string(),
    }
}

/// "Last F.P." from a "Last First [Fathers]" string.
///
/// A single word is returned unchanged.
///
/// # Examples
///
/// ```
/// use ukr_utils::text::abbreviated_from_full;
///
/// assert_eq!(abbreviated_from_full("Василишин Іван Михайлович"), "Василишин І.М.");
/// assert_eq!(abbreviated_from_full("Василишин Іван"), "Василишин І.");
/// assert_eq!(abbreviated_from_full("Іван"), "Іван");
/// ```
pub fn abbreviated_from_full(full: &str) -> String {
    let parts: Vec<&str> = full.split(' ').collect();
    let [last, rest @ ..] = parts.as_slice() else {
        return full.to_string();
    };
    if rest.is_empty() {
        return full.to_string();
    }

    let mut result = format!("{last} ");
    for part in rest.iter().take(2) {
        if let Some(initial) = part.chars().next() {
            result.push(initial);
            result.push('.');
        }
    }
    result
}

/// Fix the capitalisation of a name.
///
/// Hyphenated names have every part capitalised except the patronymic
/// suffixes "огли", "заде" and "кизи", which keep their casing as written.
/// Otherwise every space-separated word is capitalised, except a leading
/// "да".
///
/// # Examples
///
/// ```
/// use ukr_utils::text::correct_name;
///
/// assert_eq!(correct_name("іван-василь"), "Іван-Василь");
/// assert_eq!(correct_name("МУСТАФА-ОГЛИ"), "Мустафа-ОГЛИ");
/// assert_eq!(correct_name("Да море"), "да Море");
/// ```
pub fn correct_name(name: &str) -> String {
    if name.contains('-') {
        return name
            .split('-')
            .map(|part| {
                let lower = part.to_lowercase();
                if PATRONYMIC_SUFFIXES.contains(&lower.as_str()) {
                    part.to_string()
                } else {
                    capitalize(&lower)
                }
            })
            .collect::<Vec<_>>()
            .join("-");
    }

    name.split(' ')
        .enumerate()
        .map(|(i, part)| {
            let part = part.to_lowercase();
            if i == 0 && part == LOWERCASE_PARTICLE {
                part
            } else {
                capitalize(&part)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
