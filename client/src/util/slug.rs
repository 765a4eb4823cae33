//! Label normalization shared by the taxonomy and the filters.
//!
//! Category and subcategory text arrives from an admin-edited backend, so the
//! same label shows up with different casing, accents and spacing. Everything
//! that compares labels goes through [`slugify`].

#[cfg(test)]
#[path = "slug_test.rs"]
mod slug_test;

use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks block stripped after NFD decomposition.
const COMBINING_MARKS: std::ops::RangeInclusive<char> = '\u{0300}'..='\u{036f}';

/// Normalize a label into a comparison key: `"Diseño  Web"` -> `"diseno-web"`.
///
/// Idempotent: `slugify(&slugify(s)) == slugify(s)`.
pub fn slugify(raw: &str) -> String {
    let stripped = raw
        .nfd()
        .filter(|ch| !COMBINING_MARKS.contains(ch))
        .collect::<String>();
    stripped
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("-")
}

/// Title-case a label for display: lowercase, then capitalize every word.
///
/// Words are split on single spaces so repeated spaces survive as-is.
pub fn title_case(raw: &str) -> String {
    raw.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
