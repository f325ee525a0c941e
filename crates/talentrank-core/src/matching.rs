//! Substring matching primitives shared by the scoring criteria
//!
//! These are deliberately plain substring tests, not a semantic matcher:
//! "premiere" matches "adobe premiere pro", and a required location of
//! "US" matches a profile country of "Russia". Callers rely on that exact
//! behavior, so none of these helpers normalize beyond trimming and
//! lower-casing.

/// Split a comma-delimited list into trimmed, lower-cased, non-empty tokens
pub fn required_tokens(list: &str) -> impl Iterator<Item = String> + '_ {
    list.split(',')
        .map(|token| token.trim().to_lowercase())
        .filter(|token| !token.is_empty())
}

/// Count how many required tokens occur as substrings of `haystack`.
///
/// Repeated tokens count once per occurrence in `required`.
pub fn count_token_matches(required: &str, haystack: &str) -> u32 {
    let haystack = haystack.to_lowercase();
    required_tokens(required)
        .filter(|token| haystack.contains(token.as_str()))
        .count() as u32
}

/// Case-insensitive bidirectional substring test.
///
/// The empty string is a substring of everything, so a blank value on
/// either side always overlaps.
pub fn locations_overlap(required: &str, actual: &str) -> bool {
    let required = required.trim().to_lowercase();
    let actual = actual.trim().to_lowercase();
    actual.contains(&required) || required.contains(&actual)
}

/// Case-insensitive test that `needle` occurs in `haystack`. A blank needle always matches.
pub fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack
        .to_lowercase()
        .contains(&needle.trim().to_lowercase())
}

/// Parse a monetary amount, ignoring surrounding whitespace
pub fn parse_amount(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}

/// True when `rate` falls inside `budget` scaled by the tolerance factor.
///
/// NaN on either side never fits.
pub fn within_budget(rate: f64, budget: f64, tolerance: f64) -> bool {
    rate <= budget * tolerance
}

/// Take at most `max_chars` characters from the start of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
