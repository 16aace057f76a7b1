/// Whether `c` has the Unicode `Pattern_White_Space` property.
pub fn is_pattern_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{9}'..='\u{D}' | ' ' | '\u{85}' | '\u{200E}' | '\u{200F}' | '\u{2028}' | '\u{2029}'
    )
}

/// Loose-match a property name or value (UAX44-LM3).
///
/// Drops pattern whitespace, `_` and `-`, then lowercases.
///
/// # Examples
/// ```
/// use regast_core::utils::normalize_property_name;
/// assert_eq!(normalize_property_name("Uppercase_Letter"), "uppercaseletter");
/// assert_eq!(normalize_property_name("Script - Extensions"), "scriptextensions");
/// ```
pub fn normalize_property_name(s: &str) -> String {
    s.chars()
        .filter(|&c| !is_pattern_whitespace(c) && c != '_' && c != '-')
        .flat_map(char::to_lowercase)
        .collect()
}

/// Run `lookup` on the normalized form of `s`, retrying once without an `is` prefix.
pub fn with_normalized_forms<T>(s: &str, lookup: impl Fn(&str) -> Option<T>) -> Option<T> {
    let normalized = normalize_property_name(s);
    if let Some(found) = lookup(&normalized) {
        return Some(found);
    }
    normalized.strip_prefix("is").and_then(lookup)
}
