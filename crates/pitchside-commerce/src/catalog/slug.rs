//! URL slug normalization.

/// Normalize a string into a URL-friendly slug.
///
/// Lowercases, maps underscores and spaces to dashes, strips everything
/// outside `[a-z0-9-]`, collapses dash runs, and falls back to `"item"`
/// when nothing survives.
///
/// ```
/// use pitchside_commerce::catalog::slugify;
/// assert_eq!(slugify("Home Kit_2026"), "home-kit-2026");
/// assert_eq!(slugify("  --  "), "item");
/// ```
pub fn slugify(value: &str) -> String {
    let value = value.trim().to_lowercase();
    let value: String = value
        .chars()
        .map(|ch| if ch == '_' || ch == ' ' { '-' } else { ch })
        .filter(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || *ch == '-')
        .collect();

    let parts: Vec<&str> = value.split('-').filter(|part| !part.is_empty()).collect();
    if parts.is_empty() {
        "item".to_string()
    } else {
        parts.join("-")
    }
}
