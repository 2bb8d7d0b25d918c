//! URL-safe slug derivation from post titles.

/// Derive a URL-safe slug from a title.
///
/// Lower-cases the input, drops every character that is not a lowercase
/// ASCII letter, digit, whitespace, or hyphen, then collapses any run of
/// whitespace and hyphens into a single hyphen with no leading or trailing
/// hyphen. Pure and total: empty or all-punctuation titles yield an empty
/// string.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut pending_hyphen = false;

    for ch in title.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' {
            pending_hyphen = true;
        }
        // Any other character is stripped without acting as a separator.
    }

    slug
}
