//! Heading identifier normalization.

/// Convert text to URL-safe slug.
///
/// Transliterates to ASCII, spells `&` as `and`, lowercases, turns runs of
/// whitespace and dashes into single dashes, and drops every other
/// non-alphanumeric character (including `_`).
///
/// # Example
///
/// ```
/// use rw_transforms::slugify;
///
/// assert_eq!(slugify("Getting Started!"), "getting-started");
/// assert_eq!(slugify("Tips & Tricks"), "tips-and-tricks");
/// assert_eq!(slugify("Café"), "cafe");
/// ```
#[must_use]
pub fn slugify(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut need_dash = false;

    for c in text.chars() {
        let ascii = match c {
            '&' => "and",
            _ => deunicode::deunicode_char(c).unwrap_or_default(),
        };
        for b in ascii.bytes() {
            if b.is_ascii_alphanumeric() {
                if need_dash {
                    result.push('-');
                    need_dash = false;
                }
                result.push(char::from(b.to_ascii_lowercase()));
            } else if b == b'-' || b.is_ascii_whitespace() {
                // No leading dash; trailing dashes are never flushed.
                need_dash = !result.is_empty();
            }
        }
    }

    result
}
