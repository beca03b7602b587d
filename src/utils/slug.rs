//! URL slug derivation for post titles.
//!
//! The slug doubles as the file stem of a post's virtual path, so the
//! same rule is shared by publishing and markdown export.

/// Convert a title to a URL-safe slug.
///
/// Lowercases, turns spaces into dashes, and drops every character that
/// is not alphanumeric, `_`, or `-`.
///
/// # Examples
///
/// | Title | Slug |
/// |-------|------|
/// | `Building Scalable APIs` | `building-scalable-apis` |
/// | `What's new in 2024?` | `whats-new-in-2024` |
pub fn slugify(title: &str) -> String {
    title
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' { '-' } else { c })
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

/// Slugify with a fallback for titles that slugify to nothing.
pub fn slugify_or(title: &str, fallback: &str) -> String {
    let slug = slugify(title);
    if slug.is_empty() {
        fallback.to_owned()
    } else {
        slug
    }
}
