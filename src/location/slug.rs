//! Slug rules.
//!
//! A slug is lowercase ASCII alphanumerics joined by single hyphens. Public
//! URLs embed it verbatim, so nothing downstream escapes it.

use deunicode::deunicode;

/// Check whether `slug` is URL-safe.
///
/// # Examples
/// ```ignore
/// assert!(is_url_safe("berlin-mitte"));
/// assert!(!is_url_safe("Berlin"));
/// assert!(!is_url_safe("köln"));
/// assert!(!is_url_safe("a--b"));
/// ```
pub fn is_url_safe(slug: &str) -> bool {
    !slug.is_empty()
        && slug
            .split('-')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit()))
}

/// Derive a URL-safe slug from a display name.
///
/// Transliterates to ASCII (`ü` → `u`, `ß` → `ss`), lowercases, and
/// collapses every run of other characters into one hyphen.
pub fn slugify(name: &str) -> String {
    let ascii = deunicode(name);
    let mut out = String::with_capacity(ascii.len());
    let mut pending_dash = false;

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}
