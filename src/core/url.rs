//! URL path type for public location paths.

use std::borrow::Borrow;
use std::sync::Arc;

use serde::Serialize;

/// Normalized public page path.
///
/// Invariants:
/// - Always starts with `/`
/// - Always ends with `/`
/// - Never carries a query string or fragment
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create page URL (with trailing slash). Normalizes leading/trailing slashes.
    /// Strips query string and fragment.
    pub fn from_page(raw: &str) -> Self {
        let trimmed = raw.trim();
        let path = trimmed.split(['?', '#']).next().unwrap_or(trimmed);
        let path = path.trim_matches('/');

        if path.is_empty() {
            return Self(Arc::from("/"));
        }
        Self(Arc::from(format!("/{path}/")))
    }

    /// Get the URL path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self::from_page("/")
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for UrlPath {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}
