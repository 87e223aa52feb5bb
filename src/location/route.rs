//! Public paths and breadcrumb chains.

use crate::core::UrlPath;

use super::{HierarchyResolver, Location};

/// Derives presentation-layer artifacts from locations.
///
/// Paths depend only on the slug and the prefix fixed at construction, so
/// projecting the same slug twice always yields the same path.
#[derive(Debug, Clone)]
pub struct RouteProjector<'a> {
    hierarchy: HierarchyResolver<'a>,
    prefix: String,
}

impl<'a> RouteProjector<'a> {
    /// Create a projector; an empty `prefix` yields `/<slug>/` paths.
    pub fn new(hierarchy: HierarchyResolver<'a>, prefix: impl Into<String>) -> Self {
        Self {
            hierarchy,
            prefix: prefix.into(),
        }
    }

    /// Root-to-leaf chain ending with `slug` itself.
    ///
    /// Length is depth + 1; empty for an unknown slug.
    pub fn breadcrumb(&self, slug: &str) -> Vec<&'a Location> {
        let Some(node) = self.hierarchy.store().get(slug) else {
            return Vec::new();
        };
        let mut chain = self.hierarchy.ancestors(slug);
        chain.reverse();
        chain.push(node);
        chain
    }

    /// Public path for `slug`: `/<prefix>-<slug>/`, or `/<slug>/` without a prefix.
    pub fn canonical_path(&self, slug: &str) -> UrlPath {
        if self.prefix.is_empty() {
            UrlPath::from_page(slug)
        } else {
            UrlPath::from_page(&format!("{}-{}", self.prefix, slug))
        }
    }

    /// Absolute URL for `slug` under `base` (e.g. `https://example.com`).
    pub fn canonical_url(&self, slug: &str, base: &str) -> String {
        format!(
            "{}{}",
            base.trim_end_matches('/'),
            self.canonical_path(slug).as_str()
        )
    }

    #[inline]
    pub fn hierarchy(&self) -> HierarchyResolver<'a> {
        self.hierarchy
    }

    #[inline]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}
