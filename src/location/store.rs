//! Immutable location store with slug, parent, and type indices.

use rustc_hash::FxHashMap;

use super::search::fold_case;
use super::slug::{is_url_safe, slugify};
use super::{Location, LocationError, LocationKind};

/// The canonical location set and its lookup indices.
///
/// Built once by [`LocationStore::build`] and never mutated afterwards.
/// Indices store positions into `records`, so every lookup resolves to the
/// same `&Location` regardless of which index produced it.
#[derive(Debug, Default)]
pub struct LocationStore {
    records: Vec<Location>,
    /// Case-folded names, same positions as `records`.
    search_keys: Vec<String>,
    by_slug: FxHashMap<String, usize>,
    /// Parent slug → direct children in insertion order.
    by_parent: FxHashMap<String, Vec<usize>>,
    by_kind: FxHashMap<LocationKind, Vec<usize>>,
    roots: Vec<usize>,
}

impl LocationStore {
    /// Validate `records` and build all indices.
    ///
    /// Fails on the first duplicate slug, non-URL-safe slug, dangling
    /// parent reference, or parent cycle.
    pub fn build(records: Vec<Location>) -> Result<Self, LocationError> {
        let mut by_slug = FxHashMap::with_capacity_and_hasher(records.len(), Default::default());
        let mut by_kind: FxHashMap<LocationKind, Vec<usize>> = FxHashMap::default();
        let mut search_keys = Vec::with_capacity(records.len());

        for (pos, loc) in records.iter().enumerate() {
            if !is_url_safe(&loc.slug) {
                return Err(LocationError::InvalidSlug {
                    slug: loc.slug.clone(),
                    suggestion: slugify(&loc.name),
                });
            }
            if by_slug.insert(loc.slug.clone(), pos).is_some() {
                return Err(LocationError::DuplicateSlug {
                    slug: loc.slug.clone(),
                });
            }
            by_kind.entry(loc.kind).or_default().push(pos);
            search_keys.push(fold_case(&loc.name));
        }

        let mut by_parent: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        let mut roots = Vec::new();
        for (pos, loc) in records.iter().enumerate() {
            match &loc.parent_slug {
                None => roots.push(pos),
                Some(parent) if by_slug.contains_key(parent) => {
                    by_parent.entry(parent.clone()).or_default().push(pos);
                }
                Some(parent) => {
                    return Err(LocationError::InvalidParentReference {
                        slug: loc.slug.clone(),
                        parent: parent.clone(),
                    });
                }
            }
        }

        let store = Self {
            records,
            search_keys,
            by_slug,
            by_parent,
            by_kind,
            roots,
        };
        store.check_acyclic()?;
        Ok(store)
    }

    /// Reject parent cycles.
    ///
    /// Each node is walked at most once: a walk stops as soon as it reaches
    /// a root or a node already proven to lead to one.
    fn check_acyclic(&self) -> Result<(), LocationError> {
        const UNSEEN: u8 = 0;
        const ON_WALK: u8 = 1;
        const DONE: u8 = 2;

        let mut state = vec![UNSEEN; self.records.len()];
        let mut walk = Vec::new();

        for start in 0..self.records.len() {
            let mut pos = start;
            loop {
                match state[pos] {
                    DONE => break,
                    ON_WALK => {
                        return Err(LocationError::CyclicHierarchy {
                            slug: self.records[pos].slug.clone(),
                        });
                    }
                    _ => {}
                }
                state[pos] = ON_WALK;
                walk.push(pos);
                match self.parent_position(pos) {
                    Some(parent) => pos = parent,
                    None => break,
                }
            }
            for done in walk.drain(..) {
                state[done] = DONE;
            }
        }
        Ok(())
    }

    /// Look up a location by slug.
    #[inline]
    pub fn get(&self, slug: &str) -> Option<&Location> {
        self.position(slug).map(|pos| &self.records[pos])
    }

    /// Whether a location with this slug exists.
    #[inline]
    pub fn contains(&self, slug: &str) -> bool {
        self.by_slug.contains_key(slug)
    }

    /// Every slug, in dataset order.
    pub fn slugs(&self) -> impl Iterator<Item = &str> + '_ {
        self.records.iter().map(|loc| loc.slug.as_str())
    }

    /// Every location, in dataset order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &Location> + '_ {
        self.records.iter()
    }

    /// Locations tagged with `kind`, in dataset order.
    pub fn by_kind(&self, kind: LocationKind) -> impl Iterator<Item = &Location> + '_ {
        self.by_kind
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(|&pos| &self.records[pos])
    }

    /// Locations without a parent, in dataset order.
    pub fn roots(&self) -> impl Iterator<Item = &Location> + '_ {
        self.roots.iter().map(|&pos| &self.records[pos])
    }

    /// Count of locations per kind, in [`LocationKind::ALL`] order.
    ///
    /// Kinds with no locations are omitted.
    pub fn kind_counts(&self) -> Vec<(LocationKind, usize)> {
        LocationKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let count = self.by_kind.get(&kind).map_or(0, Vec::len);
                (count > 0).then_some((kind, count))
            })
            .collect()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // ------------------------------------------------------------------------
    // Position-level access for the resolver and ranker
    // ------------------------------------------------------------------------

    #[inline]
    pub(super) fn position(&self, slug: &str) -> Option<usize> {
        self.by_slug.get(slug).copied()
    }

    #[inline]
    pub(super) fn at(&self, pos: usize) -> &Location {
        &self.records[pos]
    }

    #[inline]
    pub(super) fn search_key(&self, pos: usize) -> &str {
        &self.search_keys[pos]
    }

    pub(super) fn child_positions(&self, slug: &str) -> &[usize] {
        self.by_parent.get(slug).map(Vec::as_slice).unwrap_or_default()
    }

    pub(super) fn parent_position(&self, pos: usize) -> Option<usize> {
        self.records[pos]
            .parent_slug
            .as_deref()
            .and_then(|parent| self.position(parent))
    }
}
