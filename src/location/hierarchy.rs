//! Level-agnostic traversal of the location forest.
//!
//! Every query is driven by the store's parent/child index alone. No code
//! here looks at [`LocationKind`](super::LocationKind), so irregular nesting
//! (a state with neighborhoods as direct children) needs no special case.

use std::collections::VecDeque;

use rustc_hash::FxHashSet;

use super::{Location, LocationStore};

/// Read-only hierarchy queries over a built [`LocationStore`].
#[derive(Debug, Clone, Copy)]
pub struct HierarchyResolver<'a> {
    store: &'a LocationStore,
}

impl<'a> HierarchyResolver<'a> {
    pub const fn new(store: &'a LocationStore) -> Self {
        Self { store }
    }

    #[inline]
    pub const fn store(&self) -> &'a LocationStore {
        self.store
    }

    /// Direct children in dataset order. Empty for leaves and unknown slugs.
    pub fn children(&self, slug: &str) -> Vec<&'a Location> {
        self.store
            .child_positions(slug)
            .iter()
            .map(|&pos| self.store.at(pos))
            .collect()
    }

    /// Parent of `slug`, if it has one.
    pub fn parent(&self, slug: &str) -> Option<&'a Location> {
        let pos = self.store.position(slug)?;
        self.store.parent_position(pos).map(|p| self.store.at(p))
    }

    /// Every node below `slug`, excluding `slug` itself.
    ///
    /// Breadth-first with an explicit queue; siblings keep dataset order, so
    /// the result is reproducible for a given build.
    pub fn descendants(&self, slug: &str) -> Vec<&'a Location> {
        let mut out = Vec::new();
        let mut queue: VecDeque<usize> = self.store.child_positions(slug).iter().copied().collect();

        while let Some(pos) = queue.pop_front() {
            let loc = self.store.at(pos);
            out.push(loc);
            queue.extend(self.store.child_positions(&loc.slug));
        }
        out
    }

    /// Number of descendants without materializing them.
    pub fn descendant_count(&self, slug: &str) -> usize {
        let mut count = 0;
        let mut stack: Vec<usize> = self.store.child_positions(slug).to_vec();
        while let Some(pos) = stack.pop() {
            count += 1;
            stack.extend(self.store.child_positions(&self.store.at(pos).slug));
        }
        count
    }

    /// Ancestors from the immediate parent up to the root.
    ///
    /// The walk stops at a missing parent, on any revisit, and after at most
    /// `store.len()` steps, even if the store's invariants were bypassed.
    pub fn ancestors(&self, slug: &str) -> Vec<&'a Location> {
        let Some(mut pos) = self.store.position(slug) else {
            return Vec::new();
        };

        let mut out = Vec::new();
        let mut seen = FxHashSet::default();
        seen.insert(pos);

        while out.len() < self.store.len() {
            let Some(parent) = self.store.parent_position(pos) else {
                break;
            };
            if !seen.insert(parent) {
                break;
            }
            out.push(self.store.at(parent));
            pos = parent;
        }
        out
    }

    /// Number of ancestors; roots have depth 0.
    pub fn depth(&self, slug: &str) -> usize {
        self.ancestors(slug).len()
    }

    /// Topmost ancestor, or the node itself for roots.
    pub fn root_of(&self, slug: &str) -> Option<&'a Location> {
        let node = self.store.get(slug)?;
        Some(self.ancestors(slug).pop().unwrap_or(node))
    }
}

impl LocationStore {
    /// Hierarchy queries over this store.
    #[inline]
    pub fn hierarchy(&self) -> HierarchyResolver<'_> {
        HierarchyResolver::new(self)
    }
}
