//! Dataset check command.
//!
//! Loading already rejects duplicate slugs, dangling parents, and cycles, so
//! reaching this command means the dataset is valid. The report summarizes
//! its shape.

use std::collections::VecDeque;

use anyhow::Result;
use owo_colors::OwoColorize;

use crate::location::{LocationKind, LocationStore, locations};
use crate::log;
use crate::utils::plural_count;

/// Shape of a loaded dataset.
#[derive(Debug, PartialEq)]
struct DatasetSummary<'a> {
    total: usize,
    roots: usize,
    kinds: Vec<(LocationKind, usize)>,
    max_depth: usize,
    deepest: Option<&'a str>,
    postal_codes: usize,
}

impl<'a> DatasetSummary<'a> {
    fn collect(store: &'a LocationStore) -> Self {
        let hierarchy = store.hierarchy();

        // Level-order walk from every root.
        let mut max_depth = 0;
        let mut deepest = None;
        let mut queue: VecDeque<_> = store.roots().map(|root| (root, 0)).collect();
        while let Some((loc, depth)) = queue.pop_front() {
            if depth > max_depth || deepest.is_none() {
                max_depth = depth;
                deepest = Some(loc.slug.as_str());
            }
            queue.extend(
                hierarchy
                    .children(&loc.slug)
                    .into_iter()
                    .map(|child| (child, depth + 1)),
            );
        }

        Self {
            total: store.len(),
            roots: store.roots().count(),
            kinds: store.kind_counts(),
            max_depth,
            deepest,
            postal_codes: store.iter().map(|loc| loc.postal_codes.len()).sum(),
        }
    }

    fn print(&self) {
        log!("check"; "{} ({})",
            plural_count(self.total, "location"),
            plural_count(self.roots, "root"));

        for (kind, count) in &self.kinds {
            println!("  {:<20} {:>6}", kind.label(), count.dimmed());
        }

        if let Some(deepest) = self.deepest {
            println!("  {:<20} {:>6} ({})", "max depth", self.max_depth, deepest.dimmed());
        }
        println!("  {:<20} {:>6}", "postal codes", self.postal_codes);
    }
}

/// Execute check command
pub fn run_check() -> Result<()> {
    let store = locations()?;
    DatasetSummary::collect(&store).print();
    log!("check"; "{}", "dataset ok".green());
    Ok(())
}
