//! Route manifest generation.
//!
//! Writes one JSON entry per location with everything a page renderer or
//! navigation builder needs: public path, breadcrumb trail, direct children,
//! and descendant count. Entries keep dataset order.

use std::fs;

use anyhow::{Context, Result};
use rayon::prelude::*;
use serde::Serialize;

use crate::config::RegioConfig;
use crate::core::UrlPath;
use crate::location::{Location, LocationKind, LocationStore, RouteProjector};
use crate::log;
use crate::logger::ProgressLine;

/// One breadcrumb step.
#[derive(Debug, Serialize)]
pub struct Crumb<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    pub path: UrlPath,
}

/// Manifest entry for a single location.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestEntry<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub label: &'static str,
    pub color: &'static str,
    pub path: UrlPath,
    pub breadcrumb: Vec<Crumb<'a>>,
    pub children: Vec<&'a str>,
    pub descendant_count: usize,
}

impl<'a> ManifestEntry<'a> {
    fn new(location: &'a Location, routes: &RouteProjector<'a>) -> Self {
        let slug = location.slug.as_str();
        let hierarchy = routes.hierarchy();
        Self {
            slug,
            name: &location.name,
            kind: location.kind,
            label: location.kind.label(),
            color: location.kind.color(),
            path: routes.canonical_path(slug),
            breadcrumb: routes
                .breadcrumb(slug)
                .into_iter()
                .map(|loc| Crumb {
                    slug: &loc.slug,
                    name: &loc.name,
                    path: routes.canonical_path(&loc.slug),
                })
                .collect(),
            children: hierarchy
                .children(slug)
                .into_iter()
                .map(|child| child.slug.as_str())
                .collect(),
            descendant_count: hierarchy.descendant_count(slug),
        }
    }
}

/// Render every manifest entry in parallel.
pub fn render_manifest<'a>(
    store: &'a LocationStore,
    routes: &RouteProjector<'a>,
    progress: Option<&ProgressLine>,
) -> Vec<ManifestEntry<'a>> {
    let locations: Vec<&Location> = store.iter().collect();
    locations
        .par_iter()
        .map(|&location| {
            let entry = ManifestEntry::new(location, routes);
            if let Some(progress) = progress {
                progress.inc("manifest");
            }
            entry
        })
        .collect()
}

/// Build route manifest if enabled.
pub fn build_manifest(config: &RegioConfig, store: &LocationStore) -> Result<()> {
    if !config.export.manifest {
        return Ok(());
    }

    let routes = RouteProjector::new(store.hierarchy(), config.route.prefix.as_str());
    let progress = ProgressLine::new("export", &[("manifest", store.len())]);
    let entries = render_manifest(store, &routes, Some(&progress));
    progress.finish();

    let path = config.export.output.join(&config.export.manifest_path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    let json = serde_json::to_vec(&entries)?;
    fs::write(&path, json)
        .with_context(|| format!("Failed to write manifest to {}", path.display()))?;

    log!("manifest"; "{}", path.file_name().unwrap_or_default().to_string_lossy());
    Ok(())
}
