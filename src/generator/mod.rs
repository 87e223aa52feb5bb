//! Navigation artifact generation.
//!
//! - [`manifest`]: route manifest (`locations.json`)
//! - [`sitemap`]: `sitemap.xml`

pub mod manifest;
pub mod sitemap;

use anyhow::Result;

use crate::config::RegioConfig;
use crate::location::LocationStore;

/// Write the manifest and sitemap in parallel.
pub fn export_all(config: &RegioConfig, store: &LocationStore) -> Result<()> {
    let (manifest_result, sitemap_result) = rayon::join(
        || manifest::build_manifest(config, store),
        || sitemap::build_sitemap(config, store),
    );
    manifest_result?;
    sitemap_result?;
    Ok(())
}
