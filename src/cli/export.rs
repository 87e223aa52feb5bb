//! Export command implementation.

use anyhow::{Context, Result};
use std::fs;

use crate::config::RegioConfig;
use crate::generator::export_all;
use crate::location::locations;
use crate::log;

/// Execute export command
pub fn run_export(config: &RegioConfig) -> Result<()> {
    if !config.export.manifest && !config.export.sitemap {
        log!("export"; "manifest and sitemap are both disabled, nothing to do");
        return Ok(());
    }

    let store = locations()?;
    let output = &config.export.output;
    fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    export_all(config, &store)?;
    log!("export"; "done -> {}", output.display());
    Ok(())
}
