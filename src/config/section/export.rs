//! `[export]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [export]
//! output = "public"                 # Output directory
//! manifest = true                   # Write the route manifest
//! manifest_path = "locations.json"
//! sitemap = true                    # Write sitemap.xml
//! sitemap_path = "sitemap.xml"
//! ```

use std::path::PathBuf;

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;

/// Navigation artifact export.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "export")]
pub struct ExportConfig {
    /// Output directory, relative to the project root.
    #[config(inline_doc = "Output directory")]
    pub output: PathBuf,

    /// Write the route manifest consumed by page generation.
    #[config(inline_doc = "Write the route manifest")]
    pub manifest: bool,

    /// Manifest file name inside the output directory.
    pub manifest_path: PathBuf,

    /// Write sitemap.xml.
    #[config(inline_doc = "Write sitemap.xml")]
    pub sitemap: bool,

    /// Sitemap file name inside the output directory.
    pub sitemap_path: PathBuf,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output: "public".into(),
            manifest: true,
            manifest_path: "locations.json".into(),
            sitemap: true,
            sitemap_path: "sitemap.xml".into(),
        }
    }
}

impl ExportConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        for (field, path) in [
            (Self::FIELDS.manifest_path, &self.manifest_path),
            (Self::FIELDS.sitemap_path, &self.sitemap_path),
        ] {
            if path.is_absolute() {
                diag.error_with_hint(
                    field,
                    format!("`{}` must be relative", path.display()),
                    "files are written inside `export.output`",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_export_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.export.output, Path::new("public"));
        assert!(config.export.manifest);
        assert!(config.export.sitemap);
        assert_eq!(config.export.sitemap_path, Path::new("sitemap.xml"));
    }

    #[test]
    fn test_export_disable() {
        let config = test_parse_config("[export]\nsitemap = false\nmanifest = false");
        assert!(!config.export.sitemap);
        assert!(!config.export.manifest);
    }

    #[test]
    fn test_export_absolute_paths_rejected() {
        let config = test_parse_config("[export]\nsitemap_path = \"/tmp/sitemap.xml\"");
        let mut diag = ConfigDiagnostics::new();
        config.export.validate(&mut diag);
        assert_eq!(diag.len(), 1);
    }
}
