//! `[dataset]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [dataset]
//! path = "data/locations.json"   # JSON array of location records
//! ```

use std::path::PathBuf;

use macros::Config;
use serde::{Deserialize, Serialize};

/// Location dataset source.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "dataset")]
pub struct DatasetConfig {
    /// JSON file with all location records, relative to the project root.
    #[config(inline_doc = "Location records (JSON array)")]
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: "data/locations.json".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use std::path::Path;

    #[test]
    fn test_dataset_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.dataset.path, Path::new("data/locations.json"));
    }

    #[test]
    fn test_dataset_path() {
        let config = test_parse_config("[dataset]\npath = \"geo/de.json\"");
        assert_eq!(config.dataset.path, Path::new("geo/de.json"));
    }
}
