//! Dataset loading.
//!
//! The dataset is a JSON array of location records, read wholesale at
//! startup.

use std::fs;
use std::path::Path;

use super::{DatasetError, Location, LocationStore};
use crate::{debug, log};

/// Parse records from JSON text.
pub fn parse_records(content: &str, origin: &Path) -> Result<Vec<Location>, DatasetError> {
    serde_json::from_str(content).map_err(|err| DatasetError::Json(origin.to_path_buf(), err))
}

/// Read records from a dataset file.
pub fn read_records(path: &Path) -> Result<Vec<Location>, DatasetError> {
    let content =
        fs::read_to_string(path).map_err(|err| DatasetError::Io(path.to_path_buf(), err))?;
    parse_records(&content, path)
}

/// Read, validate, and index a dataset file.
pub fn load_store(path: &Path) -> anyhow::Result<LocationStore> {
    let records = read_records(path)?;
    debug!("dataset"; "read {} records from {}", records.len(), path.display());

    let store = LocationStore::build(records)?;
    log!("dataset"; "indexed {}", crate::utils::plural_count(store.len(), "location"));
    Ok(store)
}
