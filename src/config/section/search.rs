//! `[search]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [search]
//! min_query_len = 2   # Shorter queries return no results
//! limit = 10          # Maximum number of results
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::location::SearchOptions;
use crate::location::search::{MIN_QUERY_LEN, RESULT_LIMIT};

/// Autocomplete search thresholds.
#[derive(Debug, Clone, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "search")]
pub struct SearchConfig {
    /// Minimum trimmed query length in characters (at least 2).
    #[config(inline_doc = "Shorter queries return no results")]
    pub min_query_len: usize,

    /// Maximum number of results per query (1 to 10).
    #[config(inline_doc = "Maximum number of results")]
    pub limit: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        let options = SearchOptions::default();
        Self {
            min_query_len: options.min_query_len,
            limit: options.limit,
        }
    }
}

impl SearchConfig {
    /// Ranker options for this configuration.
    pub const fn options(&self) -> SearchOptions {
        SearchOptions {
            min_query_len: self.min_query_len,
            limit: self.limit,
        }
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.min_query_len < MIN_QUERY_LEN {
            diag.error_with_hint(
                Self::FIELDS.min_query_len,
                format!("must be at least {MIN_QUERY_LEN}, got {}", self.min_query_len),
                "single-keystroke queries match almost everything",
            );
        }
        if self.limit == 0 || self.limit > RESULT_LIMIT {
            diag.error(
                Self::FIELDS.limit,
                format!("must be between 1 and {RESULT_LIMIT}, got {}", self.limit),
            );
        }
    }
}
