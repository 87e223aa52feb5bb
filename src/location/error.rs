//! Location store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building or accessing the location store.
///
/// The first four are load-time errors and abort startup. The last two are
/// lifecycle errors: a query issued before the store was installed, or a
/// second install.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LocationError {
    #[error("duplicate slug `{slug}`")]
    DuplicateSlug { slug: String },

    #[error("location `{slug}` references unknown parent `{parent}`")]
    InvalidParentReference { slug: String, parent: String },

    #[error("slug `{slug}` is not URL-safe (expected something like `{suggestion}`)")]
    InvalidSlug { slug: String, suggestion: String },

    #[error("location `{slug}` is part of a parent cycle")]
    CyclicHierarchy { slug: String },

    #[error("location store queried before initialization")]
    NotInitialized,

    #[error("location store is already initialized")]
    AlreadyInitialized,
}

impl LocationError {
    /// Whether this error was raised while validating the dataset.
    pub const fn is_load_time(&self) -> bool {
        matches!(
            self,
            Self::DuplicateSlug { .. }
                | Self::InvalidParentReference { .. }
                | Self::InvalidSlug { .. }
                | Self::CyclicHierarchy { .. }
        )
    }
}

/// Errors raised while reading the dataset file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("IO error when reading dataset `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("invalid dataset `{0}`")]
    Json(PathBuf, #[source] serde_json::Error),
}
