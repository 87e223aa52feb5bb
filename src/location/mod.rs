//! Location hierarchy: storage, traversal, search, and routes.
//!
//! # Module Structure
//!
//! ```text
//! location/
//! ├── kind       # LocationKind (closed tag set, labels, colors)
//! ├── record     # Location record
//! ├── slug       # URL-safety rules and slugify
//! ├── error      # LocationError, DatasetError
//! ├── store      # LocationStore (indices, load-time validation)
//! ├── hierarchy  # HierarchyResolver (children, descendants, ancestors)
//! ├── search     # SearchRanker (autocomplete)
//! ├── route      # RouteProjector (paths, breadcrumbs)
//! ├── dataset    # JSON dataset loading
//! └── handle     # Process-wide initialization gate
//! ```

pub mod dataset;
mod error;
pub mod handle;
mod hierarchy;
mod kind;
mod record;
mod route;
pub mod search;
pub mod slug;
mod store;

pub use error::{DatasetError, LocationError};
pub use handle::{install, locations};
pub use hierarchy::HierarchyResolver;
pub use kind::LocationKind;
pub use record::Location;
pub use route::RouteProjector;
pub use search::{SearchOptions, SearchRanker};
pub use store::LocationStore;

#[cfg(test)]
pub(crate) use store::tests as fixtures;
