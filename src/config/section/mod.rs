//! Configuration section definitions.
//!
//! Each module corresponds to a section in `regio.toml`:
//!
//! | Module    | TOML Section | Purpose                              |
//! |-----------|--------------|--------------------------------------|
//! | `dataset` | `[dataset]`  | Location dataset source              |
//! | `search`  | `[search]`   | Autocomplete thresholds              |
//! | `route`   | `[route]`    | Path prefix and site URL             |
//! | `export`  | `[export]`   | Route manifest and sitemap output    |

mod dataset;
mod export;
mod route;
mod search;

pub use dataset::DatasetConfig;
pub use export::ExportConfig;
pub use route::RouteConfig;
pub use search::SearchConfig;
