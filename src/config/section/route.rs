//! `[route]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [route]
//! prefix = "autoankauf"               # Pages live at /autoankauf-<slug>/
//! site_url = "https://example.com"    # Base URL for sitemap entries
//! ```

use macros::Config;
use serde::{Deserialize, Serialize};

use crate::config::ConfigDiagnostics;
use crate::location::slug::{is_url_safe, slugify};

/// Public route settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "route")]
pub struct RouteConfig {
    /// Path prefix joined to every slug with a hyphen (empty for `/<slug>/`).
    #[config(inline_doc = "Pages live at /<prefix>-<slug>/")]
    pub prefix: String,

    /// Absolute site URL used for sitemap entries.
    pub site_url: Option<String>,
}

impl RouteConfig {
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if !self.prefix.is_empty() && !is_url_safe(&self.prefix) {
            diag.error_with_hint(
                Self::FIELDS.prefix,
                format!("`{}` is not URL-safe", self.prefix),
                format!("use `{}`", slugify(&self.prefix)),
            );
        }

        if let Some(site_url) = &self.site_url
            && url::Url::parse(site_url).is_err()
        {
            diag.error_with_hint(
                Self::FIELDS.site_url,
                format!("`{site_url}` is not a valid URL"),
                "use an absolute URL like `https://example.com`",
            );
        }
    }
}
