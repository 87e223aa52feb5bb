//! Sitemap generation.
//!
//! Generates a sitemap.xml listing one page per location, each root
//! followed by its descendants in breadth-first order.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
//!   <url>
//!     <loc>https://example.com/autoankauf-berlin/</loc>
//!   </url>
//! </urlset>
//! ```

use crate::{config::RegioConfig, location::LocationStore, location::RouteProjector, log};
use anyhow::{Context, Result};
use std::borrow::Cow;
use std::fs;

const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Build sitemap if enabled.
pub fn build_sitemap(config: &RegioConfig, store: &LocationStore) -> Result<()> {
    if config.export.sitemap {
        let sitemap = Sitemap::build(config, store)?;
        sitemap.write(config)?;
    }
    Ok(())
}

struct Sitemap {
    urls: Vec<String>,
}

impl Sitemap {
    fn build(config: &RegioConfig, store: &LocationStore) -> Result<Self> {
        let base_url = config
            .route
            .site_url
            .as_deref()
            .context("sitemap requires `[route] site_url`")?;
        let hierarchy = store.hierarchy();
        let routes = RouteProjector::new(hierarchy, config.route.prefix.as_str());

        let mut urls = Vec::with_capacity(store.len());
        for root in store.roots() {
            urls.push(routes.canonical_url(&root.slug, base_url));
            urls.extend(
                hierarchy
                    .descendants(&root.slug)
                    .into_iter()
                    .map(|loc| routes.canonical_url(&loc.slug, base_url)),
            );
        }
        Ok(Self { urls })
    }

    fn into_xml(self) -> String {
        let mut xml = String::with_capacity(64 * self.urls.len() + 128);

        xml.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
        xml.push_str("<urlset xmlns=\"");
        xml.push_str(SITEMAP_NS);
        xml.push_str("\">\n");

        for loc in &self.urls {
            xml.push_str("  <url>\n    <loc>");
            xml.push_str(&escape_xml(loc));
            xml.push_str("</loc>\n  </url>\n");
        }

        xml.push_str("</urlset>\n");
        xml
    }

    fn write(self, config: &RegioConfig) -> Result<()> {
        let sitemap_path = config.export.output.join(&config.export.sitemap_path);
        if let Some(parent) = sitemap_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let count = self.urls.len();
        fs::write(&sitemap_path, self.into_xml())
            .with_context(|| format!("Failed to write sitemap to {}", sitemap_path.display()))?;

        log!("sitemap"; "{} ({})",
            sitemap_path.file_name().unwrap_or_default().to_string_lossy(),
            crate::utils::plural_count(count, "url"));
        Ok(())
    }
}

/// Escape special XML characters.
fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    Cow::Owned(
        s.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
            .replace('"', "&quot;")
            .replace('\'', "&apos;"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::test_parse_config;
    use crate::location::fixtures::irregular;

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("hello"), "hello");
        assert_eq!(escape_xml("<test>"), "&lt;test&gt;");
        assert_eq!(escape_xml("a & b"), "a &amp; b");
        assert_eq!(escape_xml("it's"), "it&apos;s");
    }

    #[test]
    fn test_sitemap_empty() {
        let sitemap = Sitemap { urls: vec![] };
        let xml = sitemap.into_xml();

        assert!(xml.contains(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
        assert!(xml.contains(&format!(r#"<urlset xmlns="{SITEMAP_NS}">"#)));
        assert!(xml.contains("</urlset>"));
        assert!(!xml.contains("<url>"));
    }

    #[test]
    fn test_sitemap_covers_every_location_root_first() {
        let store = LocationStore::build(irregular()).unwrap();
        let config = test_parse_config(
            "[route]\nprefix = \"autoankauf\"\nsite_url = \"https://example.com/\"",
        );
        let sitemap = Sitemap::build(&config, &store).unwrap();

        assert_eq!(sitemap.urls.len(), store.len());
        assert_eq!(sitemap.urls[0], "https://example.com/autoankauf-bayern/");
        assert_eq!(sitemap.urls[1], "https://example.com/autoankauf-oberbayern/");
        assert!(
            sitemap
                .urls
                .contains(&"https://example.com/autoankauf-altona/".to_string())
        );

        let xml = sitemap.into_xml();
        assert_eq!(xml.matches("<url>").count(), store.len());
    }

    #[test]
    fn test_write_sitemap() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocationStore::build(irregular()).unwrap();
        let mut config = test_parse_config("[route]\nsite_url = \"https://example.com\"");
        config.export.output = dir.path().join("public");

        build_sitemap(&config, &store).unwrap();
        let xml = fs::read_to_string(dir.path().join("public/sitemap.xml")).unwrap();
        assert!(xml.contains("<loc>https://example.com/hamburg/</loc>"));
        assert!(!xml.contains("<loc>/"));
    }

    #[test]
    fn test_sitemap_without_site_url_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let store = LocationStore::build(irregular()).unwrap();
        let mut config = test_parse_config("");
        config.export.output = dir.path().join("public");

        assert!(build_sitemap(&config, &store).is_err());
        assert!(!dir.path().join("public/sitemap.xml").exists());
    }
}
