//! Shared text and JSON rendering for query commands.

use anyhow::Result;
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::core::UrlPath;
use crate::location::{Location, LocationKind, RouteProjector};

/// A location as printed by the CLI.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LocationView<'a> {
    pub slug: &'a str,
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: LocationKind,
    pub label: &'static str,
    pub path: UrlPath,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub population: Option<u64>,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    pub postal_codes: &'a [String],
}

impl<'a> LocationView<'a> {
    pub fn new(location: &'a Location, routes: &RouteProjector<'_>) -> Self {
        Self {
            slug: &location.slug,
            name: &location.name,
            kind: location.kind,
            label: location.kind.label(),
            path: routes.canonical_path(&location.slug),
            population: location.population,
            postal_codes: &location.postal_codes,
        }
    }

    /// One-line text form: `Name  (Label)  /path/  slug`.
    pub fn line(&self) -> String {
        format!(
            "{}  {}  {}  {}",
            self.name.bold(),
            format!("({})", self.label).dimmed(),
            self.path.as_str().cyan(),
            self.slug.dimmed()
        )
    }
}

/// Print `locations` as text lines or as a pretty JSON array.
pub(super) fn print_locations(
    locations: &[&Location],
    routes: &RouteProjector<'_>,
    json: bool,
) -> Result<()> {
    let views: Vec<_> = locations
        .iter()
        .map(|loc| LocationView::new(loc, routes))
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&views)?);
    } else {
        for view in &views {
            println!("{}", view.line());
        }
    }
    Ok(())
}
