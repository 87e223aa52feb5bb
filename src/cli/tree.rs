//! Hierarchy commands: `show`, `children`, `descendants`.
//!
//! An unknown slug is reported as a command error, the CLI's equivalent of
//! a 404 page.

use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use serde::Serialize;

use super::output::{LocationView, print_locations};
use crate::cli::SlugArgs;
use crate::config::RegioConfig;
use crate::location::{LocationStore, RouteProjector, locations};
use crate::utils::plural_count;
use crate::log;

/// `show` output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShowView<'a> {
    #[serde(flatten)]
    location: LocationView<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    parent_slug: Option<&'a str>,
    depth: usize,
    breadcrumb: Vec<LocationView<'a>>,
    children: usize,
    descendants: usize,
}

fn require(store: &LocationStore, slug: &str) -> Result<()> {
    if !store.contains(slug) {
        bail!("unknown location `{slug}`");
    }
    Ok(())
}

/// Execute show command
pub fn run_show(args: &SlugArgs, config: &RegioConfig) -> Result<()> {
    let store = locations()?;
    require(&store, &args.slug)?;

    let hierarchy = store.hierarchy();
    let routes = RouteProjector::new(hierarchy, config.route.prefix.as_str());
    let breadcrumb = routes.breadcrumb(&args.slug);
    let Some(location) = breadcrumb.last().copied() else {
        bail!("unknown location `{}`", args.slug);
    };

    let view = ShowView {
        location: LocationView::new(location, &routes),
        parent_slug: location.parent_slug.as_deref(),
        depth: breadcrumb.len() - 1,
        breadcrumb: breadcrumb
            .iter()
            .map(|loc| LocationView::new(loc, &routes))
            .collect(),
        children: hierarchy.children(&args.slug).len(),
        descendants: hierarchy.descendant_count(&args.slug),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }

    println!("{}", view.location.line());
    let trail: Vec<_> = breadcrumb.iter().map(|loc| loc.name.as_str()).collect();
    println!("{} {}", "breadcrumb:".dimmed(), trail.join(" › "));
    if !location.postal_codes.is_empty() {
        println!("{} {}", "postal codes:".dimmed(), location.postal_codes.join(", "));
    }
    if let Some(population) = location.population {
        println!("{} {}", "population:".dimmed(), population);
    }
    println!(
        "{} {}, {}",
        "below:".dimmed(),
        plural_count(view.children, "child location"),
        plural_count(view.descendants, "descendant")
    );
    Ok(())
}

/// Execute children command
pub fn run_children(args: &SlugArgs, config: &RegioConfig) -> Result<()> {
    let store = locations()?;
    require(&store, &args.slug)?;

    let children = store.hierarchy().children(&args.slug);
    if children.is_empty() && !args.json {
        log!("children"; "`{}` has no children", args.slug);
        return Ok(());
    }
    let routes = RouteProjector::new(store.hierarchy(), config.route.prefix.as_str());
    print_locations(&children, &routes, args.json)
}

/// Execute descendants command
pub fn run_descendants(args: &SlugArgs, config: &RegioConfig) -> Result<()> {
    let store = locations()?;
    require(&store, &args.slug)?;

    let descendants = store.hierarchy().descendants(&args.slug);
    if descendants.is_empty() && !args.json {
        log!("descendants"; "`{}` has no descendants", args.slug);
        return Ok(());
    }
    let routes = RouteProjector::new(store.hierarchy(), config.route.prefix.as_str());
    print_locations(&descendants, &routes, args.json)
}
