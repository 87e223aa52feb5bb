//! Search command implementation.

use anyhow::Result;

use super::output::print_locations;
use crate::cli::SearchArgs;
use crate::config::RegioConfig;
use crate::location::{RouteProjector, SearchRanker, locations};
use crate::utils::plural_count;
use crate::{debug, log};

/// Execute search command
pub fn run_search(args: &SearchArgs, config: &RegioConfig) -> Result<()> {
    let store = locations()?;
    let ranker = SearchRanker::new(config.search.options());
    let results = ranker.search(&args.query, &store);

    debug!("search"; "`{}` matched {}", args.query.trim(), plural_count(results.len(), "location"));

    if results.is_empty() && !args.json {
        log!("search"; "no results for `{}`", args.query.trim());
        return Ok(());
    }

    let routes = RouteProjector::new(store.hierarchy(), config.route.prefix.as_str());
    print_locations(&results, &routes, args.json)
}
