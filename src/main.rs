//! Regio - A location hierarchy toolkit for regional landing pages.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod generator;
mod location;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::RegioConfig;

fn main() -> Result<()> {
    let cli: &'static Cli = Box::leak(Box::new(Cli::parse()));

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = RegioConfig::load(cli)?;

    // Init needs no dataset
    if let Commands::Init { dry } = &cli.command {
        return cli::init::write_config(&config, *dry);
    }

    location::install(location::dataset::load_store(&config.dataset.path)?)?;

    match &cli.command {
        Commands::Init { .. } => Ok(()),
        Commands::Check => cli::check::run_check(),
        Commands::Search { args } => cli::search::run_search(args, &config),
        Commands::Show { args } => cli::tree::run_show(args, &config),
        Commands::Children { args } => cli::tree::run_children(args, &config),
        Commands::Descendants { args } => cli::tree::run_descendants(args, &config),
        Commands::Export { .. } => cli::export::run_export(&config),
    }
}
