//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Location hierarchy index and autocomplete resolver
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: regio.toml)
    #[arg(short = 'C', long, global = true, default_value = "regio.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Dataset file path (overrides `[dataset] path`)
    #[arg(short = 'D', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub dataset: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Write a commented regio.toml with default settings
    #[command(visible_alias = "i")]
    Init {
        /// Print the template instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Load and validate the dataset, then print statistics
    #[command(visible_alias = "c")]
    Check,

    /// Ranked autocomplete search over location names and postal codes
    #[command(visible_alias = "s")]
    Search {
        #[command(flatten)]
        args: SearchArgs,
    },

    /// Show one location with its breadcrumb and public path
    Show {
        #[command(flatten)]
        args: SlugArgs,
    },

    /// List the direct children of a location
    Children {
        #[command(flatten)]
        args: SlugArgs,
    },

    /// List every location below a location
    Descendants {
        #[command(flatten)]
        args: SlugArgs,
    },

    /// Write the route manifest and sitemap
    #[command(visible_alias = "e")]
    Export {
        #[command(flatten)]
        args: ExportArgs,
    },
}

/// Search command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct SearchArgs {
    /// Free-text query (name substring or postal-code prefix)
    pub query: String,

    /// Maximum number of results, at most 10 (overrides `[search] limit`)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output JSON instead of text
    #[arg(short, long)]
    pub json: bool,
}

/// Arguments for commands addressing a single location.
#[derive(clap::Args, Debug, Clone)]
pub struct SlugArgs {
    /// Location slug
    pub slug: String,

    /// Output JSON instead of text
    #[arg(short, long)]
    pub json: bool,
}

/// Export command arguments.
#[derive(clap::Args, Debug, Clone)]
pub struct ExportArgs {
    /// Output directory path (relative to project root)
    #[arg(short, long, value_hint = clap::ValueHint::DirPath)]
    pub output: Option<PathBuf>,

    /// Enable sitemap generation
    #[arg(short = 'S', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub sitemap: Option<bool>,

    /// Enable route manifest generation
    #[arg(short = 'M', long, action = clap::ArgAction::Set, num_args = 0..=1, default_missing_value = "true", require_equals = false)]
    pub manifest: Option<bool>,

    /// Override site URL for sitemap entries.
    ///
    /// Useful for CI/CD deployments where the production URL differs from
    /// the one in regio.toml.
    #[arg(short = 'U', long = "site-url", value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,
}

#[allow(unused)]
impl Cli {
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Commands::Init { .. })
    }
    pub const fn is_export(&self) -> bool {
        matches!(self.command, Commands::Export { .. })
    }
}
