//! Project configuration management for `regio.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── dataset    # [dataset]
//! │   ├── export     # [export]
//! │   ├── route      # [route]
//! │   └── search     # [search]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   └── field      # FieldPath
//! └── mod.rs         # RegioConfig (this file)
//! ```

pub mod section;
pub mod types;
mod util;

use util::find_config_file;

pub use section::{DatasetConfig, ExportConfig, RouteConfig, SearchConfig};
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use crate::{
    cli::{Cli, Commands, ExportArgs},
    log,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing regio.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegioConfig {
    /// Absolute path to the config file (internal use only)
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Project root directory - parent of config file (internal use only)
    #[serde(skip)]
    pub root: PathBuf,

    /// Location dataset source
    #[serde(default)]
    pub dataset: DatasetConfig,

    /// Autocomplete thresholds
    #[serde(default)]
    pub search: SearchConfig,

    /// Public route settings
    #[serde(default)]
    pub route: RouteConfig,

    /// Navigation artifact export
    #[serde(default)]
    pub export: ExportConfig,
}

impl RegioConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Searches upward from cwd for the config file. Without one, defaults
    /// are used as long as `--dataset` names the dataset explicitly.
    pub fn load(cli: &Cli) -> Result<Self> {
        let (config_path, exists) = Self::resolve_config_path(cli)?;

        let mut config = if exists && !cli.is_init() {
            Self::from_path(&config_path)?
        } else {
            if !cli.is_init() && cli.dataset.is_none() {
                log!(
                    "error";
                    "config file '{}' not found. Run 'regio init' or pass --dataset.",
                    cli.config.display()
                );
                return Err(ConfigError::NotFound(cli.config.clone()).into());
            }
            Self::default()
        };

        config.config_path = config_path;
        config.finalize(cli);

        if !cli.is_init() {
            config.validate(cli.is_export())?;
        }
        Ok(config)
    }

    /// Resolve config file path based on command.
    fn resolve_config_path(cli: &Cli) -> Result<(PathBuf, bool)> {
        let cwd = std::env::current_dir().context("Failed to get current working directory")?;

        if cli.is_init() {
            let path = cwd.join(&cli.config);
            let exists = path.exists();
            return Ok((path, exists));
        }

        match find_config_file(&cli.config) {
            Some(path) => Ok((path, true)),
            None => Ok((cwd.join(&cli.config), false)),
        }
    }

    /// Finalize configuration after loading.
    fn finalize(&mut self, cli: &Cli) {
        let root = self
            .config_path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_default();
        let root = crate::utils::path::normalize_path(&root);

        self.apply_command_options(cli);
        self.normalize_paths(&root);
        self.root = root;
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }
        Ok(config)
    }

    /// Parse TOML content, collecting any unknown fields.
    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>)> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })
        .map_err(ConfigError::Toml)?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    /// Get the root directory path
    pub fn get_root(&self) -> &Path {
        &self.root
    }

    /// Commented TOML template with every section at its default.
    pub fn template() -> String {
        [
            DatasetConfig::template_with_header(),
            SearchConfig::template_with_header(),
            RouteConfig::template_with_header(),
            ExportConfig::template_with_header(),
        ]
        .join("\n")
    }

    // ========================================================================
    // cli configuration updates
    // ========================================================================

    /// Apply global and command-specific CLI overrides.
    fn apply_command_options(&mut self, cli: &Cli) {
        Self::update_option(&mut self.dataset.path, cli.dataset.as_ref());

        match &cli.command {
            Commands::Search { args } => {
                Self::update_option(&mut self.search.limit, args.limit.as_ref());
            }
            Commands::Export { args } => self.apply_export_args(args),
            Commands::Init { .. }
            | Commands::Check
            | Commands::Show { .. }
            | Commands::Children { .. }
            | Commands::Descendants { .. } => {}
        }
    }

    /// Apply export arguments from CLI.
    fn apply_export_args(&mut self, args: &ExportArgs) {
        Self::update_option(&mut self.export.output, args.output.as_ref());
        Self::update_option(&mut self.export.sitemap, args.sitemap.as_ref());
        Self::update_option(&mut self.export.manifest, args.manifest.as_ref());
        if let Some(ref url) = args.site_url {
            self.route.site_url = Some(url.clone());
        }
    }

    /// Update config option if CLI value is provided.
    fn update_option<T: Clone>(config_option: &mut T, cli_option: Option<&T>) {
        if let Some(option) = cli_option {
            *config_option = option.clone();
        }
    }

    // ========================================================================
    // path normalization
    // ========================================================================

    /// Resolve dataset and output paths against the project root.
    ///
    /// Export file names stay relative; they are joined to the output
    /// directory at write time.
    fn normalize_paths(&mut self, root: &Path) {
        self.dataset.path = crate::utils::path::normalize_path(&root.join(&self.dataset.path));
        self.export.output = crate::utils::path::normalize_path(&root.join(&self.export.output));
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate configuration, collecting all errors at once.
    ///
    /// Requirements of the written artifacts are only checked for `export`.
    pub fn validate(&self, export: bool) -> Result<()> {
        let mut diag = ConfigDiagnostics::new();

        self.search.validate(&mut diag);
        self.route.validate(&mut diag);
        self.export.validate(&mut diag);

        // Sitemap entries must be absolute URLs
        if export && self.export.sitemap && self.route.site_url.is_none() {
            diag.error_with_hint(
                RouteConfig::FIELDS.site_url,
                "sitemap requires `site_url`",
                "set `[route] site_url`, pass `--site-url`, or disable `[export] sitemap`",
            );
        }

        diag.into_result()
            .map_err(|e| ConfigError::Diagnostics(e).into())
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Parse config from TOML text.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(content: &str) -> RegioConfig {
    let (parsed, ignored) = RegioConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_str_invalid_toml() {
        let result: Result<RegioConfig, _> = toml::from_str("[search\nlimit = 3");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_default() {
        let config = RegioConfig::default();
        assert_eq!(config.config_path, PathBuf::new());
        assert_eq!(config.search.limit, 10);
        assert_eq!(config.search.min_query_len, 2);
        assert!(config.route.prefix.is_empty());
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = "[search]\nlimit = 5\n[unknown_section]\nfield = \"value\"";
        let (config, ignored) = RegioConfig::parse_with_ignored(content).unwrap();
        assert_eq!(config.search.limit, 5);
        assert!(ignored.iter().any(|f| f.contains("unknown_section")));
    }

    #[test]
    fn test_template_parses_back_to_defaults() {
        let template = RegioConfig::template();
        assert!(template.contains("[dataset]"));
        assert!(template.contains("[search]"));
        assert!(template.contains("[route]"));
        assert!(template.contains("[export]"));

        let config = test_parse_config(&template);
        assert_eq!(config.search.limit, 10);
        assert_eq!(config.dataset.path, Path::new("data/locations.json"));
    }

    #[test]
    fn test_validate_collects_all_sections() {
        let config = test_parse_config(
            "[search]\nlimit = 0\n[route]\nprefix = \"Bad Prefix\"\n[export]\nsitemap_path = \"/abs.xml\"",
        );
        let err = config.validate(true).unwrap_err();
        let ConfigError::Diagnostics(diag) = err.downcast::<ConfigError>().unwrap() else {
            panic!("expected diagnostics");
        };
        // limit, prefix, sitemap_path, missing site_url
        assert_eq!(diag.len(), 4);
    }

    #[test]
    fn test_sitemap_requires_site_url() {
        let config = test_parse_config("");
        let err = config.validate(true).unwrap_err();
        let ConfigError::Diagnostics(diag) = err.downcast::<ConfigError>().unwrap() else {
            panic!("expected diagnostics");
        };
        assert_eq!(diag.len(), 1);
        assert_eq!(diag.errors()[0].field, RouteConfig::FIELDS.site_url);

        // Queries never write a sitemap
        assert!(config.validate(false).is_ok());

        let config = test_parse_config("[route]\nsite_url = \"https://example.com\"");
        assert!(config.validate(true).is_ok());

        let config = test_parse_config("[export]\nsitemap = false");
        assert!(config.validate(true).is_ok());
    }

    #[test]
    fn test_search_limit_override_is_validated() {
        let cli = Cli::parse_from(["regio", "search", "feld", "--limit", "50"]);
        let mut config = test_parse_config("[route]\nsite_url = \"https://example.com\"");
        config.apply_command_options(&cli);
        assert_eq!(config.search.limit, 50);
        assert!(config.validate(false).is_err());
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "regio",
            "--dataset",
            "other.json",
            "export",
            "--output",
            "dist",
            "--sitemap",
            "false",
        ]);
        let mut config = RegioConfig::default();
        config.apply_command_options(&cli);
        assert_eq!(config.dataset.path, Path::new("other.json"));
        assert_eq!(config.export.output, Path::new("dist"));
        assert!(!config.export.sitemap);
        assert!(config.export.manifest);
    }

    #[test]
    fn test_search_limit_override() {
        let cli = Cli::parse_from(["regio", "search", "berlin", "--limit", "3"]);
        let mut config = RegioConfig::default();
        config.apply_command_options(&cli);
        assert_eq!(config.search.limit, 3);
    }

    #[test]
    fn test_normalize_paths_joins_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = RegioConfig::default();
        config.normalize_paths(dir.path());
        assert!(config.dataset.path.ends_with("data/locations.json"));
        assert!(config.dataset.path.is_absolute());
        assert!(config.export.output.ends_with("public"));
    }
}
