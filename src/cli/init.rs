//! Project initialization.
//!
//! Writes a commented `regio.toml` with every section at its defaults.

use anyhow::{Context, Result, bail};
use std::fs;

use crate::config::RegioConfig;
use crate::log;

/// Write the default config file, or print it when `dry_run` is set.
pub fn write_config(config: &RegioConfig, dry_run: bool) -> Result<()> {
    let content = RegioConfig::template();
    if dry_run {
        print!("{content}");
        return Ok(());
    }

    let path = &config.config_path;
    if path.exists() {
        bail!("'{}' already exists", path.display());
    }
    fs::write(path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;

    log!("init"; "wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_config_refuses_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = RegioConfig::default();
        config.config_path = dir.path().join("regio.toml");

        write_config(&config, false).unwrap();
        let written = fs::read_to_string(&config.config_path).unwrap();
        assert!(written.contains("[search]"));
        assert!(RegioConfig::from_str(&written).is_ok());

        assert!(write_config(&config, false).is_err());
    }

    #[test]
    fn test_dry_run_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = RegioConfig::default();
        config.config_path = dir.path().join("regio.toml");

        write_config(&config, true).unwrap();
        assert!(!config.config_path.exists());
    }
}
