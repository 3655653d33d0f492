//! Path and date resolution for config, data directory and "today".

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, Utc};

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, read_config, SubtrackConfig};
use crate::helpers::parse_date;

/// Resolve the config file path, checking SUBTRACK_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("SUBTRACK_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Load the config file, or defaults when none exists.
pub fn load_config(config_path: &Path) -> anyhow::Result<SubtrackConfig> {
    if !config_path.exists() {
        return Ok(SubtrackConfig::default());
    }
    read_config(config_path)
}

/// Resolve the data directory: flag/env, then config, then the XDG default.
pub fn resolve_data_dir(cli: &Cli, config: &SubtrackConfig) -> anyhow::Result<PathBuf> {
    if let Some(dir) = cli.data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    if let Some(dir) = config
        .storage
        .data_dir
        .as_deref()
        .filter(|d| !d.trim().is_empty())
    {
        return Ok(PathBuf::from(dir));
    }
    default_data_dir()
}

/// The date renewals are projected from: `--as-of` or the current UTC date.
pub fn resolve_as_of(cli: &Cli) -> anyhow::Result<NaiveDate> {
    match cli.as_of.as_deref() {
        Some(value) => parse_date(value),
        None => Ok(Utc::now().date_naive()),
    }
}
