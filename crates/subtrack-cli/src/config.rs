use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{APP_DIR, DEFAULT_CURRENCY};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SubtrackConfig {
    #[serde(default)]
    pub storage: StorageSection,
    #[serde(default)]
    pub ui: UiSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StorageSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UiSection {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
}

impl SubtrackConfig {
    pub fn new(data_dir: Option<PathBuf>, currency: Option<String>) -> Self {
        Self {
            storage: StorageSection {
                data_dir: data_dir.map(|path| path.to_string_lossy().to_string()),
            },
            ui: UiSection { currency },
        }
    }

    /// Currency symbol to print in front of amounts.
    pub fn currency(&self) -> &str {
        self.ui
            .currency
            .as_deref()
            .filter(|symbol| !symbol.trim().is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

pub fn read_config(path: &Path) -> anyhow::Result<SubtrackConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn write_config(path: &Path, config: &SubtrackConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".config").join(APP_DIR))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join(APP_DIR));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join(APP_DIR))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
