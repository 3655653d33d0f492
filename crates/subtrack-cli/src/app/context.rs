//! Application context for the SubTrack CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration and the subscription store.

use std::path::PathBuf;

use chrono::NaiveDate;
use once_cell::unsync::OnceCell;
use tracing::debug;

use subtrack_core::{FileSlotStore, LoadSource, SubscriptionStore};

use crate::cli::{Cli, FormatArg};
use crate::config::SubtrackConfig;
use crate::ui::{badge, Badge, UiContext};

use super::resolver::{load_config, resolve_as_of, resolve_config_path, resolve_data_dir};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<SubtrackConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Get the CLI arguments.
    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    pub fn config(&self) -> anyhow::Result<&SubtrackConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            debug!(path = %path.display(), "loading config");
            load_config(&path)
        })
    }

    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    pub fn as_of(&self) -> anyhow::Result<NaiveDate> {
        resolve_as_of(self.cli)
    }

    /// Build a UI context honoring the global flags and configured currency.
    pub fn ui_context(&self, json: bool, format: Option<FormatArg>) -> UiContext {
        let ui_ctx = UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii);
        match self.config() {
            Ok(config) => ui_ctx.with_currency(config.currency()),
            Err(_) => ui_ctx,
        }
    }

    /// Open the subscription store in the resolved data directory.
    ///
    /// A corrupt stored collection is replaced by the sample data for this
    /// session; the user is told on stderr unless `--quiet` is set.
    pub fn open_store(&self) -> anyhow::Result<SubscriptionStore<FileSlotStore>> {
        let data_dir = self.data_dir()?;
        debug!(data_dir = %data_dir.display(), "opening store");
        let store = SubscriptionStore::open(FileSlotStore::new(data_dir));

        if let LoadSource::SeededCorrupt(reason) = store.load_source() {
            if !self.quiet() {
                let ui_ctx = self.ui_context(false, None);
                eprintln!(
                    "{}",
                    badge(
                        &ui_ctx,
                        Badge::Warn,
                        &format!("Stored subscriptions could not be read ({}); showing sample data", reason),
                    )
                );
            }
        }
        Ok(store)
    }
}
