use std::path::PathBuf;

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_data_dir, write_config, SubtrackConfig};
use crate::errors::CliError;
use crate::ui::{hint, print, receipt};

/// Write a config file recording the data directory and currency symbol.
///
/// Nothing else is required before the first `add`; this only pins settings.
pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(CliError::invalid_input(format!(
            "Config already exists at {}\nHint: Pass --force to overwrite.",
            config_path.display()
        ))
        .into());
    }

    let data_dir = match ctx.cli().data_dir.as_deref().filter(|d| !d.trim().is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => default_data_dir()?,
    };
    let currency = args
        .currency
        .as_deref()
        .map(str::trim)
        .filter(|symbol| !symbol.is_empty())
        .map(str::to_string);

    let config = SubtrackConfig::new(Some(data_dir.clone()), currency);
    write_config(&config_path, &config)?;
    std::fs::create_dir_all(&data_dir).map_err(|e| {
        CliError::storage(format!(
            "Failed to create data directory {}: {}",
            data_dir.display(),
            e
        ))
    })?;
    tracing::info!(config = %config_path.display(), "wrote config");

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        let config_text = config_path.display().to_string();
        let data_text = data_dir.display().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Initialized SubTrack",
                &[
                    ("Config", &config_text),
                    ("Data Dir", &data_text),
                    ("Currency", config.currency()),
                ],
            ),
        );
        if ui_ctx.mode.is_pretty() {
            print(&ui_ctx, &hint(&ui_ctx, "subtrack add --help"));
        }
    }
    Ok(())
}
