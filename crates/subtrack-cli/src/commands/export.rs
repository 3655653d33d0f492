use std::path::PathBuf;

use subtrack_core::fs::write_atomic;
use subtrack_core::EXPORT_FILE_NAME;
use tracing::info;

use crate::app::AppContext;
use crate::cli::ExportArgs;
use crate::errors::CliError;
use crate::helpers::parse_filter;
use crate::ui::{print, receipt};

/// Write the filtered view as CSV to a file (default) or stdout.
///
/// An empty view is not an error: a notice is printed and nothing is written.
pub fn handle_export(ctx: &AppContext, args: &ExportArgs) -> anyhow::Result<()> {
    let filter = parse_filter(&args.filter)?;
    let as_of = ctx.as_of()?;
    let store = ctx.open_store()?;
    let view = store.apply_filter(&filter);
    let ui_ctx = ctx.ui_context(false, None);

    let Some(text) = store.export(&view, as_of) else {
        if !ctx.quiet() {
            eprintln!("No subscriptions to export.");
        }
        return Ok(());
    };

    if args.stdout {
        println!("{}", text);
        return Ok(());
    }

    let path = PathBuf::from(args.output.as_deref().unwrap_or(EXPORT_FILE_NAME));
    write_atomic(&path, text.as_bytes()).map_err(|e| {
        CliError::storage(format!("Failed to write export {}: {}", path.display(), e))
    })?;
    info!(path = %path.display(), rows = view.len(), "exported subscriptions");

    if !ctx.quiet() {
        let count = view.len().to_string();
        let path_text = path.display().to_string();
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Exported subscriptions",
                &[("Rows", &count), ("Path", &path_text)],
            ),
        );
    }
    Ok(())
}
