use crate::app::AppContext;
use crate::cli::ShowArgs;
use crate::output::{detail_lines, subscription_json};
use crate::ui::print;

use super::find_subscription;

pub fn handle_show(ctx: &AppContext, args: &ShowArgs) -> anyhow::Result<()> {
    let as_of = ctx.as_of()?;
    let store = ctx.open_store()?;
    let subscription = find_subscription(&store, &args.id)?;

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        let output = serde_json::to_string_pretty(&subscription_json(&subscription, as_of)?)?;
        println!("{}", output);
        return Ok(());
    }

    for line in detail_lines(&ui_ctx, &subscription, as_of) {
        print(&ui_ctx, &line);
    }
    Ok(())
}
