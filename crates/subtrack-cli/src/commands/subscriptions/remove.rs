use dialoguer::Confirm;
use subtrack_core::SubscriptionId;

use crate::app::AppContext;
use crate::cli::RemoveArgs;
use crate::errors::CliError;
use crate::ui::{print, receipt};

use super::{find_subscription, not_saved};

pub fn handle_remove(ctx: &AppContext, args: &RemoveArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let subscription = find_subscription(&store, &args.id)?;
    let ui_ctx = ctx.ui_context(false, None);

    if !args.yes {
        if !ui_ctx.is_interactive() {
            return Err(CliError::invalid_input(format!(
                "Refusing to remove \"{}\" without confirmation.\nHint: Pass --yes to remove without prompting.",
                subscription.name
            ))
            .into());
        }
        let proceed = Confirm::new()
            .with_prompt(format!("Remove \"{}\"?", subscription.name))
            .default(false)
            .interact()?;
        if !proceed {
            if !ctx.quiet() {
                print(&ui_ctx, "Nothing removed.");
            }
            return Ok(());
        }
    }

    store
        .remove(&SubscriptionId::from(args.id.as_str()))
        .map_err(not_saved)?;

    if !ctx.quiet() {
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Removed subscription",
                &[("ID", subscription.id.as_str()), ("Name", &subscription.name)],
            ),
        );
    }
    Ok(())
}
