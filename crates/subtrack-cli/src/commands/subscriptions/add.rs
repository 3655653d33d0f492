use subtrack_core::validation::validate_subscription;
use subtrack_core::Subscription;

use crate::app::AppContext;
use crate::cli::AddArgs;
use crate::helpers::{parse_date, parse_optional, parse_price, parse_value};
use crate::ui::{print, receipt};

use super::not_saved;

pub fn handle_add(ctx: &AppContext, args: &AddArgs) -> anyhow::Result<()> {
    let mut subscription = Subscription::new(
        args.name.trim(),
        parse_value(&args.category)?,
        parse_price(&args.price)?,
        parse_value(&args.cycle)?,
        parse_date(&args.start)?,
    )
    .with_status(parse_value(&args.status)?);

    subscription.notes = args.notes.clone().filter(|n| !n.trim().is_empty());
    subscription.payment_card_type = parse_optional(args.card_type.as_deref())?;
    subscription.payment_card_last_four = args
        .card_last_four
        .as_deref()
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .map(String::from);
    validate_subscription(&subscription)?;

    let mut store = ctx.open_store()?;
    store.add_or_update(subscription.clone()).map_err(not_saved)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Added subscription",
                &[("ID", subscription.id.as_str()), ("Name", &subscription.name)],
            ),
        );
    }
    Ok(())
}
