use subtrack_core::validation::validate_subscription;

use crate::app::AppContext;
use crate::cli::EditArgs;
use crate::helpers::{parse_date, parse_optional, parse_price};
use crate::ui::{print, receipt};

use super::{find_subscription, not_saved};

/// Apply the given field changes; the id and list position never change.
pub fn handle_edit(ctx: &AppContext, args: &EditArgs) -> anyhow::Result<()> {
    let mut store = ctx.open_store()?;
    let mut subscription = find_subscription(&store, &args.id)?;

    if let Some(name) = args.name.as_deref() {
        subscription.name = name.trim().to_string();
    }
    if let Some(category) = parse_optional(args.category.as_deref())? {
        subscription.category = category;
    }
    if let Some(price) = args.price.as_deref() {
        subscription.price = parse_price(price)?;
    }
    if let Some(cycle) = parse_optional(args.cycle.as_deref())? {
        subscription.billing_cycle = cycle;
    }
    if let Some(start) = args.start.as_deref() {
        subscription.start_date = parse_date(start)?;
    }
    if let Some(status) = parse_optional(args.status.as_deref())? {
        subscription.status = status;
    }

    if args.clear_notes {
        subscription.notes = None;
    } else if let Some(notes) = args.notes.as_deref() {
        subscription.notes = Some(notes.to_string()).filter(|n| !n.trim().is_empty());
    }

    if args.clear_card {
        subscription.payment_card_type = None;
        subscription.payment_card_last_four = None;
    } else {
        if let Some(card) = parse_optional(args.card_type.as_deref())? {
            subscription.payment_card_type = Some(card);
        }
        if let Some(digits) = args.card_last_four.as_deref() {
            subscription.payment_card_last_four =
                Some(digits.trim().to_string()).filter(|d| !d.is_empty());
        }
    }

    validate_subscription(&subscription)?;
    store.add_or_update(subscription.clone()).map_err(not_saved)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        print(
            &ui_ctx,
            &receipt(
                &ui_ctx,
                "Updated subscription",
                &[("ID", subscription.id.as_str()), ("Name", &subscription.name)],
            ),
        );
    }
    Ok(())
}
