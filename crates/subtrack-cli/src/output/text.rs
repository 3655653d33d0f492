//! Text and table output formatting for subscriptions and reports.

use chrono::NaiveDate;
use subtrack_core::{next_renewal_date, Subscription, SubscriptionStats};

use crate::ui::Column;
use crate::ui::theme::{status_style, styled};
use crate::ui::{display_date, kv, money, single_line, truncate, UiContext};

const NAME_WIDTH: usize = 32;

/// "Mon D, YYYY" for the next renewal, or "N/A".
pub fn renewal_text(subscription: &Subscription, as_of: NaiveDate) -> String {
    next_renewal_date(subscription, as_of)
        .map(display_date)
        .unwrap_or_else(|| "N/A".to_string())
}

fn card_text(subscription: &Subscription) -> String {
    match (
        subscription.payment_card_type,
        subscription.payment_card_last_four.as_deref(),
    ) {
        (Some(card), Some(digits)) => format!("{} ****{}", card, digits),
        (Some(card), None) => card.to_string(),
        (None, _) => "N/A".to_string(),
    }
}

pub fn list_columns() -> [Column; 9] {
    [
        Column::new("ID"),
        Column::new("Name"),
        Column::new("Category"),
        Column::numeric("Price"),
        Column::new("Cycle"),
        Column::new("Start"),
        Column::new("Status"),
        Column::new("Next Renewal"),
        Column::new("Card"),
    ]
}

/// One table row, matching `list_columns`.
pub fn list_row(ctx: &UiContext, subscription: &Subscription, as_of: NaiveDate) -> Vec<String> {
    let name = if ctx.mode.is_pretty() {
        truncate(&single_line(&subscription.name), NAME_WIDTH)
    } else {
        subscription.name.clone()
    };
    vec![
        subscription.id.to_string(),
        name,
        subscription.category.to_string(),
        money(&ctx.currency, subscription.price),
        subscription.billing_cycle.to_string(),
        display_date(subscription.start_date),
        subscription.status.to_string(),
        renewal_text(subscription, as_of),
        card_text(subscription),
    ]
}

/// Field-by-field view of one subscription.
pub fn detail_lines(ctx: &UiContext, subscription: &Subscription, as_of: NaiveDate) -> Vec<String> {
    let status = styled(
        subscription.status.as_str(),
        status_style(subscription.status),
        ctx.color && ctx.mode.is_pretty(),
    );
    let mut lines = vec![
        kv(ctx, "ID", subscription.id.as_str()),
        kv(ctx, "Name", &subscription.name),
        kv(ctx, "Category", subscription.category.as_str()),
        kv(ctx, "Price", &money(&ctx.currency, subscription.price)),
        kv(ctx, "Billing Cycle", subscription.billing_cycle.as_str()),
        kv(ctx, "Start Date", &display_date(subscription.start_date)),
        kv(ctx, "Status", &status),
        kv(ctx, "Next Renewal", &renewal_text(subscription, as_of)),
        kv(ctx, "Card", &card_text(subscription)),
    ];
    if let Some(notes) = subscription.notes.as_deref() {
        lines.push(kv(ctx, "Notes", notes));
    }
    lines
}

/// Headline metrics, costs rounded to cents.
pub fn stats_lines(ctx: &UiContext, stats: &SubscriptionStats) -> Vec<String> {
    let top = stats
        .most_frequent_category
        .map(|c| c.to_string())
        .unwrap_or_else(|| "None".to_string());
    vec![
        kv(ctx, "Total Subscriptions", &stats.total.to_string()),
        kv(ctx, "Active", &stats.active.to_string()),
        kv(ctx, "Monthly Cost", &money(&ctx.currency, stats.monthly_cost)),
        kv(ctx, "Yearly Cost", &money(&ctx.currency, stats.yearly_cost)),
        kv(ctx, "Top Category", &top),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::OutputMode;
    use rust_decimal_macros::dec;
    use subtrack_core::{BillingCycle, CardType, Category, Status};

    fn plain_ctx() -> UiContext {
        UiContext {
            is_tty: false,
            color: false,
            unicode: false,
            width: 80,
            mode: OutputMode::Plain,
            currency: "$".to_string(),
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn netflix() -> Subscription {
        Subscription::new(
            "Netflix Premium",
            Category::Streaming,
            dec!(19.99),
            BillingCycle::Monthly,
            date(2023, 1, 31),
        )
        .with_id("1")
        .with_card_type(CardType::Visa)
        .with_card_last_four("1234")
    }

    #[test]
    fn test_renewal_text() {
        assert_eq!(renewal_text(&netflix(), date(2023, 2, 1)), "Feb 28, 2023");
        let paused = netflix().with_status(Status::Paused);
        assert_eq!(renewal_text(&paused, date(2023, 2, 1)), "N/A");
    }

    #[test]
    fn test_list_row() {
        let row = list_row(&plain_ctx(), &netflix(), date(2023, 2, 1));
        assert_eq!(row.len(), list_columns().len());
        assert_eq!(row[3], "$19.99");
        assert_eq!(row[5], "Jan 31, 2023");
        assert_eq!(row[7], "Feb 28, 2023");
        assert_eq!(row[8], "Visa ****1234");
    }

    #[test]
    fn test_card_text_fallbacks() {
        let mut sub = netflix();
        sub.payment_card_last_four = None;
        assert_eq!(card_text(&sub), "Visa");

        sub.payment_card_type = None;
        assert_eq!(card_text(&sub), "N/A");

        sub.payment_card_last_four = Some("1234".to_string());
        assert_eq!(card_text(&sub), "N/A");
    }

    #[test]
    fn test_detail_lines_plain() {
        let lines = detail_lines(&plain_ctx(), &netflix().with_notes("shared"), date(2023, 2, 1));
        assert!(lines.contains(&"name=\"Netflix Premium\"".to_string()));
        assert!(lines.contains(&"price=$19.99".to_string()));
        assert!(lines.contains(&"status=active".to_string()));
        assert!(lines.contains(&"notes=shared".to_string()));
    }

    #[test]
    fn test_stats_lines() {
        let stats = SubscriptionStats {
            total: 0,
            active: 0,
            monthly_cost: dec!(0),
            yearly_cost: dec!(0),
            most_frequent_category: None,
        };
        let lines = stats_lines(&plain_ctx(), &stats);
        assert_eq!(lines[2], "monthly_cost=$0.00");
        assert_eq!(lines[4], "top_category=None");
    }
}
