//! CSV export of a subscription view.

use chrono::NaiveDate;

use crate::model::Subscription;
use crate::renewal::next_renewal_date;

/// Default file name for exported data.
pub const EXPORT_FILE_NAME: &str = "subscriptions_export.csv";

/// Column headers, in output order.
pub const EXPORT_HEADERS: [&str; 11] = [
    "ID",
    "Name",
    "Category",
    "Price",
    "Billing Cycle",
    "Start Date",
    "Status",
    "Upcoming Renewal Date",
    "Payment Card Type",
    "Payment Card Last Four",
    "Notes",
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const NOT_APPLICABLE: &str = "N/A";

/// Wrap a free-text field in quotes, doubling any embedded quotes.
fn quoted(text: &str) -> String {
    format!("\"{}\"", text.replace('"', "\"\""))
}

/// Quote a bare field only when it would otherwise break the row.
fn escaped(text: &str) -> String {
    if text.contains([',', '"', '\n', '\r']) {
        quoted(text)
    } else {
        text.to_string()
    }
}

fn row(subscription: &Subscription, as_of: NaiveDate) -> String {
    let renewal = next_renewal_date(subscription, as_of)
        .map(|date| date.format(DATE_FORMAT).to_string())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string());

    [
        escaped(subscription.id.as_str()),
        quoted(&subscription.name),
        subscription.category.to_string(),
        subscription.price.normalize().to_string(),
        subscription.billing_cycle.to_string(),
        subscription.start_date.format(DATE_FORMAT).to_string(),
        subscription.status.to_string(),
        renewal,
        subscription
            .payment_card_type
            .map(|card| card.to_string())
            .unwrap_or_default(),
        subscription.payment_card_last_four.clone().unwrap_or_default(),
        quoted(subscription.notes.as_deref().unwrap_or("")),
    ]
    .join(",")
}

/// Render `subscriptions` as comma-separated text with a header row.
///
/// Renewal dates are projected from `as_of`. The input is exported as-is;
/// callers pass whatever view (typically the filtered one) they want.
pub fn to_delimited_text(subscriptions: &[Subscription], as_of: NaiveDate) -> String {
    let mut out = EXPORT_HEADERS.join(",");
    out.push('\n');
    let rows: Vec<String> = subscriptions.iter().map(|s| row(s, as_of)).collect();
    out.push_str(&rows.join("\n"));
    out
}
