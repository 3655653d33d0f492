//! JSON output formatting for subscriptions and reports.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use subtrack_core::{next_renewal_date, round_money, CategoryTotal, Subscription, SubscriptionStats};

use crate::ui::iso_date;

fn amount(value: Decimal) -> serde_json::Value {
    serde_json::json!(round_money(value).to_f64())
}

/// Convert a subscription to JSON, with its projected renewal date.
///
/// Keys follow the stored document layout; `nextRenewal` is `null` when
/// the record does not renew.
pub fn subscription_json(
    subscription: &Subscription,
    as_of: NaiveDate,
) -> anyhow::Result<serde_json::Value> {
    let mut value = serde_json::to_value(subscription)?;
    if let Some(object) = value.as_object_mut() {
        object.insert(
            "nextRenewal".to_string(),
            serde_json::json!(next_renewal_date(subscription, as_of).map(iso_date)),
        );
    }
    Ok(value)
}

/// Convert multiple subscriptions to a JSON array.
pub fn subscriptions_json(
    subscriptions: &[Subscription],
    as_of: NaiveDate,
) -> anyhow::Result<serde_json::Value> {
    let items = subscriptions
        .iter()
        .map(|s| subscription_json(s, as_of))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(serde_json::Value::Array(items))
}

pub fn stats_json(stats: &SubscriptionStats) -> serde_json::Value {
    serde_json::json!({
        "total": stats.total,
        "active": stats.active,
        "monthlyCost": amount(stats.monthly_cost),
        "yearlyCost": amount(stats.yearly_cost),
        "mostFrequentCategory": stats.most_frequent_category.map(|c| c.to_string()),
    })
}

pub fn breakdown_json(breakdown: &[CategoryTotal]) -> serde_json::Value {
    serde_json::Value::Array(
        breakdown
            .iter()
            .map(|bar| {
                serde_json::json!({
                    "category": bar.category.to_string(),
                    "total": amount(bar.total),
                })
            })
            .collect(),
    )
}
