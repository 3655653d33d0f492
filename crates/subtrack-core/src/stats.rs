//! Aggregate cost statistics over a set of subscriptions.
//!
//! Two normalisation policies coexist:
//!
//! - The headline metrics ([`SubscriptionStats`]) exclude one-time purchases.
//! - The per-category breakdown ([`category_breakdown`]) counts a one-time
//!   purchase at its full price.

use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::model::{BillingCycle, Category, Subscription};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Round a monetary amount to cents, midpoints away from zero.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Monthly contribution to the headline cost metric.
fn recurring_monthly_cost(sub: &Subscription) -> Decimal {
    match sub.billing_cycle {
        BillingCycle::Monthly => sub.price,
        BillingCycle::Yearly => sub.price / MONTHS_PER_YEAR,
        BillingCycle::OneTime => Decimal::ZERO,
    }
}

/// Yearly contribution to the headline cost metric.
fn recurring_yearly_cost(sub: &Subscription) -> Decimal {
    match sub.billing_cycle {
        BillingCycle::Monthly => sub.price.saturating_mul(MONTHS_PER_YEAR),
        BillingCycle::Yearly => sub.price,
        BillingCycle::OneTime => Decimal::ZERO,
    }
}

/// Monthly-equivalent value used by the category chart.
fn chart_monthly_value(sub: &Subscription) -> Decimal {
    match sub.billing_cycle {
        BillingCycle::Yearly => sub.price / MONTHS_PER_YEAR,
        BillingCycle::Monthly | BillingCycle::OneTime => sub.price,
    }
}

/// Sum that pins at `Decimal::MAX` instead of overflowing.
fn saturating_sum(amounts: impl Iterator<Item = Decimal>) -> Decimal {
    amounts.fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Headline statistics for a view of the collection.
///
/// Costs are kept unrounded; apply [`round_money`] when presenting them.
#[derive(Debug, Clone, PartialEq)]
pub struct SubscriptionStats {
    /// Number of records in the view, whatever their status
    pub total: usize,
    /// Number of active records
    pub active: usize,
    /// Normalised monthly cost of active recurring records
    pub monthly_cost: Decimal,
    /// Normalised yearly cost of active recurring records
    pub yearly_cost: Decimal,
    /// Most common category among active records
    pub most_frequent_category: Option<Category>,
}

impl SubscriptionStats {
    pub fn compute(subscriptions: &[Subscription]) -> Self {
        let active: Vec<&Subscription> = subscriptions.iter().filter(|s| s.is_active()).collect();

        Self {
            total: subscriptions.len(),
            active: active.len(),
            monthly_cost: saturating_sum(active.iter().map(|s| recurring_monthly_cost(s))),
            yearly_cost: saturating_sum(active.iter().map(|s| recurring_yearly_cost(s))),
            most_frequent_category: most_frequent_category(subscriptions),
        }
    }
}

/// One bar of the cost-by-category chart.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: Category,
    /// Monthly-equivalent total, rounded to cents
    pub total: Decimal,
}

/// Monthly-equivalent cost per category for active records.
///
/// Yearly prices are divided by twelve, one-time prices count in full.
/// Sorted by total descending; equal totals keep first-encountered order.
pub fn category_breakdown(subscriptions: &[Subscription]) -> Vec<CategoryTotal> {
    let mut totals: IndexMap<Category, Decimal> = IndexMap::new();
    for sub in subscriptions.iter().filter(|s| s.is_active()) {
        let total = totals.entry(sub.category).or_insert(Decimal::ZERO);
        *total = total.saturating_add(chart_monthly_value(sub));
    }

    let mut breakdown: Vec<CategoryTotal> = totals
        .into_iter()
        .map(|(category, total)| CategoryTotal {
            category,
            total: round_money(total),
        })
        .collect();
    breakdown.sort_by(|a, b| b.total.cmp(&a.total));
    breakdown
}

/// Category with the most active records, ties going to the first seen.
pub fn most_frequent_category(subscriptions: &[Subscription]) -> Option<Category> {
    let mut counts: IndexMap<Category, usize> = IndexMap::new();
    for sub in subscriptions.iter().filter(|s| s.is_active()) {
        *counts.entry(sub.category).or_insert(0) += 1;
    }

    let mut best: Option<(Category, usize)> = None;
    for (category, count) in counts {
        if best.map_or(true, |(_, best_count)| count > best_count) {
            best = Some((category, count));
        }
    }
    best.map(|(category, _)| category)
}
