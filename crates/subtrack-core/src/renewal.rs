//! Renewal-date projection.

use chrono::{Months, NaiveDate};

use crate::model::{BillingCycle, Subscription};

/// Length of one billing period in calendar months.
fn period_months(cycle: BillingCycle) -> Option<Months> {
    match cycle {
        BillingCycle::Monthly => Some(Months::new(1)),
        BillingCycle::Yearly => Some(Months::new(12)),
        BillingCycle::OneTime => None,
    }
}

/// Next date strictly after `as_of` on which the subscription renews.
///
/// Returns `None` when renewal is not applicable: the subscription is not
/// active, it is a one-time purchase, or the projection would leave the
/// representable date range.
///
/// Each step adds one period to the previous candidate using calendar
/// arithmetic, so month ends clamp (Jan 31 → Feb 28) and later steps continue
/// from the clamped day. A start date after `as_of` is returned unchanged.
pub fn next_renewal_date(subscription: &Subscription, as_of: NaiveDate) -> Option<NaiveDate> {
    if !subscription.is_active() {
        return None;
    }
    let period = period_months(subscription.billing_cycle)?;

    let mut renewal = subscription.start_date;
    while renewal <= as_of {
        renewal = renewal.checked_add_months(period)?;
    }
    Some(renewal)
}
