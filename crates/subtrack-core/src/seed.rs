//! Sample collection used when no usable stored collection exists.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::model::{BillingCycle, CardType, Category, Status, Subscription};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    // All literals below are valid calendar dates.
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

/// The default collection a fresh tracker starts with.
pub fn seed_subscriptions() -> Vec<Subscription> {
    vec![
        Subscription::new(
            "Netflix Premium",
            Category::Streaming,
            Decimal::new(1999, 2),
            BillingCycle::Monthly,
            day(2023, 1, 15),
        )
        .with_id("1")
        .with_card_type(CardType::Visa)
        .with_card_last_four("1234"),
        Subscription::new(
            "Spotify Family",
            Category::Streaming,
            Decimal::new(1699, 2),
            BillingCycle::Monthly,
            day(2022, 11, 1),
        )
        .with_id("2")
        .with_card_type(CardType::Mastercard)
        .with_card_last_four("5678"),
        Subscription::new(
            "Adobe Creative Cloud",
            Category::Software,
            Decimal::new(5999, 2),
            BillingCycle::Monthly,
            day(2023, 3, 1),
        )
        .with_id("3")
        .with_status(Status::Cancelled),
        Subscription::new(
            "Gym Membership",
            Category::Health,
            Decimal::new(40, 0),
            BillingCycle::Monthly,
            day(2023, 5, 20),
        )
        .with_id("4")
        .with_card_type(CardType::Amex)
        .with_card_last_four("9012"),
        Subscription::new(
            "Amazon Prime",
            Category::Shopping,
            Decimal::new(139, 0),
            BillingCycle::Yearly,
            day(2023, 2, 10),
        )
        .with_id("5"),
        Subscription::new(
            "Coursera Plus",
            Category::Education,
            Decimal::new(399, 0),
            BillingCycle::Yearly,
            day(2024, 1, 1),
        )
        .with_id("6")
        .with_status(Status::Paused),
        Subscription::new(
            "Microsoft Office 365",
            Category::Productivity,
            Decimal::new(9999, 2),
            BillingCycle::Yearly,
            day(2023, 8, 15),
        )
        .with_id("7")
        .with_card_type(CardType::Visa)
        .with_card_last_four("3456"),
        Subscription::new(
            "Xbox Game Pass Ultimate",
            Category::Gaming,
            Decimal::new(1499, 2),
            BillingCycle::Monthly,
            day(2023, 7, 1),
        )
        .with_id("8"),
    ]
}
