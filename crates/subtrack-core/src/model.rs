//! Subscription record and its closed enumerations.
//!
//! Wire labels match the persisted document format: categories and card
//! types are title case (`"Streaming"`, `"PayPal"`), billing cycles and
//! statuses are lower case (`"monthly"`, `"one-time"`, `"active"`).

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

use crate::error::{Result, SubtrackError};

/// Opaque, immutable identifier of a subscription.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubscriptionId(String);

impl SubscriptionId {
    /// Generate a fresh random identifier for a newly created record.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SubscriptionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SubscriptionId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Spending category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Streaming,
    Software,
    Gaming,
    Utilities,
    Health,
    Education,
    Shopping,
    Finance,
    Productivity,
    Other,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Streaming,
        Category::Software,
        Category::Gaming,
        Category::Utilities,
        Category::Health,
        Category::Education,
        Category::Shopping,
        Category::Finance,
        Category::Productivity,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Streaming => "Streaming",
            Self::Software => "Software",
            Self::Gaming => "Gaming",
            Self::Utilities => "Utilities",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Shopping => "Shopping",
            Self::Finance => "Finance",
            Self::Productivity => "Productivity",
            Self::Other => "Other",
        }
    }
}

/// Recurrence period of a subscription's charge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BillingCycle {
    Monthly,
    Yearly,
    OneTime,
}

impl BillingCycle {
    pub const ALL: [BillingCycle; 3] = [
        BillingCycle::Monthly,
        BillingCycle::Yearly,
        BillingCycle::OneTime,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::OneTime => "one-time",
        }
    }
}

/// Lifecycle status of a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Paused,
    Cancelled,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Active, Status::Paused, Status::Cancelled];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Paused => "paused",
            Self::Cancelled => "cancelled",
        }
    }
}

/// Payment card network or wallet used for a subscription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardType {
    Visa,
    Mastercard,
    Amex,
    Discover,
    PayPal,
    Other,
}

impl CardType {
    pub const ALL: [CardType; 6] = [
        CardType::Visa,
        CardType::Mastercard,
        CardType::Amex,
        CardType::Discover,
        CardType::PayPal,
        CardType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::Mastercard => "Mastercard",
            Self::Amex => "Amex",
            Self::Discover => "Discover",
            Self::PayPal => "PayPal",
            Self::Other => "Other",
        }
    }
}

/// Case-insensitive lookup of `value` among the labels of `all`.
fn parse_label<T: Copy>(
    kind: &str,
    value: &str,
    all: &[T],
    label: impl Fn(&T) -> &'static str,
) -> Result<T> {
    let wanted = value.trim().to_ascii_lowercase();
    all.iter()
        .find(|item| label(item).to_ascii_lowercase() == wanted)
        .copied()
        .ok_or_else(|| {
            let expected: Vec<&str> = all.iter().map(&label).collect();
            SubtrackError::InvalidInput(format!(
                "Unknown {} \"{}\" (expected one of: {})",
                kind,
                value,
                expected.join(", ")
            ))
        })
}

impl FromStr for Category {
    type Err = SubtrackError;

    fn from_str(s: &str) -> Result<Self> {
        parse_label("category", s, &Self::ALL, Category::as_str)
    }
}

impl FromStr for BillingCycle {
    type Err = SubtrackError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "onetime" | "one_time" => Ok(Self::OneTime),
            _ => parse_label("billing cycle", s, &Self::ALL, BillingCycle::as_str),
        }
    }
}

impl FromStr for Status {
    type Err = SubtrackError;

    fn from_str(s: &str) -> Result<Self> {
        parse_label("status", s, &Self::ALL, Status::as_str)
    }
}

impl FromStr for CardType {
    type Err = SubtrackError;

    fn from_str(s: &str) -> Result<Self> {
        parse_label("card type", s, &Self::ALL, CardType::as_str)
    }
}

macro_rules! display_as_label {
    ($($ty:ty),*) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )*
    };
}

display_as_label!(Category, BillingCycle, Status, CardType);

/// A recurring (or one-time) purchase being tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    /// Assigned at creation, never regenerated on edit
    pub id: SubscriptionId,

    pub name: String,

    pub category: Category,

    /// Positive, currency-agnostic amount charged per cycle
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,

    pub billing_cycle: BillingCycle,

    /// Day the subscription started; time of day is irrelevant
    #[serde(with = "calendar_date")]
    pub start_date: NaiveDate,

    pub status: Status,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_string_as_none"
    )]
    pub notes: Option<String>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "card_type_or_blank"
    )]
    pub payment_card_type: Option<CardType>,

    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "empty_string_as_none"
    )]
    pub payment_card_last_four: Option<String>,
}

impl Subscription {
    /// Create an active subscription with a freshly generated id.
    pub fn new(
        name: impl Into<String>,
        category: Category,
        price: Decimal,
        billing_cycle: BillingCycle,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            id: SubscriptionId::generate(),
            name: name.into(),
            category,
            price,
            billing_cycle,
            start_date,
            status: Status::Active,
            notes: None,
            payment_card_type: None,
            payment_card_last_four: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<SubscriptionId>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn with_card_type(mut self, card_type: CardType) -> Self {
        self.payment_card_type = Some(card_type);
        self
    }

    pub fn with_card_last_four(mut self, last_four: impl Into<String>) -> Self {
        self.payment_card_last_four = Some(last_four.into());
        self
    }

    pub fn is_active(&self) -> bool {
        self.status == Status::Active
    }
}

/// Calendar dates are written as `YYYY-MM-DD`.
///
/// Older documents stored full UTC timestamps (`2023-01-15T00:00:00.000Z`);
/// those are accepted and truncated to their UTC calendar day.
mod calendar_date {
    use chrono::{DateTime, NaiveDate, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveDate, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid calendar date: {}", raw)))
    }

    pub(super) fn parse(raw: &str) -> Option<NaiveDate> {
        let trimmed = raw.trim();
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, FORMAT) {
            return Some(date);
        }
        DateTime::parse_from_rfc3339(trimmed)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).date_naive())
    }
}

fn empty_string_as_none<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<String>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

fn card_type_or_blank<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> std::result::Result<Option<CardType>, D::Error> {
    let value = Option::<String>::deserialize(deserializer)?;
    match value.as_deref() {
        None | Some("") => Ok(None),
        Some(label) => label
            .parse::<CardType>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// Parse a `YYYY-MM-DD` (or RFC 3339) string into a calendar date.
pub fn parse_calendar_date(raw: &str) -> Result<NaiveDate> {
    calendar_date::parse(raw).ok_or_else(|| {
        SubtrackError::InvalidInput(format!("Invalid date (expected YYYY-MM-DD): {}", raw))
    })
}
