//! Category/status filtering of the collection.

use std::fmt;
use std::str::FromStr;

use crate::error::SubtrackError;
use crate::model::{Category, Status, Subscription};

/// Either no constraint, or a required value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Self::All
    }
}

impl<T: PartialEq> Selector<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl<T> FromStr for Selector<T>
where
    T: FromStr<Err = SubtrackError>,
{
    type Err = SubtrackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(value) => value.fmt(f),
        }
    }
}

/// Filter for narrowing the collection to a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SubscriptionFilter {
    pub category: Selector<Category>,
    pub status: Selector<Status>,
}

impl SubscriptionFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: Category) -> Self {
        self.category = Selector::Only(category);
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = Selector::Only(status);
        self
    }

    /// True when neither criterion constrains anything.
    pub fn is_unfiltered(&self) -> bool {
        self.category.is_all() && self.status.is_all()
    }

    /// A record matches when every non-`All` criterion equals its field.
    pub fn matches(&self, subscription: &Subscription) -> bool {
        self.category.accepts(&subscription.category) && self.status.accepts(&subscription.status)
    }

    /// Matching records, in their original order.
    pub fn apply(&self, subscriptions: &[Subscription]) -> Vec<Subscription> {
        subscriptions
            .iter()
            .filter(|s| self.matches(s))
            .cloned()
            .collect()
    }
}
