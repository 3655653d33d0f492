//! Parsing helpers for dates, prices, enum labels and view filters.

use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use subtrack_core::model::parse_calendar_date;
use subtrack_core::{Selector, SubscriptionFilter, SubtrackError};

use crate::cli::FilterArgs;
use crate::errors::CliError;

/// Parse a calendar date (YYYY-MM-DD).
pub fn parse_date(value: &str) -> anyhow::Result<NaiveDate> {
    Ok(parse_calendar_date(value)?)
}

/// Parse a price as an exact decimal amount.
pub fn parse_price(value: &str) -> anyhow::Result<Decimal> {
    Decimal::from_str(value.trim()).map_err(|_| {
        CliError::invalid_input(format!("Invalid price: {} (expected a number like 9.99)", value))
            .into()
    })
}

/// Parse a label into one of the closed domain enums.
pub fn parse_value<T>(value: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = SubtrackError>,
{
    Ok(value.parse::<T>()?)
}

/// Parse an optional label, leaving `None` untouched.
pub fn parse_optional<T>(value: Option<&str>) -> anyhow::Result<Option<T>>
where
    T: FromStr<Err = SubtrackError>,
{
    value.map(parse_value).transpose()
}

/// Build a view filter from `--category` / `--status`; missing means "all".
pub fn parse_filter(args: &FilterArgs) -> anyhow::Result<SubscriptionFilter> {
    let category: Selector<_> = match args.category.as_deref() {
        Some(value) => value.parse()?,
        None => Selector::All,
    };
    let status: Selector<_> = match args.status.as_deref() {
        Some(value) => value.parse()?,
        None => Selector::All,
    };
    Ok(SubscriptionFilter { category, status })
}
