//! Input-boundary validation for subscription records.
//!
//! The enumerated fields are closed types and cannot hold invalid values;
//! what remains to check is the free-form data: name length, price range
//! and precision, card digits, and id uniqueness across a collection.

use std::collections::HashSet;

use rust_decimal::Decimal;

use crate::error::{Result, SubtrackError};
use crate::model::Subscription;

/// Minimum characters in a subscription name (after trimming).
pub const MIN_NAME_CHARS: usize = 2;

/// Exact number of digits in a card's last-four field.
pub const CARD_LAST_FOUR_DIGITS: usize = 4;

/// Largest accepted price (one trillion).
pub const MAX_PRICE: Decimal = Decimal::from_parts(3_567_587_328, 232, 0, false, 0);

/// Prices are stored as JSON numbers (f64), which hold 15 significant
/// digits exactly.
pub const MAX_PRICE_DIGITS: usize = 15;

pub fn validate_name(name: &str) -> Result<()> {
    if name.trim().chars().count() < MIN_NAME_CHARS {
        return Err(SubtrackError::Validation(format!(
            "Name must be at least {} characters.",
            MIN_NAME_CHARS
        )));
    }
    Ok(())
}

pub fn validate_price(price: Decimal) -> Result<()> {
    if price <= Decimal::ZERO {
        return Err(SubtrackError::Validation(
            "Price must be a positive number.".to_string(),
        ));
    }
    if price > MAX_PRICE {
        return Err(SubtrackError::Validation(format!(
            "Price must not exceed {}.",
            MAX_PRICE
        )));
    }
    let digits = price.normalize().mantissa().unsigned_abs().to_string().len();
    if digits > MAX_PRICE_DIGITS {
        return Err(SubtrackError::Validation(format!(
            "Price has too many digits (at most {} significant digits).",
            MAX_PRICE_DIGITS
        )));
    }
    Ok(())
}

pub fn validate_card_last_four(digits: &str) -> Result<()> {
    let valid = digits.len() == CARD_LAST_FOUR_DIGITS && digits.chars().all(|c| c.is_ascii_digit());
    if !valid {
        return Err(SubtrackError::Validation(format!(
            "Card last four must be {} digits.",
            CARD_LAST_FOUR_DIGITS
        )));
    }
    Ok(())
}

/// Check a single record against every field constraint.
pub fn validate_subscription(subscription: &Subscription) -> Result<()> {
    validate_name(&subscription.name)?;
    validate_price(subscription.price)?;
    if let Some(ref digits) = subscription.payment_card_last_four {
        validate_card_last_four(digits)?;
    }
    Ok(())
}

/// Check every record, plus id uniqueness across the collection.
pub fn validate_collection(subscriptions: &[Subscription]) -> Result<()> {
    let mut seen = HashSet::with_capacity(subscriptions.len());
    for subscription in subscriptions {
        if !seen.insert(&subscription.id) {
            return Err(SubtrackError::Validation(format!(
                "Duplicate subscription id: {}",
                subscription.id
            )));
        }
        validate_subscription(subscription).map_err(|err| {
            SubtrackError::Validation(format!("Subscription {}: {}", subscription.id, err))
        })?;
    }
    Ok(())
}
