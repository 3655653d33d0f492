//! Output formatting helpers for the CLI.
//!
//! This module provides formatting utilities for displaying subscriptions
//! and reports in JSON and in text (table, plain, detail) form.

mod json;
mod text;

// Re-export public API
pub use json::{breakdown_json, stats_json, subscription_json, subscriptions_json};
pub use text::{detail_lines, list_columns, list_row, stats_lines};
