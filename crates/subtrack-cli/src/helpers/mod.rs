//! Input parsing helper functions for the CLI.

mod parsing;

// Re-export public API
pub use parsing::{parse_date, parse_filter, parse_optional, parse_price, parse_value};
