//! UI primitives for the SubTrack CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode, currency)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges, status colors, chart glyphs
//! - **Render**: Tables, bar charts, headers, receipts, hints
//! - **Format**: Money, dates and string utilities

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use mode::OutputMode;
pub use theme::Badge;

pub use render::{
    badge, bar_chart, blank_line, header, hint, kv, print, print_error, receipt, table, Column,
};

pub use format::{display_date, iso_date, money, single_line, truncate};
