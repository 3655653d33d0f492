//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::format::{pad_right, plain_value};
use super::OutputMode;
use super::theme::{styled, styles, Badge, BAR_FILL, DOT};

/// Render a header line for a command.
///
/// Pretty mode: "SubTrack · command (context)"
/// Plain mode: "subtrack command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("SubTrack", styles::bold(), ctx.color);
            let dot = DOT.get(ctx.unicode);
            match context {
                Some(c) => format!("{} {} {} ({})", title, dot, command, c),
                None => format!("{} {} {}", title, dot, command),
            }
        }
        OutputMode::Plain => format!("subtrack {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), styles::dim(), ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", plain_key(key), plain_value(value))
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", styles::dim(), ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", plain_value(text))
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub numeric: bool,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self {
            header,
            numeric: false,
        }
    }

    /// A right-aligned column of amounts.
    pub const fn numeric(header: &'static str) -> Self {
        Self {
            header,
            numeric: true,
        }
    }
}

/// Render rows as a table.
///
/// Pretty mode: bordered comfy-table, amounts right-aligned.
/// Plain mode: one line per row of `key=value` pairs named after the columns.
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        return rows
            .iter()
            .map(|row| {
                columns
                    .iter()
                    .zip(row)
                    .map(|(col, value)| format!("{}={}", plain_key(col.header), plain_value(value)))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = ComfyTable::new();
    if ctx.unicode {
        table
            .load_preset(UTF8_FULL)
            .apply_modifier(UTF8_ROUND_CORNERS);
    } else {
        table.load_preset(ASCII_MARKDOWN);
    }
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_width(ctx.width.min(u16::MAX as usize) as u16);
    table.set_header(columns.iter().map(|c| c.header));

    for row in rows {
        table.add_row(columns.iter().zip(row).map(|(col, value)| {
            let cell = Cell::new(value);
            if col.numeric {
                cell.set_alignment(CellAlignment::Right)
            } else {
                cell
            }
        }));
    }

    table.to_string()
}

/// Render labelled horizontal bars scaled to the largest value.
///
/// `bars` holds `(label, value text, magnitude)`; magnitudes are relative.
pub fn bar_chart(ctx: &UiContext, bars: &[(String, String, f64)]) -> String {
    if !ctx.mode.is_pretty() {
        return bars
            .iter()
            .map(|(label, value, _)| {
                format!("category={} total={}", plain_value(label), plain_value(value))
            })
            .collect::<Vec<_>>()
            .join("\n");
    }

    let label_width = bars.iter().map(|(l, _, _)| l.chars().count()).max().unwrap_or(0);
    let value_width = bars.iter().map(|(_, v, _)| v.chars().count()).max().unwrap_or(0);
    let max = bars.iter().map(|(_, _, m)| *m).fold(0.0_f64, f64::max);
    let bar_room = ctx
        .width
        .saturating_sub(label_width + value_width + 4)
        .clamp(10, 50);

    bars.iter()
        .map(|(label, value, magnitude)| {
            let cells = if max > 0.0 {
                ((magnitude / max) * bar_room as f64).round() as usize
            } else {
                0
            };
            let bar = BAR_FILL.get(ctx.unicode).repeat(cells.max(1));
            format!(
                "{}  {}  {}",
                pad_right(label, label_width),
                styled(&bar, styles::cyan(), ctx.color),
                value
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() {
        println!("{}", message);
    }
}

/// Print an empty line (only in pretty mode).
pub fn blank_line(ctx: &UiContext) {
    if ctx.mode.is_pretty() {
        println!();
    }
}

/// Format an error message with optional hint.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

fn plain_key(header: &str) -> String {
    header.to_lowercase().replace(' ', "_")
}
