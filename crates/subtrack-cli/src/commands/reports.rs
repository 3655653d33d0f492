//! Derived views over the filtered collection: headline stats and the
//! per-category cost chart.

use rust_decimal::prelude::ToPrimitive;
use subtrack_core::SubscriptionFilter;

use crate::app::AppContext;
use crate::cli::ReportArgs;
use crate::helpers::parse_filter;
use crate::output::{breakdown_json, stats_json, stats_lines};
use crate::ui::{bar_chart, blank_line, header, money, print, UiContext};

fn report_header(ctx: &AppContext, ui_ctx: &UiContext, command: &str, filter: &SubscriptionFilter) {
    if ctx.quiet() || !ui_ctx.mode.is_pretty() {
        return;
    }
    let context = (!filter.is_unfiltered()).then(|| format!("{} / {}", filter.category, filter.status));
    print(ui_ctx, &header(ui_ctx, command, context.as_deref()));
    blank_line(ui_ctx);
}

pub fn handle_stats(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let filter = parse_filter(&args.filter)?;
    let store = ctx.open_store()?;
    let view = store.apply_filter(&filter);
    let stats = store.stats(&view);

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&stats_json(&stats))?);
        return Ok(());
    }

    report_header(ctx, &ui_ctx, "stats", &filter);
    for line in stats_lines(&ui_ctx, &stats) {
        print(&ui_ctx, &line);
    }
    Ok(())
}

/// Monthly-equivalent cost per category for active subscriptions.
///
/// One-time purchases count at their full price here, unlike `stats`.
pub fn handle_chart(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let filter = parse_filter(&args.filter)?;
    let store = ctx.open_store()?;
    let view = store.apply_filter(&filter);
    let breakdown = store.category_breakdown(&view);

    let ui_ctx = ctx.ui_context(args.json, None);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&breakdown_json(&breakdown))?);
        return Ok(());
    }

    if breakdown.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, "No active subscriptions to chart.");
        }
        return Ok(());
    }

    report_header(ctx, &ui_ctx, "chart", &filter);
    let bars: Vec<(String, String, f64)> = breakdown
        .iter()
        .map(|bar| {
            (
                bar.category.to_string(),
                money(&ui_ctx.currency, bar.total),
                bar.total.to_f64().unwrap_or(0.0),
            )
        })
        .collect();
    print(&ui_ctx, &bar_chart(&ui_ctx, &bars));
    Ok(())
}
