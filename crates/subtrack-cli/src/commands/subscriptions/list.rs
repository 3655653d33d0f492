use crate::app::AppContext;
use crate::cli::ListArgs;
use crate::helpers::parse_filter;
use crate::output::{list_columns, list_row, subscriptions_json};
use crate::ui::{blank_line, header, hint, print, table};

pub fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let filter = parse_filter(&args.filter)?;
    let as_of = ctx.as_of()?;
    let store = ctx.open_store()?;
    let view = store.apply_filter(&filter);

    let ui_ctx = ctx.ui_context(args.json, args.format);
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&subscriptions_json(&view, as_of)?)?);
        return Ok(());
    }

    if view.is_empty() {
        if !ctx.quiet() {
            print(&ui_ctx, "No subscriptions match the current filters.");
            print(&ui_ctx, &hint(&ui_ctx, "subtrack add --help"));
        }
        return Ok(());
    }

    if !ctx.quiet() && ui_ctx.mode.is_pretty() {
        let context = (!filter.is_unfiltered())
            .then(|| format!("{} / {}", filter.category, filter.status));
        print(&ui_ctx, &header(&ui_ctx, "list", context.as_deref()));
        blank_line(&ui_ctx);
    }

    let rows: Vec<Vec<String>> = view.iter().map(|s| list_row(&ui_ctx, s, as_of)).collect();
    print(&ui_ctx, &table(&ui_ctx, &list_columns(), &rows));
    Ok(())
}
