//! SubTrack CLI - track recurring subscription costs from the terminal.
//!
//! Thin command layer over `subtrack-core`: argument parsing, config
//! resolution, and rendering.

mod app;
mod cli;
mod commands;
mod config;
mod constants;
mod errors;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::Parser;
use subtrack_core::VERSION;

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{export, init, misc, reports, subscriptions};
use crate::errors::exit_code_for;
use crate::ui::print_error;

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose);
    let ctx = AppContext::new(&cli);

    if let Err(e) = run(&ctx, &cli) {
        let ui_ctx = ctx.ui_context(false, None);
        let error_msg = format!("{}", e);
        let (message, hint) = split_hint(&error_msg);

        print_error(&ui_ctx, message, hint);
        std::process::exit(exit_code_for(&e));
    }
}

/// Split a trailing `Hint:` line off an error message.
fn split_hint(error: &str) -> (&str, Option<&str>) {
    match error.find("\nHint:") {
        Some(idx) => {
            let hint = error[idx + 1..].trim_start_matches("Hint:").trim();
            (&error[..idx], Some(hint))
        }
        None => (error, None),
    }
}

fn run(ctx: &AppContext, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Some(Commands::Init(args)) => {
            init::handle_init(ctx, args)?;
        }
        Some(Commands::Add(args)) => {
            subscriptions::handle_add(ctx, args)?;
        }
        Some(Commands::Edit(args)) => {
            subscriptions::handle_edit(ctx, args)?;
        }
        Some(Commands::Remove(args)) => {
            subscriptions::handle_remove(ctx, args)?;
        }
        Some(Commands::List(args)) => {
            subscriptions::handle_list(ctx, args)?;
        }
        Some(Commands::Show(args)) => {
            subscriptions::handle_show(ctx, args)?;
        }
        Some(Commands::Stats(args)) => {
            reports::handle_stats(ctx, args)?;
        }
        Some(Commands::Chart(args)) => {
            reports::handle_chart(ctx, args)?;
        }
        Some(Commands::Export(args)) => {
            export::handle_export(ctx, args)?;
        }
        Some(Commands::Completions(args)) => {
            misc::handle_completions(args)?;
        }
        None => {
            println!("SubTrack v{}", VERSION);
            println!("\nQuickstart:");
            println!("  subtrack add --name Netflix --category Streaming --price 15.99 --cycle monthly --start 2024-01-15");
            println!("  subtrack list");
            println!("  subtrack stats");
            println!("\nRun `subtrack --help` for full usage.");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_hint() {
        let (message, hint) =
            split_hint("Subscription 9 not found\nHint: Run `subtrack list` to see subscription IDs.");
        assert_eq!(message, "Subscription 9 not found");
        assert_eq!(hint, Some("Run `subtrack list` to see subscription IDs."));

        assert_eq!(split_hint("boom"), ("boom", None));
    }
}
