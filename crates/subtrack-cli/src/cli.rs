use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use subtrack_core::VERSION;

/// SubTrack - track recurring subscriptions and what they cost you
#[derive(Parser)]
#[command(name = "subtrack")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the subscription data
    #[arg(short, long, global = true, env = "SUBTRACK_DATA_DIR")]
    pub data_dir: Option<String>,

    /// Treat this date (YYYY-MM-DD) as today when projecting renewals
    #[arg(long, global = true, env = "SUBTRACK_TODAY", value_name = "DATE")]
    pub as_of: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Use ASCII symbols only
    #[arg(long, global = true)]
    pub ascii: bool,
}

/// Text layout requested with `--format`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Aligned table (colored on a terminal)
    Table,
    /// One `key=value` record per line, for scripts
    Plain,
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Currency symbol shown next to prices
    #[arg(long)]
    pub currency: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

/// Category/status selection shared by the view commands
#[derive(Args, Default)]
pub struct FilterArgs {
    /// Only include this category ("all" for every category)
    #[arg(long, value_name = "CATEGORY")]
    pub category: Option<String>,

    /// Only include this status ("all" for every status)
    #[arg(long, value_name = "STATUS")]
    pub status: Option<String>,
}

/// Arguments for the `add` command
#[derive(Args)]
pub struct AddArgs {
    /// Subscription name (at least 2 characters)
    #[arg(long)]
    pub name: String,

    /// Category (Streaming, Software, Gaming, ...)
    #[arg(long)]
    pub category: String,

    /// Price charged per billing cycle
    #[arg(long)]
    pub price: String,

    /// Billing cycle (monthly, yearly, one-time)
    #[arg(long)]
    pub cycle: String,

    /// Start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: String,

    /// Status (active, paused, cancelled)
    #[arg(long, default_value = "active")]
    pub status: String,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Payment card type (Visa, Mastercard, Amex, Discover, PayPal, Other)
    #[arg(long)]
    pub card_type: Option<String>,

    /// Last four digits of the payment card
    #[arg(long, value_name = "DIGITS")]
    pub card_last_four: Option<String>,
}

/// Arguments for the `edit` command
#[derive(Args)]
pub struct EditArgs {
    /// Subscription ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// New name
    #[arg(long)]
    pub name: Option<String>,

    /// New category
    #[arg(long)]
    pub category: Option<String>,

    /// New price
    #[arg(long)]
    pub price: Option<String>,

    /// New billing cycle
    #[arg(long)]
    pub cycle: Option<String>,

    /// New start date (YYYY-MM-DD)
    #[arg(long)]
    pub start: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<String>,

    /// Replace the notes
    #[arg(long, conflicts_with = "clear_notes")]
    pub notes: Option<String>,

    /// Remove the notes
    #[arg(long)]
    pub clear_notes: bool,

    /// Replace the payment card type
    #[arg(long, conflicts_with = "clear_card")]
    pub card_type: Option<String>,

    /// Replace the card's last four digits
    #[arg(long, value_name = "DIGITS", conflicts_with = "clear_card")]
    pub card_last_four: Option<String>,

    /// Remove payment card details
    #[arg(long)]
    pub clear_card: bool,
}

/// Arguments for the `remove` command
#[derive(Args)]
pub struct RemoveArgs {
    /// Subscription ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Arguments for the `list` command
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Output format
    #[arg(long, value_enum, value_name = "FORMAT")]
    pub format: Option<FormatArg>,
}

/// Arguments for the `show` command
#[derive(Args)]
pub struct ShowArgs {
    /// Subscription ID
    #[arg(value_name = "ID")]
    pub id: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `stats` and `chart` commands
#[derive(Args)]
pub struct ReportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `export` command
#[derive(Args)]
pub struct ExportArgs {
    #[command(flatten)]
    pub filter: FilterArgs,

    /// Destination file (defaults to subscriptions_export.csv)
    #[arg(short, long, value_name = "PATH", conflicts_with = "stdout")]
    pub output: Option<String>,

    /// Write CSV to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

/// Arguments for the `completions` command
#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_name = "SHELL")]
    pub shell: Shell,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a config file with the current settings
    Init(InitArgs),

    /// Track a new subscription
    Add(AddArgs),

    /// Change fields of an existing subscription
    Edit(EditArgs),

    /// Stop tracking a subscription
    #[command(alias = "rm")]
    Remove(RemoveArgs),

    /// List subscriptions with their upcoming renewal
    #[command(alias = "ls")]
    List(ListArgs),

    /// Show a single subscription
    Show(ShowArgs),

    /// Show cost totals for the current view
    Stats(ReportArgs),

    /// Show monthly cost per category as a bar chart
    Chart(ReportArgs),

    /// Export subscriptions as CSV
    Export(ExportArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}
