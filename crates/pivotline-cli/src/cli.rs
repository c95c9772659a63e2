//! CLI argument definitions for pivotline.
//!
//! Two commands mirror the two input modes:
//!
//! | Command | Description |
//! |---------|-------------|
//! | `levels` | Compute pivot levels from manually entered High/Low/Close |
//! | `fetch` | Fetch the latest daily quote for a symbol and compute levels |
//!
//! # Global Options
//!
//! | Option | Default | Description |
//! |--------|---------|-------------|
//! | `--format` | `table` | Output format (table, json) |
//! | `--pretty` | `false` | Pretty-print JSON output |
//! | `--timeout-ms` | `10000` | Fetch timeout budget in ms |

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Pivot point action plan CLI.
///
/// Computes classical pivot support/resistance levels and the Central Pivot
/// Range width from one day's High/Low/Close, entered manually or fetched
/// from Yahoo Finance.
#[derive(Debug, Parser)]
#[command(
    name = "pivotline",
    author,
    version,
    about = "Pivot point and CPR analysis CLI"
)]
pub struct Cli {
    /// Output format for results.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, global = true, default_value_t = false)]
    pub pretty: bool,

    /// Fetch timeout budget in milliseconds.
    #[arg(long, global = true, default_value_t = 10_000)]
    pub timeout_ms: u64,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned text table for terminal display.
    Table,
    /// Single JSON object output.
    Json,
}

/// Available CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compute pivot levels from manually entered High/Low/Close.
    ///
    /// All three values must be provided and non-zero; otherwise an
    /// informational placeholder is printed instead of the table.
    ///
    /// # Examples
    ///
    ///   pivotline levels --high 24500 --low 24300 --close 24450
    Levels(LevelsArgs),

    /// Fetch the most recent daily quote and compute pivot levels.
    ///
    /// Defaults to the NIFTY 50 index (^NSEI). Any fetch failure aborts
    /// the run with a single error message.
    ///
    /// # Examples
    ///
    ///   pivotline fetch
    ///   pivotline fetch AAPL --format json --pretty
    Fetch(FetchArgs),
}

/// Arguments for the `levels` command.
#[derive(Debug, Args)]
pub struct LevelsArgs {
    /// Previous day's high.
    #[arg(long, default_value_t = 0.0)]
    pub high: f64,

    /// Previous day's low.
    #[arg(long, default_value_t = 0.0)]
    pub low: f64,

    /// Previous day's close.
    #[arg(long, default_value_t = 0.0)]
    pub close: f64,
}

/// Arguments for the `fetch` command.
#[derive(Debug, Args)]
pub struct FetchArgs {
    /// Instrument symbol (Yahoo notation; indexes use a ^ prefix).
    #[arg(default_value = pivotline_core::DEFAULT_SYMBOL)]
    pub symbol: String,
}
