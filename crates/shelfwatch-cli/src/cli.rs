//! CLI argument definitions for the shelf-life tracker.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use shelfwatch_model::{FieldId, FieldMap};

#[derive(Parser)]
#[command(
    name = "shelfwatch",
    version,
    about = "Lab reagent shelf-life tracker",
    long_about = "Track laboratory reagent expiry dates from a CSV inventory.\n\n\
                  Classifies each reagent as expired, imminent, attention, or safe,\n\
                  prints an urgency-ordered alert list and a searchable full listing,\n\
                  and writes a colored CSV export."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify an inventory file and print alerts plus the full listing.
    Check(CheckArgs),

    /// Write the colored CSV export of a classified inventory.
    Export(ExportArgs),

    /// Show the logical field mapping in effect.
    Fields(FieldsArgs),
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Path to the reagent inventory CSV.
    #[arg(value_name = "FILE")]
    pub source: PathBuf,

    /// Reference date for remaining-days math (default: today).
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Filter the full listing by a case-insensitive substring.
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,

    #[command(flatten)]
    pub columns: ColumnArgs,
}

#[derive(Parser)]
pub struct ExportArgs {
    /// Path to the reagent inventory CSV.
    #[arg(value_name = "FILE")]
    pub source: PathBuf,

    /// Destination for the colored export.
    #[arg(long = "output", value_name = "FILE")]
    pub output: PathBuf,

    /// Reference date for remaining-days math (default: today).
    #[arg(long = "today", value_name = "YYYY-MM-DD")]
    pub today: Option<NaiveDate>,

    /// Header of the appended remaining-days column.
    #[arg(long = "days-column", value_name = "HEADER")]
    pub days_column: Option<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,

    #[command(flatten)]
    pub columns: ColumnArgs,
}

#[derive(Parser)]
pub struct FieldsArgs {
    #[command(flatten)]
    pub columns: ColumnArgs,
}

/// Alert-policy overrides.
#[derive(Args)]
pub struct PolicyArgs {
    /// Exact remaining-day values that raise an imminent alert.
    #[arg(
        long = "alert-days",
        value_name = "DAYS",
        value_delimiter = ',',
        num_args = 1..
    )]
    pub alert_days: Option<Vec<i64>>,

    /// Inclusive remaining-days upper bound for the attention window.
    #[arg(long = "window", value_name = "DAYS")]
    pub window: Option<i64>,
}

/// Column-header overrides for the logical field mapping.
#[derive(Args)]
pub struct ColumnArgs {
    /// Header of the product-name column.
    #[arg(long = "name-column", value_name = "HEADER")]
    pub name: Option<String>,

    /// Header of the reagent-kind column.
    #[arg(long = "kind-column", value_name = "HEADER")]
    pub kind: Option<String>,

    /// Header of the expiry-date column (required field).
    #[arg(long = "expiry-column", value_name = "HEADER")]
    pub expiry: Option<String>,

    /// Header of the hazard-description column.
    #[arg(long = "danger-column", value_name = "HEADER")]
    pub danger: Option<String>,

    /// Header of the registration-date column.
    #[arg(long = "registered-column", value_name = "HEADER")]
    pub registered: Option<String>,
}

impl ColumnArgs {
    /// Default mapping with any per-field overrides applied.
    pub fn field_map(&self) -> FieldMap {
        let mut map = FieldMap::default();
        if let Some(header) = &self.name {
            map.set(FieldId::Name, header.clone());
        }
        if let Some(header) = &self.kind {
            map.set(FieldId::Kind, header.clone());
        }
        if let Some(header) = &self.expiry {
            map.set(FieldId::ExpiryDate, header.clone());
        }
        if let Some(header) = &self.danger {
            map.set(FieldId::Danger, header.clone());
        }
        if let Some(header) = &self.registered {
            map.set(FieldId::Registered, header.clone());
        }
        map
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
