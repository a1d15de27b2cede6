use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Calendar dates with weekday-of-month ordinals.
#[derive(Parser)]
#[command(
    name = "almanac",
    version,
    about = "Classify, build and decode YYYY-MM-DD calendar dates"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Report which occurrence of its weekday a date is within its month.
    Classify(ClassifyArgs),
    /// Build a date from its parts and print its JSON encoding.
    New(NewArgs),
    /// Decode a JSON date fragment and print the resulting timestamp.
    Decode(DecodeArgs),
}

/// Arguments for the `classify` subcommand.
#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Date in YYYY-MM-DD form.
    pub date: String,
}

/// Arguments for the `new` subcommand.
#[derive(clap::Args)]
pub struct NewArgs {
    /// Calendar year.
    #[arg(long, allow_hyphen_values = true)]
    pub year: i32,

    /// Month number; values outside 1-12 roll over into adjacent years.
    #[arg(long, allow_hyphen_values = true)]
    pub month: i32,

    /// Day of month; values outside the month roll over into adjacent months.
    #[arg(long, allow_hyphen_values = true)]
    pub day: i32,

    /// UTC offset such as +02:00; overrides [zone].utc_offset from config.
    #[arg(long, allow_hyphen_values = true)]
    pub offset: Option<String>,
}

/// Arguments for the `decode` subcommand.
#[derive(clap::Args)]
pub struct DecodeArgs {
    /// JSON fragment: a quoted "YYYY-MM-DD" string or null.
    pub json: String,
}
