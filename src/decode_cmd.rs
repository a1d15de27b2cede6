//! Decode command: JSON date fragment -> RFC 3339 timestamp.

use almanac_calendar::CalendarDate;
use anyhow::{Context, Result};
use tracing::{debug, info_span};

use crate::cli::DecodeArgs;

/// Decode `args.json` and print the timestamp it denotes.
///
/// `null` prints the zero date.
pub fn run(args: DecodeArgs) -> Result<()> {
    let _cmd = info_span!("decode").entered();

    let date = CalendarDate::from_json(&args.json)
        .with_context(|| format!("failed to decode date from {}", args.json))?;
    debug!(weekday_of_month = %date.weekday_of_month(), "decoded");

    println!("{}", date.timestamp().to_rfc3339());
    Ok(())
}
