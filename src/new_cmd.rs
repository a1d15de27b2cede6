//! New command: build a date from its parts and print its JSON encoding.

use almanac_calendar::CalendarDate;
use anyhow::{Context, Result};
use tracing::{info, info_span};

use crate::cli::NewArgs;
use crate::config::AlmanacConfig;
use crate::convert;

/// Build a date at midnight in the resolved zone and print `"YYYY-MM-DD"`.
pub fn run(args: NewArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("new").entered();

    let date = build_date(&args, config)?;
    info!(timestamp = %date.timestamp().to_rfc3339(), "built date");

    let json = date
        .to_json()
        .with_context(|| format!("cannot encode {date} as a date-only string"))?;
    println!("{json}");
    Ok(())
}

/// Month and day overflow roll over the way [`CalendarDate::new`] normalizes them.
fn build_date(args: &NewArgs, config: &AlmanacConfig) -> Result<CalendarDate> {
    let zone = convert::resolve_zone(args.offset.as_deref(), config)?;
    let date = CalendarDate::new(args.year, args.month, args.day, zone)?;
    Ok(date)
}
