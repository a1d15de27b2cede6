//! Classify command: weekday and weekday-of-month ordinal of a date.

use almanac_calendar::{CalendarDate, WeekdayOfMonth};
use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info_span};

use crate::cli::ClassifyArgs;
use crate::config::AlmanacConfig;
use crate::convert;

#[derive(Debug, Serialize)]
struct Classification {
    date: CalendarDate,
    weekday: String,
    weekday_of_month: WeekdayOfMonth,
    ordinal: u8,
}

fn classify(date: CalendarDate) -> Classification {
    let weekday_of_month = date.weekday_of_month();
    Classification {
        date,
        weekday: date.weekday().to_string(),
        weekday_of_month,
        ordinal: weekday_of_month.number(),
    }
}

/// Parse a date and print its classification as JSON.
pub fn run(args: ClassifyArgs, config: &AlmanacConfig) -> Result<()> {
    let _cmd = info_span!("classify", date = %args.date).entered();

    let date = CalendarDate::parse(&args.date)
        .with_context(|| format!("invalid date argument: {}", args.date))?;
    let classification = classify(date);
    debug!(ordinal = classification.ordinal, "classified");

    println!("{}", convert::to_json_output(&classification, &config.output)?);
    Ok(())
}
