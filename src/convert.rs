//! Pure conversion functions: CLI and TOML strings -> chrono / calendar types.

use anyhow::{Result, anyhow};
use chrono::FixedOffset;
use serde::Serialize;

use crate::config::{AlmanacConfig, OutputToml};

/// Parses a UTC offset such as `+02:00`, `-05:30`, `Z` or `UTC`.
pub fn parse_utc_offset(s: &str) -> Result<FixedOffset> {
    match s.trim() {
        "Z" | "z" | "UTC" | "utc" => Ok(FixedOffset::east_opt(0).expect("zero offset is valid")),
        other => other
            .parse::<FixedOffset>()
            .map_err(|e| anyhow!("invalid UTC offset {other:?}: {e}")),
    }
}

/// Picks the zone for a command: an explicit CLI offset wins over the config.
pub fn resolve_zone(cli_offset: Option<&str>, config: &AlmanacConfig) -> Result<FixedOffset> {
    parse_utc_offset(cli_offset.unwrap_or(&config.zone.utc_offset))
}

/// Renders `value` as JSON, pretty-printed if the config asks for it.
pub fn to_json_output<T: Serialize>(value: &T, output: &OutputToml) -> Result<String> {
    let json = if output.pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
