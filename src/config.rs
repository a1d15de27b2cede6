use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level almanac configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AlmanacConfig {
    /// Zone used when building dates.
    #[serde(default)]
    pub zone: ZoneToml,

    /// Output formatting.
    #[serde(default)]
    pub output: OutputToml,
}

impl AlmanacConfig {
    /// Reads the config at `path`, or returns the defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ZoneToml {
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
}

impl Default for ZoneToml {
    fn default() -> Self {
        Self {
            utc_offset: default_utc_offset(),
        }
    }
}

fn default_utc_offset() -> String {
    "+00:00".to_string()
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    #[serde(default)]
    pub pretty: bool,
}
