use std::env;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

pub const DEFAULT_API_BASE: &str = "https://data.ny.gov/resource";
/// NY Open Data "Lottery Powerball Winning Numbers: Beginning 2010".
pub const DEFAULT_DATASET_ID: &str = "d6yy-54nr";
pub const DEFAULT_FETCH_LIMIT: u32 = 50_000;
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_base: String,
    pub dataset_id: String,
    pub fetch_limit: u32,
    pub timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            dataset_id: DEFAULT_DATASET_ID.to_string(),
            fetch_limit: DEFAULT_FETCH_LIMIT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// `<api_base>/<dataset_id>.json`
    pub fn dataset_url(&self) -> String {
        format!("{}/{}.json", self.api_base.trim_end_matches('/'), self.dataset_id)
    }
}

pub fn load() -> Result<Config> {
    load_with(|key| env::var(key).ok())
}

pub fn load_with(lookup: impl Fn(&str) -> Option<String>) -> Result<Config> {
    let defaults = Config::default();

    let api_base = lookup("POWERBALL_API_BASE").unwrap_or(defaults.api_base);
    let dataset_id = lookup("POWERBALL_DATASET_ID").unwrap_or(defaults.dataset_id);

    let fetch_limit = match lookup("POWERBALL_FETCH_LIMIT") {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("POWERBALL_FETCH_LIMIT is not a number: {raw:?}"))?,
        None => defaults.fetch_limit,
    };

    let timeout_secs = match lookup("POWERBALL_HTTP_TIMEOUT_SECS") {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("POWERBALL_HTTP_TIMEOUT_SECS is not a number: {raw:?}"))?,
        None => defaults.timeout_secs,
    };

    Ok(Config {
        api_base,
        dataset_id,
        fetch_limit,
        timeout_secs,
    })
}
