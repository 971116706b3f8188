use std::collections::HashMap;

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{info, warn};

use crate::config::Config;
use crate::error::Result;
use crate::types::DrawRow;
use crate::utils::{format_date, normalize_date};

/// A record as returned by the open data endpoint: field name to scalar.
pub type ApiRecord = HashMap<String, Value>;

pub const DRAW_DATE_FIELDS: [&str; 3] = ["draw_date", "drawdate", "date"];
pub const WINNING_NUMBERS_FIELDS: [&str; 2] = ["winning_numbers", "winningnumbers"];
pub const MULTIPLIER_FIELDS: [&str; 3] = ["multiplier", "power_play", "powerplay"];

/// Fetches every draw dated strictly after `since`, oldest first.
pub async fn fetch_since(config: &Config, since: NaiveDate) -> Result<Vec<DrawRow>> {
    let client = reqwest::Client::builder().timeout(config.timeout()).build()?;

    let filter = format!("draw_date > '{}'", format_date(since));
    let limit = config.fetch_limit.to_string();

    info!(url = %config.dataset_url(), %filter, "fetching new draws");

    let response = client
        .get(config.dataset_url())
        .query(&[
            ("$where", filter.as_str()),
            ("$order", "draw_date asc"),
            ("$limit", limit.as_str()),
        ])
        .send()
        .await?
        .error_for_status()?;

    let records: Vec<ApiRecord> = response.json().await?;
    info!(records = records.len(), "received draws");

    Ok(records_to_draws(records))
}

/// Maps raw API records onto canonical rows, sorted ascending by date.
/// Records without a parseable date are dropped.
pub fn records_to_draws(records: Vec<ApiRecord>) -> Vec<DrawRow> {
    let mut dated: Vec<(NaiveDate, DrawRow)> = Vec::with_capacity(records.len());

    for record in &records {
        let raw_date = first_field(record, &DRAW_DATE_FIELDS).unwrap_or_default();
        let Some(date) = normalize_date(&raw_date) else {
            warn!(?record, "skipping record without a usable draw date");
            continue;
        };

        dated.push((
            date,
            DrawRow {
                draw_date: format_date(date),
                winning_numbers: first_field(record, &WINNING_NUMBERS_FIELDS).unwrap_or_default(),
                multiplier: first_field(record, &MULTIPLIER_FIELDS).unwrap_or_default(),
            },
        ));
    }

    dated.sort_by_key(|(date, _)| *date);
    dated.into_iter().map(|(_, row)| row).collect()
}

/// Value of the first alias present with a non-empty value.
fn first_field(record: &ApiRecord, aliases: &[&str]) -> Option<String> {
    aliases.iter().find_map(|name| match record.get(*name)? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    })
}
