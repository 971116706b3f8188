use std::path::Path;

use chrono::NaiveDate;
use tracing::info;

use crate::api::fetch_since;
use crate::columns::identify_date_column;
use crate::config::Config;
use crate::error::{PowerballError, Result};
use crate::merge::{last_draw_date, merge, to_draw_rows};
use crate::storage::{read_table, write_table};
use crate::types::draws_to_table;
use crate::utils::format_date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    UpToDate { last_date: NaiveDate },
    Appended { last_date: NaiveDate, added: usize },
}

/// Day before the dataset begins; used when the CSV has no usable dates.
fn history_floor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2009, 12, 31).unwrap_or_default()
}

/// Pulls draws newer than the CSV's latest date and rewrites the file with
/// the merged, deduplicated rows. The file is only written after the fetch
/// succeeds and only when there is something new.
///
/// The rewrite puts every parseable existing date in canonical `YYYY-MM-DD`
/// form, so a file kept as `MM/DD/YYYY` changes format on its first update.
/// Row contents and order are otherwise unchanged.
pub async fn run_update(config: &Config, csv_path: &Path) -> Result<UpdateOutcome> {
    let table = read_table(csv_path)?;

    let date_column = identify_date_column(&table)
        .ok_or_else(|| PowerballError::NoDateColumn {
            path: csv_path.to_path_buf(),
            headers: table.headers.clone(),
        })?
        .to_string();
    info!(column = %date_column, "using draw date column");

    let existing = to_draw_rows(&table, &date_column);
    let last_date = last_draw_date(&existing).unwrap_or_else(history_floor);
    println!("Last date in CSV: {}", format_date(last_date));

    let fetched = fetch_since(config, last_date).await?;
    if fetched.is_empty() {
        println!("🎯 No new draws found. You're up to date!");
        return Ok(UpdateOutcome::UpToDate { last_date });
    }

    let added = fetched.len();
    println!("📥 Appending {} new row(s).", added);

    let merged = merge(existing, fetched);
    write_table(csv_path, &draws_to_table(merged))?;
    println!("✅ Updated CSV saved: {}", csv_path.display());

    Ok(UpdateOutcome::Appended { last_date, added })
}
