use std::path::Path;

use tracing::warn;

use crate::columns::identify_date_column;
use crate::error::{PowerballError, Result};
use crate::storage::{read_table, write_table};
use crate::types::{SortDirection, Table};
use crate::utils::canonical_date;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortOutcome {
    Sorted { column: String },
    SkippedMissing,
    SkippedNoDateColumn { headers: Vec<String> },
}

impl SortOutcome {
    pub fn exit_code(&self) -> i32 {
        match self {
            SortOutcome::Sorted { .. } => 0,
            SortOutcome::SkippedMissing => 2,
            SortOutcome::SkippedNoDateColumn { .. } => 3,
        }
    }
}

/// Rewrites `column` to canonical dates and stably sorts the rows by it.
///
/// Unparseable cells become empty strings, which sort before every date
/// ascending and after every date descending. Returns the table unchanged
/// when `column` isn't one of its headers.
pub fn sort_by_date(mut table: Table, column: &str, direction: SortDirection) -> Table {
    let Some(idx) = table.column_index(column) else {
        return table;
    };
    table.pad_rows();

    for row in &mut table.rows {
        row[idx] = canonical_date(&row[idx]).unwrap_or_default();
    }

    match direction {
        SortDirection::Ascending => table.rows.sort_by(|a, b| a[idx].cmp(&b[idx])),
        SortDirection::Descending => table.rows.sort_by(|a, b| b[idx].cmp(&a[idx])),
    }

    table
}

/// Sorts one CSV in place. Missing files and files without a date-like
/// column are reported as skips and left untouched.
pub fn sort_file(path: &Path, direction: SortDirection) -> Result<SortOutcome> {
    let table = match read_table(path) {
        Ok(table) => table,
        Err(PowerballError::MissingFile(_)) => {
            println!("#skip: {} not found", path.display());
            return Ok(SortOutcome::SkippedMissing);
        }
        Err(e) => return Err(e),
    };

    let Some(column) = identify_date_column(&table).map(str::to_string) else {
        warn!(path = %path.display(), headers = ?table.headers, "no date-like column");
        println!(
            "#skip: {} has no date-like column (headers: {:?})",
            path.display(),
            table.headers
        );
        return Ok(SortOutcome::SkippedNoDateColumn {
            headers: table.headers,
        });
    };

    let sorted = sort_by_date(table, &column, direction);
    write_table(path, &sorted)?;

    println!(
        "#sorted: {} by {} ({}, date only)",
        path.display(),
        column,
        direction.label()
    );
    Ok(SortOutcome::Sorted { column })
}

/// Sorts each file independently and returns the exit code of the last one.
pub fn sort_files(paths: &[impl AsRef<Path>], direction: SortDirection) -> i32 {
    let mut exit_code = 0;

    for path in paths {
        let path = path.as_ref();
        exit_code = match sort_file(path, direction) {
            Ok(outcome) => outcome.exit_code(),
            Err(e) => {
                eprintln!("❌ Failed to sort {}: {}", path.display(), e);
                e.exit_code()
            }
        };
    }

    exit_code
}
