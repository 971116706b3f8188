use std::collections::HashMap;

use chrono::NaiveDate;

use crate::columns::{MULTIPLIER_CANDIDATES, WINNING_NUMBERS_CANDIDATES, find_by_alias};
use crate::types::{DrawRow, Table};
use crate::utils::{format_date, normalize_date};

/// Projects an existing CSV onto the canonical draw shape.
///
/// `date_column` must be a header of `table`. Numbers and multiplier columns
/// are located by alias; when absent their cells become empty strings.
pub fn to_draw_rows(table: &Table, date_column: &str) -> Vec<DrawRow> {
    let Some(date_idx) = table.column_index(date_column) else {
        return Vec::new();
    };
    let numbers_idx = find_by_alias(table, &WINNING_NUMBERS_CANDIDATES)
        .and_then(|name| table.column_index(name));
    let multiplier_idx = find_by_alias(table, &MULTIPLIER_CANDIDATES)
        .and_then(|name| table.column_index(name));

    let cell = |row: &[String], idx: Option<usize>| -> String {
        idx.and_then(|i| row.get(i)).cloned().unwrap_or_default()
    };

    table
        .rows
        .iter()
        .map(|row| DrawRow {
            draw_date: cell(row, Some(date_idx)),
            winning_numbers: cell(row, numbers_idx),
            multiplier: cell(row, multiplier_idx),
        })
        .collect()
}

/// Latest canonical date among `rows`, if any of them parse.
pub fn last_draw_date(rows: &[DrawRow]) -> Option<NaiveDate> {
    rows.iter().filter_map(|r| normalize_date(&r.draw_date)).max()
}

/// Appends `new_rows` after `existing`, keeps the last row seen for each
/// canonical date, and returns the survivors sorted ascending by date.
///
/// Parseable dates are rewritten as `YYYY-MM-DD`. Rows whose date does not
/// parse are never deduplicated, keep their original text, and sort first.
pub fn merge(existing: Vec<DrawRow>, new_rows: Vec<DrawRow>) -> Vec<DrawRow> {
    let keyed: Vec<(Option<NaiveDate>, DrawRow)> = existing
        .into_iter()
        .chain(new_rows)
        .map(|row| (normalize_date(&row.draw_date), row))
        .collect();

    let mut last_seen: HashMap<NaiveDate, usize> = HashMap::new();
    for (idx, (key, _)) in keyed.iter().enumerate() {
        if let Some(date) = key {
            last_seen.insert(*date, idx);
        }
    }

    let mut merged: Vec<(Option<NaiveDate>, DrawRow)> = keyed
        .into_iter()
        .enumerate()
        .filter(|(idx, (key, _))| key.is_none_or(|date| last_seen.get(&date) == Some(idx)))
        .map(|(_, entry)| entry)
        .collect();

    merged.sort_by_key(|(key, _)| *key);

    merged
        .into_iter()
        .map(|(key, mut row)| {
            if let Some(date) = key {
                row.draw_date = format_date(date);
            }
            row
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(date: &str, numbers: &str, multiplier: &str) -> DrawRow {
        DrawRow::new(date, numbers, multiplier)
    }

    fn dates(rows: &[DrawRow]) -> Vec<&str> {
        rows.iter().map(|r| r.draw_date.as_str()).collect()
    }

    #[test]
    fn new_row_wins_on_duplicate_date() {
        let existing = vec![
            row("2024-01-03", "01 02 03 04 05 06", "2"),
            row("2024-01-06", "old", "3"),
        ];
        let fetched = vec![row("2024-01-06", "10 20 30 40 50 26", "4")];

        let merged = merge(existing, fetched);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[1], row("2024-01-06", "10 20 30 40 50 26", "4"));
    }

    #[test]
    fn duplicates_are_matched_on_canonical_date() {
        let existing = vec![row("01/06/2024", "old", "")];
        let fetched = vec![row("2024-01-06T00:00:00.000", "new", "2")];

        let merged = merge(existing, fetched);

        assert_eq!(merged, vec![row("2024-01-06", "new", "2")]);
    }

    #[test]
    fn output_is_ascending_and_canonical() {
        let existing = vec![row("01/10/2024", "c", ""), row("01/03/2024", "a", "")];
        let fetched = vec![row("2024-01-06", "b", "")];

        let merged = merge(existing, fetched);

        assert_eq!(dates(&merged), vec!["2024-01-03", "2024-01-06", "2024-01-10"]);
    }

    #[test]
    fn unparseable_dates_are_kept_and_sorted_first() {
        let existing = vec![
            row("2024-01-03", "a", ""),
            row("n/a", "x", ""),
            row("n/a", "y", ""),
        ];

        let merged = merge(existing, Vec::new());

        assert_eq!(dates(&merged), vec!["n/a", "n/a", "2024-01-03"]);
        assert_eq!(merged[0].winning_numbers, "x");
        assert_eq!(merged[1].winning_numbers, "y");
    }

    #[test]
    fn trailing_new_row_leaves_prior_rows_unchanged() {
        let existing = vec![
            row("2024-01-01", "01 02 03 04 05 06", "2"),
            row("2024-01-03", "07 08 09 10 11 12", "3"),
        ];
        let fetched = vec![row("2024-01-06", "13 14 15 16 17 18", "2")];

        let merged = merge(existing.clone(), fetched);

        assert_eq!(merged.len(), 3);
        assert_eq!(&merged[..2], &existing[..]);
        assert_eq!(merged[2].draw_date, "2024-01-06");
    }

    #[test]
    fn missing_columns_become_empty_strings() {
        let table = Table::new(
            vec!["Date".into(), "Winning Numbers".into()],
            vec![vec!["01/03/2024".into(), "01 02".into()]],
        );

        let rows = to_draw_rows(&table, "Date");

        assert_eq!(rows, vec![row("01/03/2024", "01 02", "")]);
    }

    #[test]
    fn last_draw_date_ignores_unparseable_rows() {
        let rows = vec![row("01/03/2024", "", ""), row("bad", "", ""), row("2023-12-30", "", "")];
        assert_eq!(last_draw_date(&rows), NaiveDate::from_ymd_opt(2024, 1, 3));
        assert_eq!(last_draw_date(&[row("bad", "", "")]), None);
    }
}
