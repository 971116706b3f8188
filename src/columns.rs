//! Header aliasing and date-column detection.
//!
//! Headers are matched in their normalized form (see
//! [`normalize_header`]), so spellings such as `"Draw Date"`, `draw_date`
//! and `DRAW-DATE` are interchangeable.

use crate::types::Table;
use crate::utils::{normalize_date, normalize_header};

/// Normalized headers recognized as the draw date column.
pub const DATE_CANDIDATES: [&str; 5] = ["drawdate", "date", "drawingdate", "drawdt", "draw"];

pub const WINNING_NUMBERS_CANDIDATES: [&str; 1] = ["winningnumbers"];

pub const MULTIPLIER_CANDIDATES: [&str; 2] = ["multiplier", "powerplay"];

/// First header (in column order) whose normalized form is in `candidates`.
pub fn find_by_alias<'a>(table: &'a Table, candidates: &[&str]) -> Option<&'a str> {
    table
        .headers
        .iter()
        .find(|h| candidates.contains(&normalize_header(h).as_str()))
        .map(String::as_str)
}

/// Column with the most cells that parse as dates. Ties go to the leftmost
/// column; a table where nothing parses yields `None`.
pub fn sniff_date_column(table: &Table) -> Option<&str> {
    let mut best: Option<(usize, usize)> = None;

    for idx in 0..table.headers.len() {
        let hits = table
            .column_values(idx)
            .filter(|v| normalize_date(v).is_some())
            .count();

        if hits > 0 && best.is_none_or(|(_, best_hits)| hits > best_hits) {
            best = Some((idx, hits));
        }
    }

    best.map(|(idx, _)| table.headers[idx].as_str())
}

/// Finds the draw date column: by header alias first, then by content.
pub fn identify_date_column(table: &Table) -> Option<&str> {
    find_by_alias(table, &DATE_CANDIDATES).or_else(|| sniff_date_column(table))
}
