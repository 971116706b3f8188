/// Header names of the three canonical output columns, in output order.
pub const DRAW_DATE_HEADER: &str = "Draw Date";
pub const WINNING_NUMBERS_HEADER: &str = "Winning Numbers";
pub const MULTIPLIER_HEADER: &str = "Multiplier";

pub const CANONICAL_HEADERS: [&str; 3] =
    [DRAW_DATE_HEADER, WINNING_NUMBERS_HEADER, MULTIPLIER_HEADER];

/// A CSV file held in memory. Rows built through `new` have at least
/// `headers.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Builds a table, padding short rows. Rows are never truncated.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        let mut table = Self { headers, rows };
        table.pad_rows();
        table
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell values of column `idx`, top to bottom. Missing cells read as "".
    pub fn column_values(&self, idx: usize) -> impl Iterator<Item = &str> {
        self.rows
            .iter()
            .map(move |row| row.get(idx).map_or("", String::as_str))
    }

    /// Pads every row that is shorter than the header with empty cells.
    pub fn pad_rows(&mut self) {
        let width = self.headers.len();
        for row in &mut self.rows {
            if row.len() < width {
                row.resize(width, String::new());
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One draw in the canonical three-column shape. Empty strings mark absent values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawRow {
    pub draw_date: String,
    pub winning_numbers: String,
    pub multiplier: String,
}

impl DrawRow {
    pub fn new(draw_date: &str, winning_numbers: &str, multiplier: &str) -> Self {
        Self {
            draw_date: draw_date.to_string(),
            winning_numbers: winning_numbers.to_string(),
            multiplier: multiplier.to_string(),
        }
    }

    pub fn into_record(self) -> Vec<String> {
        vec![self.draw_date, self.winning_numbers, self.multiplier]
    }
}

/// Builds a canonical three-column table from draw rows.
pub fn draws_to_table(draws: Vec<DrawRow>) -> Table {
    Table {
        headers: CANONICAL_HEADERS.iter().map(|h| h.to_string()).collect(),
        rows: draws.into_iter().map(DrawRow::into_record).collect(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn label(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_rows_are_padded_to_header_width() {
        let table = Table::new(
            vec!["a".into(), "b".into(), "c".into()],
            vec![vec!["1".into()], vec!["1".into(), "2".into(), "3".into()]],
        );
        assert_eq!(table.rows[0], vec!["1", "", ""]);
        assert_eq!(table.rows[1].len(), 3);
    }

    #[test]
    fn hand_built_short_rows_read_as_empty() {
        let table = Table {
            headers: vec!["a".into(), "b".into()],
            rows: vec![vec!["1".into()]],
        };
        assert_eq!(table.column_values(1).collect::<Vec<_>>(), vec![""]);
    }

    #[test]
    fn draws_to_table_uses_canonical_headers() {
        let table = draws_to_table(vec![DrawRow::new("2024-01-06", "01 02 03 04 05 06", "2")]);
        assert_eq!(table.headers, vec!["Draw Date", "Winning Numbers", "Multiplier"]);
        assert_eq!(table.rows[0][2], "2");
        assert_eq!(table.column_index("Multiplier"), Some(2));
    }
}
