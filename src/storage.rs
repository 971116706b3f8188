//! Reading and writing whole CSV files.
//!
//! Every cell is treated as text. Writes go to a temporary file next to the
//! destination and are renamed over it only once everything is flushed, so a
//! failed run never leaves a half-written CSV behind.

use std::io::BufWriter;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Writer};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::{PowerballError, Result};
use crate::types::Table;

pub fn read_table(path: &Path) -> Result<Table> {
    if !path.exists() {
        return Err(PowerballError::MissingFile(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;
    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    // Short rows are padded later; long rows would lose cells on rewrite.
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if record.len() > headers.len() {
            return Err(PowerballError::RowTooLong {
                path: path.to_path_buf(),
                line: record.position().map_or(0, |p| p.line()),
                expected: headers.len(),
                found: record.len(),
            });
        }
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(path = %path.display(), rows = rows.len(), "read CSV");
    Ok(Table::new(headers, rows))
}

/// Replaces `path` with `table`, header row first.
pub fn write_table(path: &Path, table: &Table) -> Result<()> {
    let mut writer = AtomicCsvWriter::new(path)?;
    writer.writer_mut().write_record(&table.headers)?;
    for row in &table.rows {
        writer.writer_mut().write_record(row)?;
    }
    writer.finish()?;

    debug!(path = %path.display(), rows = table.rows.len(), "wrote CSV");
    Ok(())
}

/// CSV writer backed by a temp file that is persisted over the target on
/// `finish()` and removed if dropped before that.
pub struct AtomicCsvWriter {
    writer: Writer<BufWriter<NamedTempFile>>,
    final_path: PathBuf,
}

impl AtomicCsvWriter {
    pub fn new(final_path: impl AsRef<Path>) -> Result<Self> {
        let final_path = final_path.as_ref().to_path_buf();

        let parent_dir = match final_path.parent() {
            Some(dir) if dir.as_os_str().is_empty() => Path::new("."),
            Some(dir) => dir,
            None => {
                return Err(PowerballError::Persist {
                    path: final_path,
                    message: "cannot determine parent directory".to_string(),
                });
            }
        };

        // Same directory as the target so the final rename stays on one filesystem.
        let temp_file = NamedTempFile::new_in(parent_dir)?;

        Ok(Self {
            writer: Writer::from_writer(BufWriter::new(temp_file)),
            final_path,
        })
    }

    pub fn writer_mut(&mut self) -> &mut Writer<BufWriter<NamedTempFile>> {
        &mut self.writer
    }

    pub fn finish(self) -> Result<PathBuf> {
        let persist_err = |message: String| PowerballError::Persist {
            path: self.final_path.clone(),
            message,
        };

        let buf_writer = self
            .writer
            .into_inner()
            .map_err(|e| persist_err(format!("failed to flush CSV writer: {}", e.error())))?;

        let named_temp = buf_writer
            .into_inner()
            .map_err(|e| persist_err(format!("failed to flush buffer: {}", e.error())))?;

        named_temp
            .persist(&self.final_path)
            .map_err(|e| persist_err(e.error.to_string()))?;

        Ok(self.final_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let err = read_table(&dir.path().join("nope.csv")).unwrap_err();
        assert!(matches!(err, PowerballError::MissingFile(_)));
    }

    #[test]
    fn reads_all_cells_as_text_and_pads_short_rows() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draws.csv");
        fs::write(
            &path,
            "Draw Date,Winning Numbers,Multiplier\n01/03/2024,01 02 03 04 05 06,02\n01/06/2024,07 08 09 10 11 12\n",
        )
        .unwrap();

        let table = read_table(&path).unwrap();

        assert_eq!(table.headers, vec!["Draw Date", "Winning Numbers", "Multiplier"]);
        assert_eq!(table.rows[0][2], "02");
        assert_eq!(table.rows[1], vec!["01/06/2024", "07 08 09 10 11 12", ""]);
    }

    #[test]
    fn rows_longer_than_header_are_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("draws.csv");
        fs::write(&path, "Draw Date,Winning Numbers\n01/03/2024,1 2,EXTRA\n01/06/2024,3 4\n").unwrap();

        let err = read_table(&path).unwrap_err();

        assert!(matches!(
            err,
            PowerballError::RowTooLong { line: 2, expected: 2, found: 3, .. }
        ));
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn empty_file_reads_as_empty_table() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "").unwrap();

        let table = read_table(&path).unwrap();

        assert!(table.headers.is_empty());
        assert!(table.is_empty());
    }

    #[test]
    fn write_replaces_existing_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");
        fs::write(&path, "OLD_CONTENT").unwrap();

        let table = Table::new(
            vec!["Draw Date".into(), "Note".into()],
            vec![vec!["2024-01-06".into(), "has, comma".into()]],
        );
        write_table(&path, &table).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "Draw Date,Note\n2024-01-06,\"has, comma\"\n");
        assert_eq!(read_table(&path).unwrap(), table);
    }

    #[test]
    fn dropped_writer_leaves_no_files() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.csv");

        {
            let mut writer = AtomicCsvWriter::new(&path).unwrap();
            writer.writer_mut().write_record(["Draw Date"]).unwrap();
        }

        assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
        assert!(!path.exists());
    }

    #[cfg(unix)]
    #[test]
    fn root_path_has_no_parent() {
        assert!(AtomicCsvWriter::new("/").is_err());
    }
}
