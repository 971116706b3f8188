use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum PowerballError {
    #[error("CSV not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("could not find a draw date column in {} (headers: {headers:?})", .path.display())]
    NoDateColumn { path: PathBuf, headers: Vec<String> },

    #[error("{}: line {line} has {found} cells but the header has {expected}", .path.display())]
    RowTooLong {
        path: PathBuf,
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("request to open data API failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to write {}: {message}", .path.display())]
    Persist { path: PathBuf, message: String },
}

impl PowerballError {
    /// Process exit code reported to the shell for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            PowerballError::MissingFile(_) => 2,
            PowerballError::NoDateColumn { .. } => 3,
            _ => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, PowerballError>;
