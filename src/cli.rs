use clap::Parser;
use std::path::PathBuf;

use crate::types::SortDirection;

pub const DEFAULT_SORT_PATH: &str = "data/powerball.csv";

#[derive(Parser, Debug)]
#[command(name = "powerball-updater")]
#[command(about = "Append new Powerball draws from NY Open Data to a local CSV", long_about = None)]
pub struct UpdaterCli {
    /// Path to the local CSV to update in place
    #[arg(long, required = true)]
    pub csv: PathBuf,
}

#[derive(Parser, Debug)]
#[command(name = "powerball-sorter")]
#[command(about = "Normalize draw dates to YYYY-MM-DD and sort CSV files by date", long_about = None)]
pub struct SorterCli {
    /// CSV files to sort; each is processed independently
    #[arg(default_value = DEFAULT_SORT_PATH)]
    pub files: Vec<PathBuf>,

    /// Oldest draw first (default is newest first)
    #[arg(long)]
    pub ascending: bool,
}

impl SorterCli {
    pub fn direction(&self) -> SortDirection {
        if self.ascending {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }
}
