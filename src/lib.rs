pub mod api;
pub mod cli;
pub mod columns;
pub mod config;
pub mod error;
pub mod merge;
pub mod sorter;
pub mod storage;
pub mod types;
pub mod updater;
pub mod utils;

pub use columns::identify_date_column;
pub use error::{PowerballError, Result};
pub use merge::merge;
pub use sorter::{SortOutcome, sort_by_date, sort_file};
pub use types::*;
pub use updater::{UpdateOutcome, run_update};
pub use utils::normalize_date;
