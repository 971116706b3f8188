use std::process::ExitCode;

use clap::Parser;

use powerball_lib::cli::SorterCli;
use powerball_lib::{sorter, utils};

fn main() -> ExitCode {
    let cli = SorterCli::parse();

    utils::init_tracing();

    let code = sorter::sort_files(&cli.files, cli.direction());
    ExitCode::from(code as u8)
}
