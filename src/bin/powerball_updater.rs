use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use powerball_lib::cli::UpdaterCli;
use powerball_lib::{config, run_update, utils};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = UpdaterCli::parse();
    let config = config::load()?;

    utils::init_tracing();

    match run_update(&config, &cli.csv).await {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            tracing::error!("update failed: {}", e);
            eprintln!("ERROR: {}", e);
            Ok(ExitCode::from(e.exit_code() as u8))
        }
    }
}
