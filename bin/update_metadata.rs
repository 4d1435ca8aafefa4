// Tokenization Regulations - Metadata entry point
// Recomputes data/metadata.json from data/countries.json

use anyhow::{Context, Result};
use chrono::Local;
use std::process::ExitCode;

use tokenization_regulations::{format_failure, init_logging, refresh_metadata, Config};

fn main() -> ExitCode {
    init_logging();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", format_failure(&e));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let config = Config::default();
    let today = Local::now().date_naive();

    let metadata = refresh_metadata(&config, today).context("Failed to update metadata")?;

    println!(
        "✓ Updated metadata: {} countries, last updated {}",
        metadata.total_countries, metadata.last_updated
    );
    Ok(())
}
