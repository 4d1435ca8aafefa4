// Tokenization Regulations - Fetch entry point
// Refreshes data/countries.json and data/countries/<CODE>.json

use anyhow::Result;
use chrono::Local;
use std::process::ExitCode;

use tokenization_regulations::{
    format_failure, init_logging, run_fetch, Config, UpdateOutcome, UpdatePolicy,
};

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

    println!("\n=== Starting data fetch ===\n");
    let report = run_fetch(&config, today)?;
    println!("Loaded existing data for {} countries", report.loaded);

    for update in &report.updates {
        match &update.outcome {
            UpdateOutcome::Updated {
                policy: UpdatePolicy::Comprehensive,
                summary,
            } => {
                println!(
                    "✓ Updated {} data with comprehensive regulations, whitepapers, consultation papers, and legal framework",
                    update.label
                );
                println!("  - {} regulations", summary.regulations);
                println!("  - {} whitepapers", summary.whitepapers);
                println!("  - {} consultation papers", summary.consultation_papers);
                println!("  - {} legal framework items", summary.legal_framework);
                println!("  - {} requirements", summary.requirements);
                println!("  - {} sources", summary.sources);
            }
            UpdateOutcome::Updated { .. } => {
                println!("✓ Updated {} data ({})", update.label, update.country_code);
            }
            UpdateOutcome::SkippedMissing => {
                println!(
                    "! No existing {} data to update ({})",
                    update.label, update.country_code
                );
            }
        }
    }

    println!("\n=== Fetch complete ===\n");
    println!("✓ Saved data to {}", report.countries_file.display());
    for path in &report.country_files {
        println!("✓ Saved {}", path.display());
    }

    println!("\n✓ All operations completed successfully");
    Ok(())
}
