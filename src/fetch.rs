// 📥 Fetch Pipeline - load → update → save aggregate → save per-country
//
// Nothing is written unless every updater succeeds.

use crate::config::Config;
use crate::store::CountryStore;
use crate::updater::{update_all, updaters_for, CountryUpdate};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::PathBuf;

/// What one fetch run did
#[derive(Debug, Clone)]
pub struct FetchReport {
    /// Records present before the run
    pub loaded: usize,

    /// Per-source outcomes, in run order
    pub updates: Vec<CountryUpdate>,

    /// Records written to the aggregate file
    pub saved: usize,

    pub countries_file: PathBuf,
    pub country_files: Vec<PathBuf>,
}

impl FetchReport {
    pub fn updated_count(&self) -> usize {
        self.updates.iter().filter(|u| u.outcome.is_updated()).count()
    }

    pub fn skipped_count(&self) -> usize {
        self.updates.len() - self.updated_count()
    }
}

pub fn run_fetch(config: &Config, today: NaiveDate) -> Result<FetchReport> {
    let store = CountryStore::new(config);

    let countries = store.load().context("Failed to load existing country data")?;
    let loaded = countries.len();

    let updaters = updaters_for(&config.sources);
    let (countries, updates) =
        update_all(countries, &updaters, today).context("Country update failed")?;

    store
        .save(&countries)
        .context("Failed to save aggregate country data")?;
    let country_files = store
        .save_per_country(&countries)
        .context("Failed to write per-country files")?;

    Ok(FetchReport {
        loaded,
        updates,
        saved: countries.len(),
        countries_file: store.countries_file().to_path_buf(),
        country_files,
    })
}
