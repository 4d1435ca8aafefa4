// 🧮 Metadata Summarizer - metadata.json
//
// Metadata is advisory: a missing countries.json counts as zero countries and
// only its keys are counted, so curated records of any shape are fine. A file
// that is not a JSON object still fails the run.

use crate::config::Config;
use crate::entities::{CountryMap, MetadataRecord, DATA_SOURCE};
use crate::error::StoreError;
use crate::store::{read_json, write_json, CountryStore};
use chrono::NaiveDate;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Recompute the metadata record
///
/// `totalCountries`, `lastUpdated` and `dataSource` are always overwritten;
/// every other key of `previous` is passed through.
pub fn summarize(
    countries: &CountryMap,
    previous: &Map<String, Value>,
    today: NaiveDate,
) -> MetadataRecord {
    summarize_total(countries.len(), previous, today)
}

/// `summarize` for callers that only hold the number of countries
pub fn summarize_total(
    total_countries: usize,
    previous: &Map<String, Value>,
    today: NaiveDate,
) -> MetadataRecord {
    let extra = previous
        .iter()
        .filter(|(key, _)| !MetadataRecord::MANAGED_KEYS.contains(&key.as_str()))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    MetadataRecord {
        last_updated: today,
        total_countries,
        data_source: DATA_SOURCE.to_string(),
        extra,
    }
}

// ============================================================================
// METADATA STORE
// ============================================================================

pub struct MetadataStore {
    metadata_file: PathBuf,
}

impl MetadataStore {
    pub fn new(config: &Config) -> Self {
        MetadataStore {
            metadata_file: config.metadata_file(),
        }
    }

    pub fn metadata_file(&self) -> &Path {
        &self.metadata_file
    }

    /// Raw previous metadata; empty when the file does not exist yet
    ///
    /// Kept untyped so unknown or legacy keys survive the refresh.
    pub fn load_previous(&self) -> Result<Map<String, Value>, StoreError> {
        Ok(read_json(&self.metadata_file)?.unwrap_or_default())
    }

    pub fn save(&self, metadata: &MetadataRecord) -> Result<(), StoreError> {
        write_json(&self.metadata_file, metadata)
    }
}

/// Load, summarize and persist metadata for the dataset under `config`
pub fn refresh_metadata(config: &Config, today: NaiveDate) -> Result<MetadataRecord, StoreError> {
    let metadata_store = MetadataStore::new(config);
    let previous = metadata_store.load_previous()?;

    let total_countries = CountryStore::new(config).count()?;
    let metadata = summarize_total(total_countries, &previous, today);

    metadata_store.save(&metadata)?;
    tracing::info!(
        path = %metadata_store.metadata_file().display(),
        total_countries = metadata.total_countries,
        last_updated = %metadata.last_updated,
        "Updated metadata"
    );

    Ok(metadata)
}

// ============================================================================
// TESTS
// ============================================================================
