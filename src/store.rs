// 🗄️ Country Record Store - countries.json + countries/<CODE>.json
//
// Whole-file overwrites, no temp-file swap. Two overlapping runs race and the
// last writer wins.

use crate::config::Config;
use crate::entities::{CountryMap, CountryRecord};
use crate::error::StoreError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

// ============================================================================
// JSON FILE HELPERS
// ============================================================================

/// Read and decode a JSON file. `Ok(None)` when the file does not exist.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> Result<Option<T>, StoreError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(StoreError::io(path, e)),
    };

    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| StoreError::parse(path, e))
}

/// Pretty-print (2-space indent) and overwrite `path`.
///
/// serde_json writes non-ASCII characters verbatim.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<(), StoreError> {
    let mut content =
        serde_json::to_string_pretty(value).map_err(|e| StoreError::serialize(path, e))?;
    content.push('\n');

    fs::write(path, content).map_err(|e| StoreError::io(path, e))
}

// ============================================================================
// COUNTRY STORE
// ============================================================================

pub struct CountryStore {
    countries_file: PathBuf,
    countries_dir: PathBuf,
}

impl CountryStore {
    pub fn new(config: &Config) -> Self {
        CountryStore {
            countries_file: config.countries_file(),
            countries_dir: config.countries_dir(),
        }
    }

    pub fn countries_file(&self) -> &Path {
        &self.countries_file
    }

    pub fn countries_dir(&self) -> &Path {
        &self.countries_dir
    }

    /// Path of the per-country file for `code`
    pub fn country_file(&self, code: &str) -> PathBuf {
        self.countries_dir.join(format!("{}.json", code))
    }

    /// Load the aggregate file. A missing file is an empty store.
    pub fn load(&self) -> Result<CountryMap, StoreError> {
        let countries = read_json::<CountryMap>(&self.countries_file)?.unwrap_or_default();
        tracing::info!(
            path = %self.countries_file.display(),
            countries = countries.len(),
            "Loaded existing country data"
        );
        Ok(countries)
    }

    /// Number of keys in the aggregate file, without decoding the records
    ///
    /// A missing file counts as zero.
    pub fn count(&self) -> Result<usize, StoreError> {
        let raw = read_json::<Map<String, Value>>(&self.countries_file)?;
        Ok(raw.map_or(0, |countries| countries.len()))
    }

    /// Load a single per-country file
    pub fn load_country(&self, code: &str) -> Result<Option<CountryRecord>, StoreError> {
        read_json(&self.country_file(code))
    }

    /// Overwrite the aggregate file with `countries`
    pub fn save(&self, countries: &CountryMap) -> Result<(), StoreError> {
        if let Some(parent) = self.countries_file.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
            }
        }

        write_json(&self.countries_file, countries)?;
        tracing::info!(
            path = %self.countries_file.display(),
            countries = countries.len(),
            "Saved aggregate country data"
        );
        Ok(())
    }

    /// Write one file per country under the countries directory
    ///
    /// Returns the written paths in key order.
    pub fn save_per_country(&self, countries: &CountryMap) -> Result<Vec<PathBuf>, StoreError> {
        fs::create_dir_all(&self.countries_dir)
            .map_err(|e| StoreError::io(&self.countries_dir, e))?;

        let mut written = Vec::with_capacity(countries.len());
        for (code, record) in countries {
            let path = self.country_file(code);
            write_json(&path, record)?;
            tracing::debug!(country = %code, path = %path.display(), "Saved country file");
            written.push(path);
        }

        Ok(written)
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{LegalFrameworkItem, Regulation, Whitepaper};
    use serde_json::json;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CountryStore {
        CountryStore::new(&Config::new(dir.path()))
    }

    fn sample_record() -> CountryRecord {
        let mut record = CountryRecord {
            overview: Some("Zürich-based FINMA — Überblick".to_string()),
            regulations: Some(vec![
                Regulation::new("DLT Act", "Blockchain amendments").effective("2021-08-01"),
                Regulation::new("FinSA", "Financial Services Act").reference("SR 950.1"),
            ]),
            requirements: Some(vec!["Licence".to_string(), "AML".to_string()]),
            whitepapers: Some(vec![Whitepaper::new("Guidelines", "ICO guidance", "2018-02")
                .topics(&["ICO", "Payment tokens"])]),
            legal_framework: Some(vec![LegalFrameworkItem::new(
                "Banking Act",
                "SR 952.0",
                &["Art. 1a", "Art. 16"],
            )]),
            last_updated: Some("2024-11-30".to_string()),
            auto_fetched: Some(true),
            ..Default::default()
        };
        record.extra.insert("name".to_string(), json!("Schweiz"));
        record
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let countries = store.load().unwrap();
        assert!(countries.is_empty());
    }

    #[test]
    fn test_load_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        fs::write(store.countries_file(), "{ not json").unwrap();

        let result = store.load();
        assert!(matches!(result, Err(StoreError::Parse { .. })));
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut countries = CountryMap::new();
        countries.insert("CH".to_string(), sample_record());
        countries.insert("US".to_string(), CountryRecord::default());

        store.save(&countries).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded, countries);
        let titles: Vec<_> = loaded["CH"]
            .regulations()
            .iter()
            .map(|r| r.title.as_deref())
            .collect();
        assert_eq!(titles, vec![Some("DLT Act"), Some("FinSA")]);
    }

    #[test]
    fn test_save_pretty_prints_non_ascii_verbatim() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut countries = CountryMap::new();
        countries.insert("CH".to_string(), sample_record());
        store.save(&countries).unwrap();

        let content = fs::read_to_string(store.countries_file()).unwrap();
        assert!(content.contains("Zürich-based FINMA — Überblick"));
        assert!(content.starts_with("{\n  \"CH\": {\n    \""));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn test_save_per_country_creates_directory() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert!(!store.countries_dir().exists());

        let mut countries = CountryMap::new();
        countries.insert("CH".to_string(), sample_record());
        countries.insert("SG".to_string(), CountryRecord::default());

        let written = store.save_per_country(&countries).unwrap();

        assert_eq!(written.len(), 2);
        assert!(store.country_file("CH").exists());
        assert!(store.country_file("SG").exists());
        assert_eq!(store.load_country("CH").unwrap(), Some(sample_record()));
    }

    #[test]
    fn test_per_country_file_matches_aggregate_entry() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let mut countries = CountryMap::new();
        countries.insert("CH".to_string(), sample_record());
        store.save(&countries).unwrap();
        store.save_per_country(&countries).unwrap();

        let aggregate: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.countries_file()).unwrap()).unwrap();
        let single: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.country_file("CH")).unwrap()).unwrap();

        assert_eq!(aggregate["CH"], single);
    }

    #[test]
    fn test_load_country_missing_is_none() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        assert_eq!(store.load_country("JP").unwrap(), None);
    }

    #[test]
    fn test_count_reads_keys_only() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        assert_eq!(store.count().unwrap(), 0);

        // Values that don't look like country records are still counted
        fs::write(
            store.countries_file(),
            r#"{"SG": {}, "US": {"regulations": "see sec.gov"}, "GB": null, "CH": 7}"#,
        )
        .unwrap();
        assert_eq!(store.count().unwrap(), 4);
    }

    #[test]
    fn test_curated_file_round_trips_unchanged() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);
        let curated = json!({
            "JP": {
                "name": "Japan",
                "overview": "FSA registers crypto-asset exchange providers",
                "lastUpdated": "2024-Q2",
                "regulations": [
                    { "title": "Payment Services Act", "url": "https://elaws.e-gov.go.jp", "amendments": [2019, 2022] },
                    { "title": "FIEA", "description": "Security token offerings" }
                ],
                "requirements": [],
                "sources": [{ "name": "FSA", "url": "https://www.fsa.go.jp", "type": "Regulator", "lang": "ja" }],
                "contacts": { "primary": "金融庁" }
            }
        });
        fs::write(store.countries_file(), serde_json::to_string(&curated).unwrap()).unwrap();

        let countries = store.load().unwrap();
        store.save(&countries).unwrap();

        let written: Value =
            serde_json::from_str(&fs::read_to_string(store.countries_file()).unwrap()).unwrap();
        assert_eq!(written, curated);
    }

    #[test]
    fn test_save_creates_data_root() {
        let dir = TempDir::new().unwrap();
        let store = CountryStore::new(&Config::new(dir.path().join("nested").join("data")));

        store.save(&CountryMap::new()).unwrap();
        assert!(store.countries_file().exists());
    }
}
