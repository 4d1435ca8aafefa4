// 📊 Metadata Record - Dataset-wide summary
//
// Three fields are recomputed on every run; anything else already present in
// metadata.json is carried through untouched.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Provenance string written on every metadata refresh
pub const DATA_SOURCE: &str = "Automated periodic updates and manual curation";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub last_updated: NaiveDate,

    /// Number of keys in countries.json when this record was computed
    pub total_countries: usize,

    pub data_source: String,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MetadataRecord {
    /// JSON keys owned by the summarizer
    pub const MANAGED_KEYS: [&'static str; 3] = ["lastUpdated", "totalCountries", "dataSource"];
}
