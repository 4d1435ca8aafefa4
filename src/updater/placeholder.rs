// 🕒 Placeholder Updater - freshness stamp on an existing record

use super::{validate_country_code, CountryUpdater, UpdateOutcome, UpdatePolicy, UpdateSummary};
use crate::entities::CountryMap;
use crate::error::UpdateError;
use chrono::NaiveDate;

/// Touches `lastUpdated`/`autoFetched` only. Never creates a record.
pub struct PlaceholderUpdater {
    country_code: String,
    label: String,
}

impl PlaceholderUpdater {
    pub fn new(country_code: &str, label: &str) -> Self {
        PlaceholderUpdater {
            country_code: country_code.to_string(),
            label: label.to_string(),
        }
    }
}

impl CountryUpdater for PlaceholderUpdater {
    fn country_code(&self) -> &str {
        &self.country_code
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn policy(&self) -> UpdatePolicy {
        UpdatePolicy::Placeholder
    }

    fn apply(
        &self,
        mut countries: CountryMap,
        today: NaiveDate,
    ) -> Result<(CountryMap, UpdateOutcome), UpdateError> {
        validate_country_code(&self.country_code)?;

        let Some(record) = countries.get_mut(&self.country_code) else {
            tracing::warn!(
                country = %self.country_code,
                source = %self.label,
                "No existing data to update, skipping"
            );
            return Ok((countries, UpdateOutcome::SkippedMissing));
        };

        record.touch(today);
        let summary = UpdateSummary::from_record(record);
        tracing::info!(country = %self.country_code, "Stamped existing record");

        Ok((
            countries,
            UpdateOutcome::Updated {
                policy: UpdatePolicy::Placeholder,
                summary,
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{CountryRecord, Regulation};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap()
    }

    #[test]
    fn test_missing_record_leaves_store_unchanged() {
        let mut countries = CountryMap::new();
        countries.insert("US".to_string(), CountryRecord::default());
        let before = countries.clone();

        for code in ["GB", "CH", "JP"] {
            let updater = PlaceholderUpdater::new(code, code);
            let (after, outcome) = updater.apply(countries.clone(), today()).unwrap();

            assert_eq!(outcome, UpdateOutcome::SkippedMissing);
            assert_eq!(after, before);
        }
    }

    #[test]
    fn test_existing_record_only_gets_stamped() {
        let record = CountryRecord {
            overview: Some("FCA cryptoasset regime".to_string()),
            regulations: Some(vec![Regulation::new(
                "FSMA 2023",
                "Brings cryptoassets in scope",
            )]),
            data_version: Some("1.0".to_string()),
            ..Default::default()
        };
        let mut countries = CountryMap::new();
        countries.insert("GB".to_string(), record.clone());

        let (countries, outcome) = PlaceholderUpdater::new("GB", "UK FCA")
            .apply(countries, today())
            .unwrap();

        let gb = &countries["GB"];
        assert_eq!(gb.last_updated.as_deref(), Some("2024-09-01"));
        assert_eq!(gb.auto_fetched, Some(true));
        assert_eq!(gb.overview, record.overview);
        assert_eq!(gb.regulations, record.regulations);
        assert_eq!(gb.data_version.as_deref(), Some("1.0"));

        match outcome {
            UpdateOutcome::Updated { policy, summary } => {
                assert_eq!(policy, UpdatePolicy::Placeholder);
                assert_eq!(summary.regulations, 1);
            }
            other => panic!("expected Updated, got {:?}", other),
        }
    }
}
