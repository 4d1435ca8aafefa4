// 📚 Comprehensive Updater - full replace from an in-code knowledge base

use super::{validate_country_code, CountryUpdater, UpdateOutcome, UpdatePolicy, UpdateSummary};
use crate::entities::{CountryMap, CountryRecord};
use crate::error::UpdateError;
use chrono::NaiveDate;

/// Rebuilds a country's structured sections unconditionally
///
/// Creates the record when absent. Keys outside the modelled sections (for
/// example a curated "name") survive the replace.
pub struct ComprehensiveUpdater {
    country_code: String,
    label: String,
    knowledge: fn() -> CountryRecord,
    data_version: String,
}

impl ComprehensiveUpdater {
    pub fn new(
        country_code: &str,
        label: &str,
        knowledge: fn() -> CountryRecord,
        data_version: &str,
    ) -> Self {
        ComprehensiveUpdater {
            country_code: country_code.to_string(),
            label: label.to_string(),
            knowledge,
            data_version: data_version.to_string(),
        }
    }
}

impl CountryUpdater for ComprehensiveUpdater {
    fn country_code(&self) -> &str {
        &self.country_code
    }

    fn label(&self) -> &str {
        &self.label
    }

    fn policy(&self) -> UpdatePolicy {
        UpdatePolicy::Comprehensive
    }

    fn apply(
        &self,
        mut countries: CountryMap,
        today: NaiveDate,
    ) -> Result<(CountryMap, UpdateOutcome), UpdateError> {
        validate_country_code(&self.country_code)?;

        let record = countries.entry(self.country_code.clone()).or_default();
        record.replace_sections((self.knowledge)());
        record.touch(today);
        record.data_version = Some(self.data_version.clone());

        let summary = UpdateSummary::from_record(record);
        tracing::info!(
            country = %self.country_code,
            regulations = summary.regulations,
            whitepapers = summary.whitepapers,
            consultation_papers = summary.consultation_papers,
            legal_framework = summary.legal_framework,
            requirements = summary.requirements,
            sources = summary.sources,
            "Replaced country record from knowledge base"
        );

        Ok((
            countries,
            UpdateOutcome::Updated {
                policy: UpdatePolicy::Comprehensive,
                summary,
            },
        ))
    }
}
