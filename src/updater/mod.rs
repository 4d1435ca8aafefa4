// 🔄 Regulation Updater Framework
//
// Every regulator source has an update policy:
// - Comprehensive: rebuild the record from an in-code knowledge base
// - Placeholder: stamp freshness on an existing record, never create one
//
// Updaters take the country map by value and hand it back, so a policy can be
// exercised on its own without any shared state.

pub mod comprehensive;
pub mod placeholder;
pub mod singapore;

pub use comprehensive::ComprehensiveUpdater;
pub use placeholder::PlaceholderUpdater;

use crate::entities::{CountryMap, CountryRecord};
use crate::error::UpdateError;
use chrono::NaiveDate;

// ============================================================================
// CORE TYPES
// ============================================================================

/// Regulator feeds the fetch pipeline knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegulatorSource {
    SingaporeMas,
    UsSec,
    UkFca,
    SwitzerlandFinma,
}

impl RegulatorSource {
    /// Every source, in the order the fetch pipeline runs them
    pub fn all() -> &'static [RegulatorSource] {
        &[
            RegulatorSource::SingaporeMas,
            RegulatorSource::UsSec,
            RegulatorSource::UkFca,
            RegulatorSource::SwitzerlandFinma,
        ]
    }

    /// Human-readable label for progress output
    pub fn name(&self) -> &'static str {
        match self {
            RegulatorSource::SingaporeMas => "Singapore MAS",
            RegulatorSource::UsSec => "US SEC",
            RegulatorSource::UkFca => "UK FCA",
            RegulatorSource::SwitzerlandFinma => "Switzerland FINMA",
        }
    }

    /// ISO 3166-1 alpha-2 key in countries.json
    pub fn country_code(&self) -> &'static str {
        match self {
            RegulatorSource::SingaporeMas => "SG",
            RegulatorSource::UsSec => "US",
            RegulatorSource::UkFca => "GB",
            RegulatorSource::SwitzerlandFinma => "CH",
        }
    }

    pub fn policy(&self) -> UpdatePolicy {
        match self {
            RegulatorSource::SingaporeMas => UpdatePolicy::Comprehensive,
            RegulatorSource::UsSec | RegulatorSource::UkFca | RegulatorSource::SwitzerlandFinma => {
                UpdatePolicy::Placeholder
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdatePolicy {
    /// Replace every structured section and bump dataVersion
    Comprehensive,
    /// Touch lastUpdated/autoFetched on an existing record only
    Placeholder,
}

/// Item counts per section of an updated record
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UpdateSummary {
    pub regulations: usize,
    pub whitepapers: usize,
    pub consultation_papers: usize,
    pub legal_framework: usize,
    pub requirements: usize,
    pub authorities: usize,
    pub sources: usize,
}

impl UpdateSummary {
    pub fn from_record(record: &CountryRecord) -> Self {
        UpdateSummary {
            regulations: record.regulations().len(),
            whitepapers: record.whitepapers().len(),
            consultation_papers: record.consultation_papers().len(),
            legal_framework: record.legal_framework().len(),
            requirements: record.requirements().len(),
            authorities: record.authorities().len(),
            sources: record.sources().len(),
        }
    }
}

/// Result of one updater run. Failures travel in the `Err` arm of `apply`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateOutcome {
    Updated {
        policy: UpdatePolicy,
        summary: UpdateSummary,
    },
    /// Placeholder policy found no record to touch
    SkippedMissing,
}

impl UpdateOutcome {
    pub fn is_updated(&self) -> bool {
        matches!(self, UpdateOutcome::Updated { .. })
    }
}

/// One entry of the per-run report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryUpdate {
    pub country_code: String,
    pub label: String,
    pub outcome: UpdateOutcome,
}

// ============================================================================
// UPDATER TRAIT
// ============================================================================

/// CountryUpdater - one country, one policy
///
/// New countries are added by constructing another updater; nothing else in
/// the pipeline changes.
pub trait CountryUpdater: Send + Sync {
    /// Key of the record this updater owns
    fn country_code(&self) -> &str;

    /// Label used in progress output ("Singapore MAS")
    fn label(&self) -> &str;

    fn policy(&self) -> UpdatePolicy;

    /// Update the record for `country_code()` and return the map
    ///
    /// # Returns
    /// * `Ok((map, Updated))` - record created, replaced or stamped
    /// * `Ok((map, SkippedMissing))` - nothing to do, map untouched
    /// * `Err(UpdateError)` - the updater is misconfigured
    fn apply(
        &self,
        countries: CountryMap,
        today: NaiveDate,
    ) -> Result<(CountryMap, UpdateOutcome), UpdateError>;
}

/// Check that `code` looks like an ISO 3166-1 alpha-2 code ("SG", "GB")
pub fn validate_country_code(code: &str) -> Result<(), UpdateError> {
    if code.len() == 2 && code.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(UpdateError::InvalidCountryCode {
            code: code.to_string(),
        })
    }
}

// ============================================================================
// FACTORY FUNCTIONS
// ============================================================================

/// Get the updater matching a source's policy
pub fn get_updater(source: RegulatorSource) -> Box<dyn CountryUpdater> {
    match source {
        RegulatorSource::SingaporeMas => Box::new(ComprehensiveUpdater::new(
            source.country_code(),
            source.name(),
            singapore::knowledge_base,
            singapore::DATA_VERSION,
        )),
        _ => Box::new(PlaceholderUpdater::new(source.country_code(), source.name())),
    }
}

/// Updaters for `sources`, preserving order
pub fn updaters_for(sources: &[RegulatorSource]) -> Vec<Box<dyn CountryUpdater>> {
    sources.iter().copied().map(get_updater).collect()
}

/// Run `updaters` in order over `countries`
///
/// Missing records are reported and skipped; any `Err` aborts the remaining
/// updaters and the partially updated map is dropped.
pub fn update_all(
    mut countries: CountryMap,
    updaters: &[Box<dyn CountryUpdater>],
    today: NaiveDate,
) -> Result<(CountryMap, Vec<CountryUpdate>), UpdateError> {
    let mut report = Vec::with_capacity(updaters.len());

    for updater in updaters {
        tracing::info!(source = updater.label(), "Fetching data");
        let (next, outcome) = updater.apply(countries, today)?;
        countries = next;

        report.push(CountryUpdate {
            country_code: updater.country_code().to_string(),
            label: updater.label().to_string(),
            outcome,
        });
    }

    Ok((countries, report))
}

// ============================================================================
// TESTS
// ============================================================================
