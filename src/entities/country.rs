// 🌏 Country Record - Regulatory profile for one jurisdiction
//
// Records are hand-curated as often as they are generated, so the model is
// lenient: every field is optional, dates stay plain strings, and every level
// keeps the keys it doesn't model in `extra`. A load → save cycle returns the
// same JSON document (key order aside).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// All country records keyed by ISO 3166-1 alpha-2 code
///
/// BTreeMap keeps the aggregate file output deterministic; key order carries
/// no meaning.
pub type CountryMap = BTreeMap<String, CountryRecord>;

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

// ============================================================================
// SUB-ENTITIES
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Regulation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,

    /// Statutory reference, e.g. "Act 2 of 2019"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub publication_date: Option<String>,

    /// Date of the latest revision
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Regulation {
    pub fn new(title: &str, description: &str) -> Self {
        Regulation {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            ..Default::default()
        }
    }

    pub fn effective(mut self, date: &str) -> Self {
        self.effective_date = Some(date.to_string());
        self
    }

    pub fn reference(mut self, reference: &str) -> Self {
        self.reference = Some(reference.to_string());
        self
    }

    pub fn published(mut self, date: &str) -> Self {
        self.publication_date = Some(date.to_string());
        self
    }

    pub fn updated(mut self, date: &str) -> Self {
        self.updated = Some(date.to_string());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// "Regulatory Portal", "Legislation", "Initiative", ...
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Source {
    pub fn new(name: &str, url: &str, source_type: &str) -> Self {
        Source {
            name: Some(name.to_string()),
            url: Some(url.to_string()),
            source_type: Some(source_type.to_string()),
            extra: Map::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Whitepaper {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Publication month or day ("2022-11", "2023-08-15")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Set semantics, display order preserved
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_topics: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Whitepaper {
    pub fn new(title: &str, description: &str, date: &str) -> Self {
        Whitepaper {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            date: Some(date.to_string()),
            ..Default::default()
        }
    }

    pub fn url(mut self, url: &str) -> Self {
        self.url = Some(url.to_string());
        self
    }

    /// Add topics, ignoring ones already present
    pub fn topics(mut self, topics: &[&str]) -> Self {
        let key_topics = self.key_topics.get_or_insert_with(Vec::new);
        for topic in topics {
            if !key_topics.iter().any(|t| t == topic) {
                key_topics.push(topic.to_string());
            }
        }
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationPaper {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// e.g. "2022-10-26 to 2022-12-21"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_period: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_proposals: Option<Vec<String>>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ConsultationPaper {
    pub fn new(title: &str, description: &str, date: &str) -> Self {
        ConsultationPaper {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            date: Some(date.to_string()),
            ..Default::default()
        }
    }

    pub fn period(mut self, period: &str) -> Self {
        self.consultation_period = Some(period.to_string());
        self
    }

    pub fn status(mut self, status: &str) -> Self {
        self.status = Some(status.to_string());
        self
    }

    pub fn proposals(mut self, proposals: &[&str]) -> Self {
        self.key_proposals = Some(owned(proposals));
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegalFrameworkItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub law: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key_provisions: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub penalties: Option<String>,

    /// Free text: may be a date or e.g. "Phased implementation from 2023"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl LegalFrameworkItem {
    pub fn new(law: &str, chapter: &str, key_provisions: &[&str]) -> Self {
        LegalFrameworkItem {
            law: Some(law.to_string()),
            chapter: Some(chapter.to_string()),
            key_provisions: Some(owned(key_provisions)),
            ..Default::default()
        }
    }

    pub fn penalties(mut self, penalties: &str) -> Self {
        self.penalties = Some(penalties.to_string());
        self
    }

    pub fn effective(mut self, date: &str) -> Self {
        self.effective_date = Some(date.to_string());
        self
    }
}

// ============================================================================
// COUNTRY RECORD
// ============================================================================

/// Sections are `Option<Vec<_>>`: a missing key and an empty list are
/// different stored shapes and both survive a rewrite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overview: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulations: Option<Vec<Regulation>>,

    /// Compliance obligations, one sentence each
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Vec<String>>,

    /// Regulators and enforcement bodies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorities: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sources: Option<Vec<Source>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub whitepapers: Option<Vec<Whitepaper>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub consultation_papers: Option<Vec<ConsultationPaper>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub legal_framework: Option<Vec<LegalFrameworkItem>>,

    // ========================================================================
    // FRESHNESS (stamped by updaters)
    // ========================================================================
    /// YYYY-MM-DD when written by an updater; curated values are kept as-is
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_fetched: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_version: Option<String>,

    // ========================================================================
    // PASS-THROUGH (curated keys this crate does not model)
    // ========================================================================
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl CountryRecord {
    pub fn regulations(&self) -> &[Regulation] {
        self.regulations.as_deref().unwrap_or(&[])
    }

    pub fn requirements(&self) -> &[String] {
        self.requirements.as_deref().unwrap_or(&[])
    }

    pub fn authorities(&self) -> &[String] {
        self.authorities.as_deref().unwrap_or(&[])
    }

    pub fn sources(&self) -> &[Source] {
        self.sources.as_deref().unwrap_or(&[])
    }

    pub fn whitepapers(&self) -> &[Whitepaper] {
        self.whitepapers.as_deref().unwrap_or(&[])
    }

    pub fn consultation_papers(&self) -> &[ConsultationPaper] {
        self.consultation_papers.as_deref().unwrap_or(&[])
    }

    pub fn legal_framework(&self) -> &[LegalFrameworkItem] {
        self.legal_framework.as_deref().unwrap_or(&[])
    }

    /// Stamp freshness metadata; the only mutation placeholder updaters make
    pub fn touch(&mut self, today: NaiveDate) {
        self.last_updated = Some(today.format("%Y-%m-%d").to_string());
        self.auto_fetched = Some(true);
    }

    /// Replace every structured section with the ones from `knowledge`.
    ///
    /// Freshness fields and `extra` of `self` are left alone.
    pub fn replace_sections(&mut self, knowledge: CountryRecord) {
        self.overview = knowledge.overview;
        self.regulations = knowledge.regulations;
        self.requirements = knowledge.requirements;
        self.authorities = knowledge.authorities;
        self.sources = knowledge.sources;
        self.whitepapers = knowledge.whitepapers;
        self.consultation_papers = knowledge.consultation_papers;
        self.legal_framework = knowledge.legal_framework;
    }
}

#[cfg(test)]
impl CountryRecord {
    /// True when all seven structured sections hold at least one item
    pub(crate) fn is_comprehensive(&self) -> bool {
        !self.regulations().is_empty()
            && !self.requirements().is_empty()
            && !self.authorities().is_empty()
            && !self.sources().is_empty()
            && !self.whitepapers().is_empty()
            && !self.consultation_papers().is_empty()
            && !self.legal_framework().is_empty()
    }
}

// ============================================================================
// TESTS
// ============================================================================
