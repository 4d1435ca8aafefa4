// ⚙️ Configuration
// Data-root layout and the ordered list of regulator sources to refresh

use crate::updater::RegulatorSource;
use std::path::{Path, PathBuf};

/// Default data root, relative to the working directory
pub const DEFAULT_DATA_ROOT: &str = "data";

const COUNTRIES_FILE: &str = "countries.json";
const COUNTRIES_DIR: &str = "countries";
const METADATA_FILE: &str = "metadata.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding countries.json, countries/ and metadata.json
    pub data_root: PathBuf,

    /// Sources refreshed by the fetch pipeline, in run order
    pub sources: Vec<RegulatorSource>,
}

impl Config {
    /// Configuration rooted at `data_root` with every known source enabled
    pub fn new<P: AsRef<Path>>(data_root: P) -> Self {
        Config {
            data_root: data_root.as_ref().to_path_buf(),
            sources: RegulatorSource::all().to_vec(),
        }
    }

    /// Restrict the run to `sources`
    pub fn with_sources(mut self, sources: Vec<RegulatorSource>) -> Self {
        self.sources = sources;
        self
    }

    /// Aggregate file: data/countries.json
    pub fn countries_file(&self) -> PathBuf {
        self.data_root.join(COUNTRIES_FILE)
    }

    /// Per-country directory: data/countries/
    pub fn countries_dir(&self) -> PathBuf {
        self.data_root.join(COUNTRIES_DIR)
    }

    pub fn metadata_file(&self) -> PathBuf {
        self.data_root.join(METADATA_FILE)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config::new(DEFAULT_DATA_ROOT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout() {
        let config = Config::default();

        assert_eq!(config.countries_file(), Path::new("data/countries.json"));
        assert_eq!(config.countries_dir(), Path::new("data/countries"));
        assert_eq!(config.metadata_file(), Path::new("data/metadata.json"));
    }

    #[test]
    fn test_default_source_order() {
        let config = Config::default();
        let codes: Vec<&str> = config.sources.iter().map(|s| s.country_code()).collect();

        assert_eq!(codes, vec!["SG", "US", "GB", "CH"]);
    }

    #[test]
    fn test_with_sources() {
        let config = Config::new("/tmp/regs").with_sources(vec![RegulatorSource::SwitzerlandFinma]);

        assert_eq!(config.sources, vec![RegulatorSource::SwitzerlandFinma]);
        assert_eq!(config.countries_file(), Path::new("/tmp/regs/countries.json"));
    }
}
