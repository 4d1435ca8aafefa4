// Tokenization Regulations Dataset - Core Library
// Exposes all modules for use by the fetch and metadata binaries, and tests

pub mod config;
pub mod entities;
pub mod error;
pub mod fetch;
pub mod metadata;
pub mod store;
pub mod updater;

// Re-export commonly used types
pub use config::{Config, DEFAULT_DATA_ROOT};
pub use entities::{
    ConsultationPaper, CountryMap, CountryRecord, LegalFrameworkItem, MetadataRecord, Regulation,
    Source, Whitepaper, DATA_SOURCE,
};
pub use error::{StoreError, UpdateError};
pub use fetch::{run_fetch, FetchReport};
pub use metadata::{refresh_metadata, summarize, summarize_total, MetadataStore};
pub use store::CountryStore;
pub use updater::{
    get_updater, update_all, updaters_for, ComprehensiveUpdater, CountryUpdate, CountryUpdater,
    PlaceholderUpdater, RegulatorSource, UpdateOutcome, UpdatePolicy, UpdateSummary,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Install the stderr log subscriber used by both binaries
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// Render a fatal error for stderr: the top-level message, then one
/// `Caused by:` line per underlying error down to the I/O or parse failure.
///
/// The cause chain is the whole diagnostic; no backtrace is attached.
pub fn format_failure(err: &anyhow::Error) -> String {
    let mut out = format!("✗ Error: {}", err);
    let mut causes = err.chain().skip(1).peekable();
    if causes.peek().is_some() {
        out.push_str("\nCaused by:");
        for cause in causes {
            out.push_str(&format!("\n    {}", cause));
        }
    }
    out
}

// ============================================================================
// TESTS
// ============================================================================
