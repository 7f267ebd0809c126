//! papers-core: affiliation screening for scholarly publications
//!
//! This library provides:
//! - Keyword-driven classification of affiliation strings (academic vs. commercial)
//! - Evidence extraction (contact email, company name) from affiliation text
//! - Per-publication aggregation of non-academic authors
//! - PubMed esearch/efetch response parsing (and an HTTP client with `native`)
//! - CSV and plain-text reporting of screened papers
//!
//! The classification core is pure and total: it never fails, it only
//! degrades to empty results.

pub mod aggregate;
pub mod classifier;
pub mod config;
pub mod domain;
pub mod error;
pub mod extract;
#[cfg(feature = "native")]
pub mod http;
pub mod report;
pub mod signals;
pub mod sources;

// Re-export main types for convenience
pub use aggregate::{aggregate_authors, AuthorAggregator};
pub use classifier::{is_non_academic, AffiliationClassifier};
pub use config::{ConfigError, PapersConfig, PubMedConfig, SignalConfig};
pub use domain::{AffiliationRecord, Author, Paper, PublicationClassification};
pub use error::{Error, Result};
pub use extract::{extract_company_name, extract_email, EvidenceExtractor, PatternMatcher};
pub use report::{format_plain, screen_papers, write_csv, write_csv_file, ReportError, ReportRow};
pub use signals::{SignalSet, ACADEMIC_KEYWORDS, COMMERCIAL_KEYWORDS};
pub use sources::{PubMedSource, SourceError};
#[cfg(feature = "native")]
pub use sources::PubMedClient;

/// Returns the version of papers-core
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
