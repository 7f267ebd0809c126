//! Per-publication aggregation of affiliation verdicts

use lazy_static::lazy_static;

use crate::classifier::AffiliationClassifier;
use crate::config::{ConfigError, SignalConfig};
use crate::domain::{AffiliationRecord, Author, PublicationClassification};
use crate::extract::EvidenceExtractor;

lazy_static! {
    static ref DEFAULT_AGGREGATOR: AuthorAggregator = AuthorAggregator::default();
}

/// Combines classifier and extractor over a publication's author list.
///
/// Immutable after construction; share it freely across threads.
#[derive(Debug, Clone, Default)]
pub struct AuthorAggregator {
    classifier: AffiliationClassifier,
    extractor: EvidenceExtractor,
}

impl AuthorAggregator {
    pub fn new(classifier: AffiliationClassifier, extractor: EvidenceExtractor) -> Self {
        Self {
            classifier,
            extractor,
        }
    }

    /// Build from configured signal sets
    pub fn from_config(signals: &SignalConfig) -> Result<Self, ConfigError> {
        let classifier =
            AffiliationClassifier::new(signals.academic.clone(), signals.commercial.clone());
        let extractor = EvidenceExtractor::new(&signals.commercial)?;
        Ok(Self::new(classifier, extractor))
    }

    pub fn classifier(&self) -> &AffiliationClassifier {
        &self.classifier
    }

    pub fn extractor(&self) -> &EvidenceExtractor {
        &self.extractor
    }

    /// Full verdict and evidence for a single affiliation string
    pub fn classify_affiliation(&self, text: &str) -> AffiliationRecord {
        let is_non_academic = self.classifier.classify(text);
        AffiliationRecord {
            text: text.to_string(),
            is_non_academic,
            company_name: if is_non_academic {
                self.extractor.extract_company_name(text)
            } else {
                None
            },
            email: self.extractor.extract_email(text),
        }
    }

    /// Screen every affiliation of every author, in order.
    ///
    /// The corresponding email is the first one found anywhere, regardless of
    /// whether its affiliation was classified academic. Never fails.
    pub fn aggregate(&self, authors: &[Author]) -> PublicationClassification {
        let mut result = PublicationClassification::default();

        for author in authors {
            for affiliation in &author.affiliations {
                if self.classifier.classify(affiliation) {
                    tracing::trace!(author = %author.name, %affiliation, "non-academic affiliation");
                    result.non_academic_authors.insert(author.name.clone());
                    if let Some(company) = self.extractor.extract_company_name(affiliation) {
                        result.company_names.insert(company);
                    }
                }

                if result.corresponding_email.is_empty() {
                    if let Some(email) = self.extractor.extract_email(affiliation) {
                        result.corresponding_email = email;
                    }
                }
            }
        }

        result
    }
}

/// Aggregate with the built-in signal sets
pub fn aggregate_authors(authors: &[Author]) -> PublicationClassification {
    DEFAULT_AGGREGATOR.aggregate(authors)
}
