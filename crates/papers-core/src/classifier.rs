//! Academic vs. commercial classification of affiliation strings
//!
//! A string is non-academic iff it carries no academic signal and at least
//! one commercial signal. Academic signals win when both are present, so a
//! hospital's industry-sponsored lab is treated as academic.

use lazy_static::lazy_static;

use crate::signals::SignalSet;

lazy_static! {
    static ref DEFAULT_CLASSIFIER: AffiliationClassifier = AffiliationClassifier::default();
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliationClassifier {
    academic: SignalSet,
    commercial: SignalSet,
}

impl AffiliationClassifier {
    pub fn new(academic: SignalSet, commercial: SignalSet) -> Self {
        Self {
            academic,
            commercial,
        }
    }

    /// Returns `true` when the affiliation denotes a non-academic entity
    pub fn classify(&self, affiliation: &str) -> bool {
        let lowered = affiliation.to_lowercase();
        !self.academic.matches_lowered(&lowered) && self.commercial.matches_lowered(&lowered)
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(SignalSet::academic(), SignalSet::commercial())
    }
}

/// Classify with the built-in signal sets
pub fn is_non_academic(affiliation: &str) -> bool {
    DEFAULT_CLASSIFIER.classify(affiliation)
}
