//! Classification results

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Verdict and evidence for a single affiliation string.
///
/// Derived fresh per classification call; never cached.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AffiliationRecord {
    pub text: String,
    pub is_non_academic: bool,
    pub company_name: Option<String>,
    pub email: Option<String>,
}

/// Per-publication screening result.
///
/// Author and company names have set semantics: duplicates are dropped and
/// iteration order is unspecified.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicationClassification {
    pub non_academic_authors: HashSet<String>,
    pub company_names: HashSet<String>,
    /// First email found across all affiliations, academic or not. Empty if none.
    pub corresponding_email: String,
}

impl PublicationClassification {
    /// Whether at least one author was classified as non-academic
    pub fn has_non_academic_authors(&self) -> bool {
        !self.non_academic_authors.is_empty()
    }

    /// Author names in lexical order, for stable display
    pub fn sorted_authors(&self) -> Vec<&str> {
        sorted(&self.non_academic_authors)
    }

    /// Company names in lexical order, for stable display
    pub fn sorted_companies(&self) -> Vec<&str> {
        sorted(&self.company_names)
    }
}

fn sorted(set: &HashSet<String>) -> Vec<&str> {
    let mut items: Vec<&str> = set.iter().map(String::as_str).collect();
    items.sort_unstable();
    items
}
