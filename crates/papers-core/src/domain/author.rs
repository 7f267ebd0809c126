//! Author representation

use serde::{Deserialize, Serialize};

/// An author of a publication with their free-text affiliations.
///
/// `name` may be empty when the source record lacks one, and
/// `affiliations` may be empty.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    #[serde(default)]
    pub affiliations: Vec<String>,
}

impl Author {
    /// Create a new author with no affiliations
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            affiliations: Vec::new(),
        }
    }

    /// Builder method to append an affiliation
    pub fn with_affiliation(mut self, affiliation: impl Into<String>) -> Self {
        self.affiliations.push(affiliation.into());
        self
    }

    /// Build an author name the way PubMed records are displayed: "ForeName LastName"
    pub fn from_parts(fore_name: &str, last_name: &str) -> Self {
        Self::new(format!("{} {}", fore_name, last_name).trim().to_string())
    }
}
