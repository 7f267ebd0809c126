//! Paper representation as delivered by the retrieval layer

use serde::{Deserialize, Serialize};

use super::Author;

/// Default date used when a record carries no usable publication date
pub const UNKNOWN_PUBLICATION_DATE: &str = "1900-01-01";

/// A publication with the metadata needed for screening and reporting
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Paper {
    pub pmid: String,
    pub title: String,
    /// `YYYY-MM-DD`, with month/day possibly non-numeric (e.g. `Jan`)
    pub publication_date: String,
    pub authors: Vec<Author>,
}

impl Paper {
    pub fn new(pmid: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            pmid: pmid.into(),
            title: title.into(),
            publication_date: UNKNOWN_PUBLICATION_DATE.to_string(),
            authors: Vec::new(),
        }
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.publication_date = date.into();
        self
    }

    pub fn with_author(mut self, author: Author) -> Self {
        self.authors.push(author);
        self
    }
}
