//! Tabular report of papers with non-academic authors
//!
//! One row per publication that has at least one non-academic author;
//! everything else is dropped here, not in the classifier.

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

use crate::aggregate::AuthorAggregator;
use crate::domain::{Paper, PublicationClassification};

/// Separator used when joining author and company names into one cell
pub const LIST_SEPARATOR: &str = "; ";

const RULE_WIDTH: usize = 60;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Non-academic Author(s)")]
    pub non_academic_authors: String,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: String,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_email: String,
}

impl ReportRow {
    /// Column headers, in output order
    pub const HEADERS: [&'static str; 6] = [
        "PubmedID",
        "Title",
        "Publication Date",
        "Non-academic Author(s)",
        "Company Affiliation(s)",
        "Corresponding Author Email",
    ];

    /// `None` when the paper has no non-academic author
    pub fn from_classification(
        paper: &Paper,
        classification: &PublicationClassification,
    ) -> Option<Self> {
        if !classification.has_non_academic_authors() {
            return None;
        }

        Some(Self {
            pubmed_id: paper.pmid.clone(),
            title: paper.title.clone(),
            publication_date: paper.publication_date.clone(),
            non_academic_authors: classification.sorted_authors().join(LIST_SEPARATOR),
            company_affiliations: classification.sorted_companies().join(LIST_SEPARATOR),
            corresponding_email: classification.corresponding_email.clone(),
        })
    }

    /// Cell values in [`ReportRow::HEADERS`] order
    pub fn values(&self) -> [&str; 6] {
        [
            self.pubmed_id.as_str(),
            self.title.as_str(),
            self.publication_date.as_str(),
            self.non_academic_authors.as_str(),
            self.company_affiliations.as_str(),
            self.corresponding_email.as_str(),
        ]
    }
}

/// Classify every paper and keep those with a non-academic author, in input order
pub fn screen_papers(aggregator: &AuthorAggregator, papers: &[Paper]) -> Vec<ReportRow> {
    papers
        .iter()
        .filter_map(|paper| {
            let classification = aggregator.aggregate(&paper.authors);
            let row = ReportRow::from_classification(paper, &classification);
            if row.is_none() {
                tracing::debug!("PMID {}: no non-academic authors", paper.pmid);
            }
            row
        })
        .collect()
}

/// Write a header line followed by one CSV record per row
pub fn write_csv<W: Write>(writer: W, rows: &[ReportRow]) -> Result<(), ReportError> {
    let mut csv = csv::Writer::from_writer(writer);
    if rows.is_empty() {
        csv.write_record(ReportRow::HEADERS)?;
    }
    for row in rows {
        csv.serialize(row)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_csv_file(path: &Path, rows: &[ReportRow]) -> Result<(), ReportError> {
    let file = std::fs::File::create(path)?;
    write_csv(file, rows)
}

/// Human-readable listing: a rule of dashes, then `Header: value` lines, per row
pub fn format_plain(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    for row in rows {
        out.push_str(&"-".repeat(RULE_WIDTH));
        out.push('\n');
        for (header, value) in ReportRow::HEADERS.iter().zip(row.values()) {
            out.push_str(header);
            out.push_str(": ");
            out.push_str(value);
            out.push('\n');
        }
    }
    out
}
