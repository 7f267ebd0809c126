//! Keyword signal sets used to detect academic and commercial context

use serde::{Deserialize, Serialize};

/// Institutional, educational and clinical-care indicators
pub const ACADEMIC_KEYWORDS: &[&str] = &[
    "university",
    "college",
    "institute",
    "school",
    "hospital",
    "center",
    "centre",
    "clinic",
    "department",
];

/// Corporate-entity and industry indicators.
///
/// Order matters: company-name extraction tries keywords in this order.
pub const COMMERCIAL_KEYWORDS: &[&str] = &[
    "pharma",
    "biotech",
    "therapeutics",
    "inc",
    "ltd",
    "gmbh",
    "corporation",
    "corp",
    "llc",
    "labs",
    "technologies",
];

/// An immutable list of lower-cased keyword substrings, in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct SignalSet {
    keywords: Vec<String>,
}

impl SignalSet {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    pub fn academic() -> Self {
        Self::new(ACADEMIC_KEYWORDS)
    }

    pub fn commercial() -> Self {
        Self::new(COMMERCIAL_KEYWORDS)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// Whether any keyword occurs in `lowered`, which must already be lower-case.
    ///
    /// Plain substring matching: "corp" fires inside "Corporate Park".
    pub fn matches_lowered(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// Case-insensitive variant of [`SignalSet::matches_lowered`]
    pub fn matches(&self, text: &str) -> bool {
        self.matches_lowered(&text.to_lowercase())
    }
}

impl From<Vec<String>> for SignalSet {
    fn from(keywords: Vec<String>) -> Self {
        Self::new(keywords)
    }
}

impl From<SignalSet> for Vec<String> {
    fn from(set: SignalSet) -> Self {
        set.keywords
    }
}
