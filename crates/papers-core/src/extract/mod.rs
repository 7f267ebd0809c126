//! Evidence extraction from affiliation text
//!
//! Two independent, pure extractors: a contact email and a company name.

mod company;
mod email;
mod matcher;

pub use matcher::PatternMatcher;

use lazy_static::lazy_static;
use regex::Regex;

use crate::config::ConfigError;
use crate::signals::SignalSet;
use company::KeywordPattern;

lazy_static! {
    static ref DEFAULT_EXTRACTOR: EvidenceExtractor = EvidenceExtractor::default();
}

#[derive(Debug, Clone)]
pub struct EvidenceExtractor {
    email: Regex,
    companies: Vec<KeywordPattern>,
}

impl EvidenceExtractor {
    /// Build an extractor whose company search uses `commercial` keywords, in order
    pub fn new(commercial: &SignalSet) -> Result<Self, ConfigError> {
        let companies = company::compile_all(commercial)?;
        Ok(Self {
            email: email::EMAIL_REGEX.clone(),
            companies,
        })
    }

    /// First email address in `text`, case preserved
    pub fn extract_email(&self, text: &str) -> Option<String> {
        email::find_email(&self.email, text)
    }

    /// Capitalised run around the first commercial keyword that matches
    pub fn extract_company_name(&self, text: &str) -> Option<String> {
        company::find_company(&self.companies, text)
    }

    /// Keywords in the order the company search tries them
    pub fn company_keywords(&self) -> impl Iterator<Item = &str> {
        self.companies.iter().map(|p| p.keyword.as_str())
    }
}

impl Default for EvidenceExtractor {
    fn default() -> Self {
        let companies = company::compile_all(&SignalSet::commercial())
            .expect("built-in company patterns compile");
        Self {
            email: email::EMAIL_REGEX.clone(),
            companies,
        }
    }
}

/// Extract an email with the built-in pattern
pub fn extract_email(text: &str) -> Option<String> {
    DEFAULT_EXTRACTOR.extract_email(text)
}

/// Extract a company name with the built-in commercial keywords
pub fn extract_company_name(text: &str) -> Option<String> {
    DEFAULT_EXTRACTOR.extract_company_name(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genentech_example() {
        let text = "Genentech Inc, South San Francisco, CA, USA. john.smith@genentech.com";
        assert_eq!(
            extract_email(text),
            Some("john.smith@genentech.com".to_string())
        );
        assert!(extract_company_name(text).unwrap().contains("Genentech Inc"));
    }

    #[test]
    fn test_academic_example() {
        let text = "Department of Immunology, Stanford University";
        assert_eq!(extract_email(text), None);
        assert_eq!(extract_company_name(text), None);
    }

    #[test]
    fn test_extractors_ignore_classification() {
        // Extraction runs on any text; the aggregator decides when to call it.
        let text = "Harvard University, Princeton Labs";
        assert_eq!(
            extract_company_name(text).as_deref(),
            Some("Harvard University, Princeton Labs")
        );
    }

    #[test]
    fn test_custom_keywords() {
        let extractor = EvidenceExtractor::new(&SignalSet::new(["AG", "SE"])).unwrap();
        assert_eq!(
            extractor.company_keywords().collect::<Vec<_>>(),
            vec!["ag", "se"]
        );
        assert_eq!(
            extractor.extract_company_name("Bayer AG, Leverkusen").as_deref(),
            Some("Bayer AG, Leverkusen")
        );
        assert_eq!(extractor.extract_company_name("Genentech Inc"), None);
    }
}
