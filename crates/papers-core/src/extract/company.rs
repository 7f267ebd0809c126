//! Company-name extraction
//!
//! For each commercial keyword, in declaration order, find the leftmost run
//! that starts at an uppercase letter, continues through letters, digits,
//! `&`, whitespace, `,`, `.` and `-`, and contains the keyword after that
//! leading letter. The leading letter is never part of the keyword, so
//! `Pharmacyclics` does not match `pharma`. The first keyword that yields a
//! run wins; runs are never compared across keywords.

use regex::Regex;

use super::PatternMatcher;
use crate::signals::SignalSet;

const RUN_CLASS: &str = r"[A-Za-z0-9&\s,.-]";

/// One compiled run pattern per keyword
#[derive(Debug, Clone)]
pub(crate) struct KeywordPattern {
    pub keyword: String,
    pub regex: Regex,
}

impl KeywordPattern {
    pub fn compile(keyword: &str) -> Result<Self, regex::Error> {
        // The leading letter is matched case-sensitively; the keyword is not.
        let pattern = format!(
            r"(?i)(?-i:[A-Z]){class}*{keyword}{class}*",
            class = RUN_CLASS,
            keyword = regex::escape(keyword),
        );
        Ok(Self {
            keyword: keyword.to_string(),
            regex: Regex::new(&pattern)?,
        })
    }
}

pub(crate) fn compile_all(signals: &SignalSet) -> Result<Vec<KeywordPattern>, regex::Error> {
    signals
        .keywords()
        .iter()
        .map(|k| KeywordPattern::compile(k))
        .collect()
}

pub(crate) fn find_company<M: PatternMatcher>(patterns: &[M], text: &str) -> Option<String> {
    patterns
        .iter()
        .find_map(|p| p.find_first(text))
        .map(|run| run.trim().to_string())
}

impl PatternMatcher for KeywordPattern {
    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.regex.find_first(text)
    }
}
