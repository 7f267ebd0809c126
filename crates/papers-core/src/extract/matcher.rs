//! Narrow pattern-matching seam
//!
//! Extraction policy (first match, leftmost-longest run) is expressed through
//! `find_first` so it can be exercised independently of the regex engine.

use regex::Regex;

pub trait PatternMatcher {
    /// Return the first match in `text`, if any
    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str>;
}

impl PatternMatcher for Regex {
    fn find_first<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.find(text).map(|m| m.as_str())
    }
}
