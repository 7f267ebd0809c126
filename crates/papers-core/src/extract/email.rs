//! Email address extraction

use lazy_static::lazy_static;
use regex::Regex;

use super::PatternMatcher;

pub(crate) const EMAIL_PATTERN: &str = r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}";

lazy_static! {
    pub(crate) static ref EMAIL_REGEX: Regex = Regex::new(EMAIL_PATTERN).unwrap();
}

/// First email-shaped substring of `text`, case preserved
pub(crate) fn find_email<M: PatternMatcher + ?Sized>(matcher: &M, text: &str) -> Option<String> {
    matcher.find_first(text).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_email() {
        let text = "Genentech Inc, South San Francisco, CA, USA. john.smith@genentech.com";
        assert_eq!(
            find_email(&*EMAIL_REGEX, text),
            Some("john.smith@genentech.com".to_string())
        );
    }

    #[test]
    fn test_first_of_many() {
        let text = "a@b.org; Electronic address: c.d@e-f.co.uk";
        assert_eq!(find_email(&*EMAIL_REGEX, text), Some("a@b.org".to_string()));
    }

    #[test]
    fn test_trailing_period_is_not_captured() {
        let text = "Contact: Jane.Doe@Example.COM.";
        assert_eq!(
            find_email(&*EMAIL_REGEX, text),
            Some("Jane.Doe@Example.COM".to_string())
        );
    }

    #[test]
    fn test_rejects_short_suffix() {
        assert_eq!(find_email(&*EMAIL_REGEX, "user@host.c"), None);
        assert_eq!(find_email(&*EMAIL_REGEX, "no address here"), None);
    }
}
