//! Classification and extraction integration tests
//!
//! Enhanced with property-based testing

use papers_core::{
    aggregate_authors, extract_company_name, extract_email, is_non_academic,
    AffiliationClassifier, Author, AuthorAggregator, EvidenceExtractor, SignalSet,
    ACADEMIC_KEYWORDS, COMMERCIAL_KEYWORDS,
};
use proptest::prelude::*;
use rstest::rstest;

// === Classification ===

#[rstest]
#[case("Genentech Inc, South San Francisco, CA, USA. john.smith@genentech.com", true)]
#[case("Department of Immunology, Stanford University", false)]
#[case("Pfizer Ltd, Sandwich, Kent, UK", true)]
#[case("Zymeworks Biotech, Vancouver, Canada", true)]
#[case("Vertex Pharmaceuticals, Boston, MA", true)]
#[case("Google DeepMind, London", false)]
#[case("Broad Institute of MIT and Harvard, Cambridge", false)]
#[case("Dana-Farber Cancer Center, Boston", false)]
#[case("Memorial Sloan Kettering Cancer Centre", false)]
#[case("Cleveland Clinic Lerner College, Ohio", false)]
#[case("Merck Sharp & Dohme LLC, Rahway, NJ", true)]
#[case("", false)]
fn test_classify_cases(#[case] affiliation: &str, #[case] expected: bool) {
    assert_eq!(is_non_academic(affiliation), expected, "{affiliation}");
}

#[test]
fn test_substring_matches_are_not_word_matches() {
    // Keyword hits inside unrelated words are intentionally kept.
    assert!(is_non_academic("Corporate Park, Building 3, Singapore"));
    assert!(is_non_academic("Cincinnati, OH"));
    assert!(!is_non_academic("Cosmetics Avenue, Paris"));
}

// === Evidence extraction ===

#[rstest]
#[case("Contact: jane.doe+lab@sub.example.org", Some("jane.doe+lab@sub.example.org"))]
#[case("Electronic address: J_Roe%x@Mail-Host.CO.UK.", Some("J_Roe%x@Mail-Host.CO.UK"))]
#[case("first@a.io second@b.io", Some("first@a.io"))]
#[case("user @ host.com", None)]
#[case("user@host", None)]
#[case("", None)]
fn test_extract_email_cases(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_email(text).as_deref(), expected);
}

#[rstest]
#[case("Novartis Pharma AG, Basel", Some("Novartis Pharma AG, Basel"))]
#[case("Amgen Inc. (Thousand Oaks)", Some("Amgen Inc."))]
#[case("at Moderna Therapeutics; Cambridge", Some("Moderna Therapeutics"))]
#[case("Samsung Biologics Co., Ltd, Songdo", Some("Samsung Biologics Co., Ltd, Songdo"))]
// The "I" of Incheon leads the run and cannot start "inc", so "ltd" matches
#[case("Samsung Biologics Co., Ltd / Incheon", Some("Samsung Biologics Co., Ltd"))]
#[case("Pharmacyclics LLC, Sunnyvale", Some("Pharmacyclics LLC, Sunnyvale"))]
#[case("Department of Immunology, Stanford University", None)]
#[case("no capitals inc", None)]
fn test_extract_company_cases(#[case] text: &str, #[case] expected: Option<&str>) {
    assert_eq!(extract_company_name(text).as_deref(), expected);
}

#[test]
fn test_company_keyword_order_beats_position() {
    // "inc" appears first in the text, but "biotech" is tried first.
    let text = "Incyte Corp / Zymo Biotech";
    assert_eq!(extract_company_name(text).as_deref(), Some("Zymo Biotech"));
}

// === Aggregation ===

#[test]
fn test_documented_example() {
    let authors = vec![
        Author::new("John Smith").with_affiliation(
            "Genentech Inc, South San Francisco, CA, USA. john.smith@genentech.com",
        ),
        Author::new("Alice Doe").with_affiliation("Department of Immunology, Stanford University"),
    ];
    let result = aggregate_authors(&authors);
    assert_eq!(result.sorted_authors(), vec!["John Smith"]);
    assert!(result
        .company_names
        .iter()
        .any(|c| c.contains("Genentech Inc")));
    assert_eq!(result.corresponding_email, "john.smith@genentech.com");
}

#[test]
fn test_first_non_empty_email_wins_not_first_author() {
    let authors = vec![
        Author::new("A").with_affiliation("Acme Labs, Berlin"),
        Author::new("B").with_affiliation("University of Oslo. b@uio.no"),
    ];
    let result = aggregate_authors(&authors);
    assert_eq!(result.corresponding_email, "b@uio.no");
    assert_eq!(result.sorted_authors(), vec!["A"]);
}

#[test]
fn test_injected_signal_sets() {
    let academic = SignalSet::new(["academy", "universit"]);
    let commercial = SignalSet::new(["s.p.a.", "ag"]);
    let aggregator = AuthorAggregator::new(
        AffiliationClassifier::new(academic, commercial.clone()),
        EvidenceExtractor::new(&commercial).unwrap(),
    );
    let result = aggregator.aggregate(&[
        Author::new("Lucia").with_affiliation("Chiesi Farmaceutici S.p.A., Parma"),
        Author::new("Jonas").with_affiliation("Universität Wien"),
    ]);
    assert_eq!(result.sorted_authors(), vec!["Lucia"]);
    assert_eq!(
        result.sorted_companies(),
        vec!["Chiesi Farmaceutici S.p.A., Parma"]
    );
}

// === Property-based tests ===

fn academic_keyword() -> impl Strategy<Value = &'static str> {
    prop::sample::select(ACADEMIC_KEYWORDS)
}

fn commercial_keyword() -> impl Strategy<Value = &'static str> {
    prop::sample::select(COMMERCIAL_KEYWORDS)
}

// Filler drawn from letters that cannot spell any keyword
const FILLER: &str = "[qwxzQWXZ ]{0,12}";

proptest! {
    #[test]
    fn test_academic_precedence(
        pre in FILLER,
        mid in FILLER,
        post in FILLER,
        academic in academic_keyword(),
        commercial in commercial_keyword(),
        academic_first in any::<bool>(),
    ) {
        let text = if academic_first {
            format!("{pre}{academic}{mid}{commercial}{post}")
        } else {
            format!("{pre}{commercial}{mid}{academic}{post}")
        };
        prop_assert!(!is_non_academic(&text));
    }

    #[test]
    fn test_no_signal_is_academic(text in FILLER) {
        prop_assert!(!is_non_academic(&text));
    }

    #[test]
    fn test_commercial_only_is_non_academic(
        pre in FILLER,
        post in FILLER,
        commercial in commercial_keyword(),
        upper in any::<bool>(),
    ) {
        let keyword = if upper { commercial.to_uppercase() } else { commercial.to_string() };
        let text = format!("{pre}{keyword}{post}");
        prop_assert!(is_non_academic(&text));
    }

    #[test]
    fn test_extract_email_idempotent(text in "[a-zA-Z0-9@._ -]{0,40}") {
        prop_assert_eq!(extract_email(&text), extract_email(&text));
        if !text.contains('@') {
            prop_assert_eq!(extract_email(&text), None);
        }
    }

    #[test]
    fn test_company_name_is_literal_capitalised_substring(
        pre in "[A-Za-z0-9 ,.&()-]{0,20}",
        post in "[A-Za-z0-9 ,.&();-]{0,20}",
        commercial in commercial_keyword(),
    ) {
        let text = format!("{pre}{commercial}{post}");
        if let Some(name) = extract_company_name(&text) {
            prop_assert!(text.contains(&name));
            prop_assert!(name.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn test_academic_only_authors_yield_no_companies(
        names in prop::collection::vec("[A-Z][a-z]{2,8}", 0..4),
        academic in academic_keyword(),
        commercial in commercial_keyword(),
    ) {
        let authors: Vec<Author> = names
            .iter()
            .map(|n| Author::new(n.clone()).with_affiliation(format!("Q {academic} {commercial}")))
            .collect();
        let result = aggregate_authors(&authors);
        prop_assert!(result.non_academic_authors.is_empty());
        prop_assert!(result.company_names.is_empty());
    }
}
