//! Pure problem-text classification.
//!
//! Keyword containment, not tokenized matching: "leaking" counts for "leak",
//! and so does a keyword buried inside an unrelated word.

use crate::domains::catalog::{self, CategoryId, FALLBACK_CATEGORY};

/// Number of a category's keywords found anywhere in `haystack` (already lowercase)
pub fn keyword_hits(haystack: &str, keywords: &[&str]) -> usize {
    keywords
        .iter()
        .filter(|keyword| haystack.contains(**keyword))
        .count()
}

/// Pick the category whose keywords appear most often in `text`.
///
/// Categories are tried in catalog order and only a strictly higher count
/// replaces the current best, so the earlier category wins a tie. No hits at
/// all yields the fallback category.
pub fn classify(text: &str) -> CategoryId {
    let haystack = text.to_lowercase();

    let mut best = FALLBACK_CATEGORY;
    let mut best_hits = 0;
    for category in catalog::all() {
        let hits = keyword_hits(&haystack, category.keywords);
        if hits > best_hits {
            best = category.id;
            best_hits = hits;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_text_falls_back() {
        assert_eq!(classify(""), CategoryId::General);
        assert_eq!(classify("   "), CategoryId::General);
    }

    #[test]
    fn no_keywords_falls_back() {
        assert_eq!(classify("Something odd happened"), CategoryId::General);
    }

    #[test]
    fn leaking_sink_is_plumbing() {
        assert_eq!(classify("My kitchen sink is leaking badly"), CategoryId::Plumber);
    }

    #[test]
    fn single_category_keywords_win() {
        assert_eq!(classify("The outlet sparks and the breaker trips"), CategoryId::Electrician);
        assert_eq!(classify("Need a fresh coat of paint on the ceiling"), CategoryId::Painter);
        assert_eq!(classify("Drive me to the airport"), CategoryId::Driver);
        assert_eq!(classify("Assemble my new desk"), CategoryId::General);
    }

    #[test]
    fn case_is_ignored() {
        assert_eq!(classify("TOILET CLOG"), CategoryId::Plumber);
    }

    #[test]
    fn keyword_inside_word_counts() {
        // "pipe" inside "pipeline"
        assert_eq!(classify("pipeline"), CategoryId::Plumber);
    }

    #[test]
    fn tie_goes_to_earlier_category() {
        // one Painter hit ("paint"), one Driver hit ("move")
        assert_eq!(classify("move the paint cans"), CategoryId::Painter);
        // one Plumber hit ("sink"), one Electrician hit ("outlet")
        assert_eq!(classify("outlet by the sink"), CategoryId::Plumber);
    }

    #[test]
    fn higher_count_beats_catalog_order() {
        // Plumber: "pipe"; Electrician: "wiring", "outlet"
        assert_eq!(classify("wiring behind the outlet near a pipe"), CategoryId::Electrician);
    }

    #[test]
    fn keyword_hits_counts_distinct_keywords() {
        assert_eq!(keyword_hits("leak leak leak", &["leak", "sink"]), 1);
        assert_eq!(keyword_hits("plumbing", &["plumb", "plumbing"]), 2);
    }
}
