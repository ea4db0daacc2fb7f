pub mod general;
pub mod keywords;
pub mod numbering;
pub mod scoring;

pub use general::{classify_lines, classify_with_ranks, infer, Candidate, Rule};
pub use keywords::{infer_from_keywords, KeywordVocabulary, PageText};

use crate::model::Heading;
use std::collections::HashSet;

/// Replace whitespace runs with a single space and trim.
pub fn normalize_text(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Drop headings whose (lowercased trimmed text, page) was already seen.
pub fn dedup_headings(headings: Vec<Heading>) -> Vec<Heading> {
    let mut seen = HashSet::new();
    headings
        .into_iter()
        .filter(|h| seen.insert(h.dedup_key()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::HeadingLevel;

    #[test]
    fn test_normalize_text() {
        assert_eq!(normalize_text("  a \t b\n c  "), "a b c");
        assert_eq!(normalize_text(" \u{a0} "), "");
    }

    #[test]
    fn test_dedup_keeps_first_occurrence() {
        let headings = vec![
            Heading::new(HeadingLevel::H2, "Scope", 1),
            Heading::new(HeadingLevel::H1, "scope ", 1),
            Heading::new(HeadingLevel::H1, "Scope", 2),
        ];
        let deduped = dedup_headings(headings);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].level, HeadingLevel::H2);
        assert_eq!(deduped[1].page, 2);
    }
}
