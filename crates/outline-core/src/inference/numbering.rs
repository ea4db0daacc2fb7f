use crate::model::HeadingLevel;
use regex::Regex;
use std::sync::LazyLock;

// Each pattern requires whitespace after the number so "3.14159" or "1.5x" never match.
static NUMBERED_H3: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\d+\.\d+[.)]?\s").expect("valid H3 numbering regex"));

static NUMBERED_H2: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*\d+\.\d+[.)]?\s").expect("valid H2 numbering regex"));

static NUMBERED_H1: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(?:\d+|[IVXLCDM]+|[ivxlcdm]+)[.)]?\s").expect("valid H1 numbering regex")
});

/// Level implied by a leading section number, if the text has one.
///
/// Patterns are tried from most to least specific, so "2.1.3 Foo" is H3
/// and never falls through to the single-number H1 pattern.
pub fn numbered_level(text: &str) -> Option<HeadingLevel> {
    if NUMBERED_H3.is_match(text) {
        Some(HeadingLevel::H3)
    } else if NUMBERED_H2.is_match(text) {
        Some(HeadingLevel::H2)
    } else if NUMBERED_H1.is_match(text) {
        Some(HeadingLevel::H1)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_level_numbering() {
        assert_eq!(numbered_level("2.1.3 Foo"), Some(HeadingLevel::H3));
        assert_eq!(numbered_level("2.1.3. Foo"), Some(HeadingLevel::H3));
        assert_eq!(numbered_level("10.2.1) Scope"), Some(HeadingLevel::H3));
    }

    #[test]
    fn test_two_level_numbering() {
        assert_eq!(numbered_level("2.1 Background"), Some(HeadingLevel::H2));
        assert_eq!(numbered_level("2.1. Background"), Some(HeadingLevel::H2));
        // Deeper numbering without trailing whitespace after the third part
        assert_eq!(numbered_level("1.2.3.4 Deep"), None);
    }

    #[test]
    fn test_single_numbering() {
        assert_eq!(numbered_level("1. Introduction"), Some(HeadingLevel::H1));
        assert_eq!(numbered_level("3 Results"), Some(HeadingLevel::H1));
        assert_eq!(numbered_level("IV) Scope"), Some(HeadingLevel::H1));
        assert_eq!(numbered_level("iv. Scope"), Some(HeadingLevel::H1));
    }

    #[test]
    fn test_mixed_case_roman_is_not_numbering() {
        assert_eq!(numbered_level("Did you know"), None);
        assert_eq!(numbered_level("Civil works"), None);
    }

    #[test]
    fn test_requires_whitespace_after_number() {
        assert_eq!(numbered_level("3.14159"), None);
        assert_eq!(numbered_level("1.5x faster"), None);
        assert_eq!(numbered_level("2024"), None);
    }

    #[test]
    fn test_plain_text_is_not_numbered() {
        assert_eq!(numbered_level("Introduction"), None);
        assert_eq!(numbered_level("Version 2.1 notes"), None);
    }
}
