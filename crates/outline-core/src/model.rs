use serde::{Deserialize, Serialize};
use std::fmt;

/// Title used when no source yields a usable string.
pub const UNTITLED: &str = "Untitled Document";

/// One text line with the layout attributes heading inference relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub text: String,
    /// Largest font size among the spans on the line.
    pub size: f32,
    /// True if any span on the line is bold.
    pub bold: bool,
    /// 1-based page number.
    pub page: usize,
}

impl Line {
    pub fn new(text: impl Into<String>, size: f32, bold: bool, page: usize) -> Self {
        Line {
            text: text.into(),
            size,
            bold,
            page,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

impl HeadingLevel {
    /// Nesting depth, starting at 0 for H1.
    pub fn depth(&self) -> usize {
        match self {
            HeadingLevel::H1 => 0,
            HeadingLevel::H2 => 1,
            HeadingLevel::H3 => 2,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    pub level: HeadingLevel,
    pub text: String,
    pub page: usize,
}

impl Heading {
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: usize) -> Self {
        Heading {
            level,
            text: text.into(),
            page,
        }
    }

    /// Key used to collapse repeated headings: lowercased trimmed text and page.
    pub fn dedup_key(&self) -> (String, usize) {
        (self.text.trim().to_lowercase(), self.page)
    }
}

/// The output record for one document. Field order is part of the JSON contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineResult {
    pub title: String,
    pub outline: Vec<Heading>,
}

impl OutlineResult {
    /// Result for documents that cannot be opened or have no pages.
    pub fn untitled() -> Self {
        OutlineResult {
            title: UNTITLED.to_string(),
            outline: Vec::new(),
        }
    }
}

/// Which stage of the fallback chain produced the outline.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutlineSource {
    /// Numbering patterns and font-rank scoring on layout lines.
    General,
    /// Section keywords on the native flattened text.
    Keywords,
    /// Section keywords on OCR text.
    OcrKeywords,
    /// No stage found any heading.
    #[default]
    Empty,
}

impl fmt::Display for OutlineSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutlineSource::General => write!(f, "general"),
            OutlineSource::Keywords => write!(f, "keywords"),
            OutlineSource::OcrKeywords => write!(f, "ocr+keywords"),
            OutlineSource::Empty => write!(f, "none"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_level_serializes_as_tag() {
        let h = Heading::new(HeadingLevel::H2, "2.1 Background", 3);
        let json = serde_json::to_string(&h).unwrap();
        assert_eq!(json, r#"{"level":"H2","text":"2.1 Background","page":3}"#);
    }

    #[test]
    fn test_result_field_order() {
        let json = serde_json::to_string(&OutlineResult::untitled()).unwrap();
        assert_eq!(json, r#"{"title":"Untitled Document","outline":[]}"#);
    }

    #[test]
    fn test_dedup_key_ignores_case_and_padding() {
        let a = Heading::new(HeadingLevel::H1, "  Summary ", 1);
        let b = Heading::new(HeadingLevel::H2, "SUMMARY", 1);
        assert_eq!(a.dedup_key(), b.dedup_key());
        let c = Heading::new(HeadingLevel::H1, "Summary", 2);
        assert_ne!(a.dedup_key(), c.dedup_key());
    }
}
