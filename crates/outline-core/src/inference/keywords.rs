use crate::config::schema::OutlineConfig;
use crate::inference::dedup_headings;
use crate::model::{Heading, HeadingLevel};

/// Ordered section-header keywords for the resume fallback.
///
/// Built once from configuration and shared read-only; several vocabularies
/// (e.g. per language) can be used side by side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordVocabulary {
    keywords: Vec<String>,
}

impl KeywordVocabulary {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let keywords = keywords
            .into_iter()
            .map(|k| k.as_ref().trim().to_lowercase())
            .filter(|k| !k.is_empty())
            .collect();
        KeywordVocabulary { keywords }
    }

    pub fn from_config(config: &OutlineConfig) -> Self {
        Self::new(&config.keywords)
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// First keyword that the cleaned line starts with.
    pub fn match_line(&self, line: &str) -> Option<&str> {
        let cleaned = clean_line(line);
        self.keywords
            .iter()
            .find(|k| cleaned.starts_with(k.as_str()))
            .map(String::as_str)
    }
}

/// Full text of one page, used to locate the page a keyword line came from.
#[derive(Debug, Clone, Copy)]
pub struct PageText<'a> {
    pub page: usize,
    pub text: &'a str,
}

/// Keep only letters and spaces, trim, lowercase.
pub fn clean_line(line: &str) -> String {
    line.chars()
        .filter(|c| c.is_alphabetic() || *c == ' ')
        .collect::<String>()
        .trim()
        .to_lowercase()
}

/// Resume-style detection: every line starting with a section keyword is an H1.
///
/// The heading keeps the line's original text (trimmed, punctuation intact).
/// Its page is the first page whose text contains the line verbatim, or 1
/// when no lookup is given or nothing matches.
pub fn infer_from_keywords(
    text: &str,
    page_lookup: Option<&[PageText<'_>]>,
    vocabulary: &KeywordVocabulary,
) -> Vec<Heading> {
    let headings = text
        .split('\n')
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .filter(|l| vocabulary.match_line(l).is_some())
        .map(|l| {
            let page = page_lookup
                .and_then(|pages| pages.iter().find(|p| p.text.contains(l)))
                .map(|p| p.page)
                .unwrap_or(1);
            Heading::new(HeadingLevel::H1, l, page)
        })
        .collect();
    dedup_headings(headings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english() -> KeywordVocabulary {
        KeywordVocabulary::new([
            "education",
            "skills",
            "experience",
            "projects",
            "certifications",
            "extracurricular",
            "achievements",
            "summary",
            "profile",
            "contact",
        ])
    }

    #[test]
    fn test_clean_line_strips_non_letters() {
        assert_eq!(clean_line("  EXPERIENCE:  "), "experience");
        assert_eq!(clean_line("2019-2023 Education"), "education");
        assert_eq!(clean_line("Skills & Tools"), "skills  tools");
    }

    #[test]
    fn test_ocr_text_education() {
        let headings =
            infer_from_keywords("Education\nBSc Computer Science", None, &english());
        assert_eq!(headings, vec![Heading::new(HeadingLevel::H1, "Education", 1)]);
    }

    #[test]
    fn test_keeps_original_punctuation() {
        let headings = infer_from_keywords("  Work Experience  \nEXPERIENCE:\n", None, &english());
        // "work experience" does not start with a keyword
        assert_eq!(headings, vec![Heading::new(HeadingLevel::H1, "EXPERIENCE:", 1)]);
    }

    #[test]
    fn test_prefix_match_is_literal() {
        // "Skillset" starts with "skills"; "Professional Summary" does not start with "summary"
        let headings = infer_from_keywords("Skillset\nProfessional Summary", None, &english());
        assert_eq!(headings.len(), 1);
        assert_eq!(headings[0].text, "Skillset");
    }

    #[test]
    fn test_page_lookup_finds_first_containing_page() {
        let pages = [
            PageText {
                page: 1,
                text: "Jane Doe\nSummary\nBuilder of things",
            },
            PageText {
                page: 2,
                text: "Projects\nCompiler in Rust",
            },
        ];
        let text = "Jane Doe\nSummary\nBuilder of things\nProjects\nCompiler in Rust";
        let headings = infer_from_keywords(text, Some(&pages[..]), &english());
        assert_eq!(
            headings,
            vec![
                Heading::new(HeadingLevel::H1, "Summary", 1),
                Heading::new(HeadingLevel::H1, "Projects", 2),
            ]
        );
    }

    #[test]
    fn test_page_lookup_miss_defaults_to_one() {
        let pages = [PageText {
            page: 3,
            text: "unrelated",
        }];
        let headings = infer_from_keywords("Contact", Some(&pages[..]), &english());
        assert_eq!(headings[0].page, 1);
    }

    #[test]
    fn test_repeated_section_on_same_page_collapses() {
        let headings = infer_from_keywords("Skills\nSKILLS\nSkills", None, &english());
        assert_eq!(headings.len(), 1);
    }

    #[test]
    fn test_custom_vocabulary() {
        let sv = KeywordVocabulary::new(["utbildning", "färdigheter"]);
        let headings = infer_from_keywords("Färdigheter\nRust, SQL", None, &sv);
        assert_eq!(headings, vec![Heading::new(HeadingLevel::H1, "Färdigheter", 1)]);
        assert!(infer_from_keywords("Färdigheter", None, &english()).is_empty());
    }

    #[test]
    fn test_vocabulary_normalizes_entries() {
        let v = KeywordVocabulary::new(["  Skills ", "", "Education"]);
        assert_eq!(v.keywords(), ["skills", "education"]);
        assert_eq!(v.match_line("EDUCATION & TRAINING"), Some("education"));
    }
}
