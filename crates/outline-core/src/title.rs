use crate::model::{Heading, HeadingLevel, UNTITLED};

/// Pick the document title from the first source that yields a non-blank string.
///
/// Order:
/// 1. First H1 heading
/// 2. Embedded metadata title
/// 3. First non-empty line of page 1
/// 4. First non-empty line of the flattened document text
/// 5. "Untitled Document"
pub fn choose_title(
    headings: &[Heading],
    metadata_title: Option<&str>,
    first_page_text: Option<&str>,
    flattened_text: Option<&str>,
) -> String {
    headings
        .iter()
        .find(|h| h.level == HeadingLevel::H1)
        .map(|h| h.text.trim())
        .filter(|t| !t.is_empty())
        .or_else(|| metadata_title.map(str::trim).filter(|t| !t.is_empty()))
        .or_else(|| first_page_text.and_then(first_nonempty_line))
        .or_else(|| flattened_text.and_then(first_nonempty_line))
        .unwrap_or(UNTITLED)
        .to_string()
}

fn first_nonempty_line(text: &str) -> Option<&str> {
    text.lines().map(str::trim).find(|l| !l.is_empty())
}

/// True if `text` names the same thing as `title` (trimmed, case-insensitive).
pub fn matches_title(text: &str, title: &str) -> bool {
    text.trim().to_lowercase() == title.trim().to_lowercase()
}
