pub mod ocr;
pub mod pdftohtml;
pub mod poppler;

use crate::error::OutlineError;
use crate::inference::PageText;
use crate::model::Line;
use std::path::Path;

/// Content extracted from a single page of a PDF.
#[derive(Debug, Clone, Default)]
pub struct PageContent {
    pub page_number: usize,
    /// Layout lines in reading order.
    pub lines: Vec<Line>,
    /// Plain text of the page, lines separated by `\n`.
    pub text: String,
}

/// Everything the outline pipeline needs from one opened document.
///
/// Holds no OS resources; backends release files and processes before
/// returning it.
#[derive(Debug, Clone, Default)]
pub struct LayoutDocument {
    pub pages: Vec<PageContent>,
    pub metadata_title: Option<String>,
}

impl LayoutDocument {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Lines of the page at `index` (0-based); empty if out of range.
    pub fn page_lines(&self, index: usize) -> &[Line] {
        self.pages
            .get(index)
            .map(|p| p.lines.as_slice())
            .unwrap_or(&[])
    }

    /// All layout lines, page-major.
    pub fn lines(&self) -> Vec<Line> {
        self.pages.iter().flat_map(|p| p.lines.iter().cloned()).collect()
    }

    pub fn page_text(&self, index: usize) -> Option<&str> {
        self.pages.get(index).map(|p| p.text.as_str())
    }

    /// Plain text of every page joined with `\n`.
    pub fn flattened_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn metadata_title(&self) -> Option<&str> {
        self.metadata_title.as_deref()
    }

    pub fn first_page_text(&self) -> Option<&str> {
        self.page_text(0)
    }

    /// Page texts in page order, for locating keyword headings.
    pub fn page_texts(&self) -> Vec<PageText<'_>> {
        self.pages
            .iter()
            .map(|p| PageText {
                page: p.page_number,
                text: &p.text,
            })
            .collect()
    }
}

/// Trait for layout extraction backends.
pub trait LayoutExtractor: Send + Sync {
    /// Open a PDF and extract per-page layout lines, page text and metadata.
    fn open(&self, path: &Path) -> Result<LayoutDocument, OutlineError>;

    /// Name of this extraction backend (for diagnostics).
    fn backend_name(&self) -> &str;
}

/// Trait for OCR backends used on documents without a text layer.
pub trait TextRecognizer: Send + Sync {
    /// Best-effort plain text of the whole document.
    ///
    /// Never fails: any internal error yields an empty string.
    fn recognize_text(&self, path: &Path) -> String;

    fn backend_name(&self) -> &str;
}

/// Map a failure to spawn an external tool, flagging a missing binary.
pub(crate) fn tool_error(tool: &str, e: std::io::Error) -> OutlineError {
    if e.kind() == std::io::ErrorKind::NotFound {
        OutlineError::ToolNotFound {
            tool: tool.to_string(),
        }
    } else {
        OutlineError::Extraction(format!("{} failed: {}", tool, e))
    }
}
