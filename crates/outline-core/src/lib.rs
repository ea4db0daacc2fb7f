pub mod config;
pub mod error;
pub mod extraction;
pub mod inference;
pub mod model;
pub mod pipeline;
pub mod title;

use extraction::{LayoutExtractor, TextRecognizer};
use model::OutlineResult;
use pipeline::Engine;
use std::path::Path;

/// Main API entry point: extract the title and heading outline of a PDF.
///
/// Tries numbering and font-size detection first, then resume section
/// keywords on the native text, then keywords on OCR text when the document
/// has no text layer. Never fails; unreadable documents come back as
/// `{"title": "Untitled Document", "outline": []}`.
pub fn extract_outline(
    path: &Path,
    extractor: &dyn LayoutExtractor,
    recognizer: &dyn TextRecognizer,
    engine: &Engine,
) -> OutlineResult {
    pipeline::run(path, extractor, recognizer, engine).result
}
