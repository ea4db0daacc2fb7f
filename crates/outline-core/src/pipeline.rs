use crate::config::schema::{OutlineConfig, ScoringDef};
use crate::extraction::{LayoutDocument, LayoutExtractor, TextRecognizer};
use crate::inference::{infer, infer_from_keywords, KeywordVocabulary};
use crate::model::{Heading, OutlineResult, OutlineSource};
use crate::title::{choose_title, matches_title};
use std::path::Path;

/// Immutable inference settings shared by every document in a run.
#[derive(Debug, Clone)]
pub struct Engine {
    pub scoring: ScoringDef,
    pub vocabulary: KeywordVocabulary,
}

impl Engine {
    pub fn new(scoring: ScoringDef, vocabulary: KeywordVocabulary) -> Self {
        Engine {
            scoring,
            vocabulary,
        }
    }

    pub fn from_config(config: &OutlineConfig) -> Self {
        Self::new(config.scoring.clone(), KeywordVocabulary::from_config(config))
    }
}

/// Stages of the fallback chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Open the document; unreadable or empty documents go straight to `Resolve`.
    Layout,
    /// Numbering and font-rank detection on layout lines.
    General,
    /// Keyword detection on the native flattened text.
    Keywords,
    /// OCR, then keyword detection on the recognized text.
    Ocr,
    /// Title resolution and removal of the title from the outline.
    Resolve,
}

/// Result of one document plus how it was obtained.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineOutcome {
    pub result: OutlineResult,
    pub source: OutlineSource,
    pub ocr_invoked: bool,
    pub page_count: usize,
}

/// Working state carried from stage to stage.
#[derive(Default)]
struct Working {
    doc: LayoutDocument,
    flattened: String,
    headings: Vec<Heading>,
    source: OutlineSource,
    ocr_invoked: bool,
}

impl Working {
    fn layout(&mut self, path: &Path, extractor: &dyn LayoutExtractor) -> Stage {
        match extractor.open(path) {
            Ok(doc) if doc.page_count() > 0 => {
                self.flattened = doc.flattened_text();
                self.doc = doc;
                Stage::General
            }
            // Nothing is kept, so the title falls through to the sentinel
            Ok(_) => {
                log::warn!("{} has no pages", path.display());
                Stage::Resolve
            }
            Err(e) => {
                log::warn!(
                    "could not open {} with {}: {}",
                    path.display(),
                    extractor.backend_name(),
                    e
                );
                Stage::Resolve
            }
        }
    }

    fn general(&mut self, engine: &Engine) -> Stage {
        self.headings = infer(&self.doc.lines(), &engine.scoring);
        if self.headings.is_empty() {
            Stage::Keywords
        } else {
            self.source = OutlineSource::General;
            Stage::Resolve
        }
    }

    fn keywords(&mut self, engine: &Engine) -> Stage {
        let pages = self.doc.page_texts();
        self.headings =
            infer_from_keywords(&self.flattened, Some(pages.as_slice()), &engine.vocabulary);

        if !self.headings.is_empty() {
            self.source = OutlineSource::Keywords;
            Stage::Resolve
        } else if !self.flattened.trim().is_empty() {
            // There is a text layer; the heuristics just found nothing in it
            Stage::Resolve
        } else {
            Stage::Ocr
        }
    }

    fn ocr(&mut self, path: &Path, recognizer: &dyn TextRecognizer, engine: &Engine) -> Stage {
        log::info!(
            "no text layer in {}; trying OCR ({})",
            path.display(),
            recognizer.backend_name()
        );
        self.ocr_invoked = true;

        let text = recognizer.recognize_text(path);
        if text.trim().is_empty() {
            return Stage::Resolve;
        }

        self.headings = infer_from_keywords(&text, None, &engine.vocabulary);
        if self.headings.is_empty() {
            // Still useful for the title fallback
            self.flattened = text;
        } else {
            self.source = OutlineSource::OcrKeywords;
        }
        Stage::Resolve
    }

    fn resolve(self) -> PipelineOutcome {
        let title = choose_title(
            &self.headings,
            self.doc.metadata_title(),
            self.doc.first_page_text(),
            Some(&self.flattened),
        );

        let outline: Vec<Heading> = self
            .headings
            .into_iter()
            .filter(|h| !matches_title(&h.text, &title))
            .collect();

        PipelineOutcome {
            result: OutlineResult { title, outline },
            source: self.source,
            ocr_invoked: self.ocr_invoked,
            page_count: self.doc.page_count(),
        }
    }
}

/// Run the full fallback chain on one document.
///
/// Never fails: unreadable or empty documents produce the untitled result.
pub fn run(
    path: &Path,
    extractor: &dyn LayoutExtractor,
    recognizer: &dyn TextRecognizer,
    engine: &Engine,
) -> PipelineOutcome {
    let mut work = Working::default();
    let mut stage = Stage::Layout;

    loop {
        log::debug!("{}: {:?} stage", path.display(), stage);
        stage = match stage {
            Stage::Layout => work.layout(path, extractor),
            Stage::General => work.general(engine),
            Stage::Keywords => work.keywords(engine),
            Stage::Ocr => work.ocr(path, recognizer, engine),
            Stage::Resolve => break,
        };
    }

    let outcome = work.resolve();
    log::debug!(
        "{}: {} heading(s) via {}, title {:?}",
        path.display(),
        outcome.result.outline.len(),
        outcome.source,
        outcome.result.title
    );
    outcome
}
