use crate::config::schema::OcrDef;
use crate::error::OutlineError;
use crate::extraction::{tool_error, TextRecognizer};
use std::path::{Path, PathBuf};
use std::process::Command;

/// OCR backend: rasterize pages with `pdftoppm`, recognize each with `tesseract`.
#[derive(Debug, Clone)]
pub struct TesseractRecognizer {
    dpi: u32,
    language: String,
}

impl TesseractRecognizer {
    pub fn new(dpi: u32, language: impl Into<String>) -> Self {
        TesseractRecognizer {
            dpi,
            language: language.into(),
        }
    }

    pub fn from_config(ocr: &OcrDef) -> Self {
        Self::new(ocr.dpi, ocr.language.clone())
    }

    /// Check if pdftoppm and tesseract are both installed.
    pub fn is_available() -> bool {
        let pdftoppm = Command::new("pdftoppm").arg("-v").output().is_ok();
        let tesseract = Command::new("tesseract").arg("--version").output().is_ok();

        if !pdftoppm {
            log::debug!("pdftoppm not found - install poppler-utils for OCR support");
        }
        if !tesseract {
            log::debug!("tesseract not found - install tesseract-ocr for OCR support");
        }

        pdftoppm && tesseract
    }

    fn try_recognize(&self, path: &Path) -> Result<String, OutlineError> {
        // Page images are removed when the directory drops, on every path out
        let temp_dir = tempfile::tempdir()?;
        let prefix = temp_dir.path().join("page");

        let output = Command::new("pdftoppm")
            .arg("-png")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg(path)
            .arg(&prefix)
            .output()
            .map_err(|e| tool_error("pdftoppm", e))?;

        if !output.status.success() {
            return Err(OutlineError::ToolFailed {
                tool: "pdftoppm".into(),
                code: output.status.code().unwrap_or(-1),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let images = page_images(temp_dir.path())?;
        log::info!(
            "OCR: rendered {} page(s) of {} at {} dpi",
            images.len(),
            path.display(),
            self.dpi
        );

        let mut texts = Vec::with_capacity(images.len());
        for (i, image) in images.iter().enumerate() {
            let output = Command::new("tesseract")
                .arg(image)
                .arg("stdout")
                .arg("-l")
                .arg(&self.language)
                .output()
                .map_err(|e| tool_error("tesseract", e))?;

            if !output.status.success() {
                log::warn!(
                    "tesseract failed on page {}: {}",
                    i + 1,
                    String::from_utf8_lossy(&output.stderr).trim()
                );
            }
            texts.push(String::from_utf8_lossy(&output.stdout).into_owned());
        }

        Ok(texts.join("\n"))
    }
}

impl TextRecognizer for TesseractRecognizer {
    fn recognize_text(&self, path: &Path) -> String {
        match self.try_recognize(path) {
            Ok(text) => {
                log::info!("OCR: {} chars from {}", text.len(), path.display());
                text
            }
            Err(e) => {
                log::warn!("OCR failed for {}: {}", path.display(), e);
                String::new()
            }
        }
    }

    fn backend_name(&self) -> &str {
        "tesseract"
    }
}

/// Recognizer used when OCR is turned off; always yields no text.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledRecognizer;

impl TextRecognizer for DisabledRecognizer {
    fn recognize_text(&self, path: &Path) -> String {
        log::debug!("OCR disabled, skipping {}", path.display());
        String::new()
    }

    fn backend_name(&self) -> &str {
        "disabled"
    }
}

/// Recognizer selected by the `ocr` section of a configuration.
///
/// Falls back to `DisabledRecognizer` when pdftoppm or tesseract is missing.
pub fn recognizer_for(ocr: &OcrDef) -> Box<dyn TextRecognizer> {
    select_recognizer(ocr, TesseractRecognizer::is_available)
}

fn select_recognizer(
    ocr: &OcrDef,
    available: impl FnOnce() -> bool,
) -> Box<dyn TextRecognizer> {
    if !ocr.enabled {
        Box::new(DisabledRecognizer)
    } else if !available() {
        log::warn!(
            "pdftoppm or tesseract not found; OCR disabled, scanned PDFs get empty outlines"
        );
        Box::new(DisabledRecognizer)
    } else {
        Box::new(TesseractRecognizer::from_config(ocr))
    }
}

/// PNG files written by pdftoppm, in page order.
///
/// pdftoppm zero-pads page numbers to the width of the page count, so a
/// lexical sort is page order.
fn page_images(dir: &Path) -> Result<Vec<PathBuf>, OutlineError> {
    let mut images: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.extension().is_some_and(|ext| ext == "png"))
        .collect();
    images.sort();
    Ok(images)
}
