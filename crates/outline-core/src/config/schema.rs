use crate::inference::scoring;
use serde::{Deserialize, Serialize};

/// A complete engine configuration: scoring weights, section keywords and OCR settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutlineConfig {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub version: String,
    #[serde(default)]
    pub scoring: ScoringDef,
    /// Section-header keywords for the resume fallback, checked in order.
    pub keywords: Vec<String>,
    #[serde(default)]
    pub ocr: OcrDef,
}

/// Weights and thresholds for the font-rank score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringDef {
    /// Bonus by font rank; index 0 is the largest size in the document.
    pub rank_weights: Vec<i32>,
    pub bold_bonus: i32,
    pub short_bonus: i32,
    /// Lines with at most this many words get `short_bonus`.
    pub short_max_words: usize,
    pub h1_min_score: i32,
    pub h2_min_score: i32,
    pub h3_min_score: i32,
}

impl Default for ScoringDef {
    fn default() -> Self {
        ScoringDef {
            rank_weights: scoring::RANK_WEIGHTS.to_vec(),
            bold_bonus: scoring::BOLD_BONUS,
            short_bonus: scoring::SHORT_BONUS,
            short_max_words: scoring::SHORT_MAX_WORDS,
            h1_min_score: scoring::H1_MIN_SCORE,
            h2_min_score: scoring::H2_MIN_SCORE,
            h3_min_score: scoring::H3_MIN_SCORE,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrDef {
    pub enabled: bool,
    /// Rasterization resolution passed to pdftoppm.
    pub dpi: u32,
    /// Tesseract language code.
    pub language: String,
}

impl Default for OcrDef {
    fn default() -> Self {
        OcrDef {
            enabled: true,
            dpi: 300,
            language: "eng".to_string(),
        }
    }
}
