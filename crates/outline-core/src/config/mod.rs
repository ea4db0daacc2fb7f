pub mod builtin;
pub mod schema;

use crate::error::OutlineError;
use schema::OutlineConfig;
use std::path::Path;

/// Load a configuration from a JSON file.
pub fn load_config(path: &Path) -> Result<OutlineConfig, OutlineError> {
    let content = std::fs::read_to_string(path).map_err(|e| OutlineError::ConfigLoad {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse_config(&content, path)
}

/// Parse a configuration from a JSON string.
pub fn parse_config(json: &str, source: &Path) -> Result<OutlineConfig, OutlineError> {
    let config: OutlineConfig = serde_json::from_str(json).map_err(|e| OutlineError::ConfigLoad {
        path: source.to_path_buf(),
        reason: e.to_string(),
    })?;
    validate_config(&config)?;
    Ok(config)
}

/// Parse a configuration from a JSON string (no file path context).
pub fn parse_config_str(json: &str) -> Result<OutlineConfig, OutlineError> {
    let config: OutlineConfig = serde_json::from_str(json).map_err(OutlineError::Json)?;
    validate_config(&config)?;
    Ok(config)
}

/// Validate that a configuration is well-formed.
pub fn validate_config(config: &OutlineConfig) -> Result<(), OutlineError> {
    let s = &config.scoring;

    if s.rank_weights.is_empty() {
        return Err(OutlineError::ConfigInvalid(
            "scoring.rank_weights must not be empty".into(),
        ));
    }

    if !(s.h1_min_score > s.h2_min_score
        && s.h2_min_score > s.h3_min_score
        && s.h3_min_score > 0)
    {
        return Err(OutlineError::ConfigInvalid(format!(
            "score thresholds must satisfy h1 > h2 > h3 > 0 (got {}, {}, {})",
            s.h1_min_score, s.h2_min_score, s.h3_min_score
        )));
    }

    if config.keywords.is_empty() {
        return Err(OutlineError::ConfigInvalid(
            "keywords must not be empty".into(),
        ));
    }

    for keyword in &config.keywords {
        if keyword.trim().is_empty() {
            return Err(OutlineError::ConfigInvalid(
                "keywords must not contain blank entries".into(),
            ));
        }
        // Keywords are compared against lines reduced to lowercase letters and spaces.
        if !keyword
            .chars()
            .all(|c| c == ' ' || (c.is_alphabetic() && !c.is_uppercase()))
        {
            return Err(OutlineError::ConfigInvalid(format!(
                "keyword '{}' must contain only lowercase letters and spaces",
                keyword
            )));
        }
    }

    if !(72..=1200).contains(&config.ocr.dpi) {
        return Err(OutlineError::ConfigInvalid(format!(
            "ocr.dpi {} out of range (expected 72..=1200)",
            config.ocr.dpi
        )));
    }

    if config.ocr.language.trim().is_empty() {
        return Err(OutlineError::ConfigInvalid(
            "ocr.language must not be empty".into(),
        ));
    }

    Ok(())
}
