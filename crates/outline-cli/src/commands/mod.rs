pub mod batch;
pub mod config;
pub mod extract;
pub mod inspect;

use outline_core::config::builtin;
use outline_core::config::schema::OutlineConfig;
use outline_core::error::OutlineError;
use outline_core::extraction::ocr::{recognizer_for, DisabledRecognizer};
use outline_core::extraction::poppler::PopplerExtractor;
use outline_core::extraction::TextRecognizer;
use outline_core::pipeline::Engine;
use std::path::{Path, PathBuf};

/// Engine selection from the command line.
pub struct Settings {
    pub preset: Option<String>,
    pub config: Option<PathBuf>,
    pub no_ocr: bool,
}

/// Load the configuration named by `--config`, else `--preset`, else the default preset.
pub fn resolve_config(
    preset: Option<&str>,
    config: Option<&Path>,
) -> Result<OutlineConfig, OutlineError> {
    match (config, preset) {
        (Some(path), _) => outline_core::config::load_config(path),
        (None, Some(name)) => builtin::load_preset(name),
        (None, None) => builtin::default_config(),
    }
}

impl Settings {
    pub fn engine(&self) -> Result<(Engine, Box<dyn TextRecognizer>), OutlineError> {
        let config = resolve_config(self.preset.as_deref(), self.config.as_deref())?;
        log::debug!("using configuration '{}' (v{})", config.name, config.version);

        let recognizer: Box<dyn TextRecognizer> = if self.no_ocr {
            Box::new(DisabledRecognizer)
        } else {
            recognizer_for(&config.ocr)
        };

        Ok((Engine::from_config(&config), recognizer))
    }
}

/// Fail early when the layout tools are missing instead of emitting empty outlines.
pub fn require_poppler() -> Result<PopplerExtractor, OutlineError> {
    if PopplerExtractor::is_available() {
        Ok(PopplerExtractor::new())
    } else {
        Err(OutlineError::ToolNotFound {
            tool: "pdftohtml".into(),
        })
    }
}
