use outline_core::error::OutlineError;
use outline_core::pipeline;
use std::path::{Path, PathBuf};

use crate::commands::{require_poppler, Settings};
use crate::output;

pub fn run(input_dir: &Path, output_dir: &Path, settings: &Settings) -> Result<(), OutlineError> {
    std::fs::create_dir_all(output_dir)?;

    let (engine, recognizer) = settings.engine()?;
    let extractor = require_poppler()?;
    let files = pdf_files(input_dir)?;

    if files.is_empty() {
        log::warn!("no PDF files in {}", input_dir.display());
        return Ok(());
    }

    for file in &files {
        let name = file.file_name().unwrap_or_default().to_string_lossy();
        log::info!("Processing {}...", name);

        let outcome = pipeline::run(file, &extractor, recognizer.as_ref(), &engine);
        let out_path = output_dir.join(output_name(file));
        output::json::write(&outcome.result, &out_path)?;

        log::info!("Output saved to {}", out_path.display());
    }

    eprintln!(
        "Processed {} file(s) into {}",
        files.len(),
        output_dir.display()
    );
    Ok(())
}

/// PDF files directly inside `dir` (extension matched case-insensitively), sorted by path.
pub fn pdf_files(dir: &Path) -> Result<Vec<PathBuf>, OutlineError> {
    let mut files: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .filter(|p| {
            p.extension()
                .map(|ext| ext.eq_ignore_ascii_case("pdf"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();
    Ok(files)
}

/// `<stem>.json` for an input PDF.
pub fn output_name(pdf: &Path) -> PathBuf {
    let mut name = pdf.file_stem().unwrap_or_default().to_os_string();
    name.push(".json");
    PathBuf::from(name)
}
