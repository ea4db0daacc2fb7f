use outline_core::error::OutlineError;
use outline_core::pipeline;
use std::path::PathBuf;

use crate::commands::{require_poppler, Settings};
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    output_file: Option<PathBuf>,
    settings: &Settings,
) -> Result<(), OutlineError> {
    // Surface a missing file as an error rather than an untitled result
    std::fs::metadata(&input_file)?;

    let (engine, recognizer) = settings.engine()?;
    let extractor = require_poppler()?;
    let outcome = pipeline::run(&input_file, &extractor, recognizer.as_ref(), &engine);

    match output_file {
        Some(path) => {
            // Always write JSON when saving to file
            output::json::write(&outcome.result, &path)?;
            eprintln!(
                "{} heading(s) via {}, written to {}",
                outcome.result.outline.len(),
                outcome.source,
                path.display()
            );
        }
        None => match output_format {
            "table" => output::table::print_outline(&outcome),
            _ => output::json::print(&outcome.result)?,
        },
    }

    Ok(())
}
