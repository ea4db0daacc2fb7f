use outline_core::error::OutlineError;
use outline_core::extraction::LayoutExtractor;
use outline_core::inference::classify_with_ranks;
use std::path::{Path, PathBuf};

use crate::commands::{require_poppler, resolve_config};
use crate::output;

pub fn run(
    input_file: PathBuf,
    output_format: &str,
    preset: Option<&str>,
    config: Option<&Path>,
) -> Result<(), OutlineError> {
    let config = resolve_config(preset, config)?;
    let extractor = require_poppler()?;

    // Unlike extract, open errors are reported here
    let doc = extractor.open(&input_file)?;
    let lines = doc.lines();
    let (ranks, candidates) = classify_with_ranks(&lines, &config.scoring);

    match output_format {
        "json" => output::json::print(&candidates)?,
        _ => {
            println!(
                "{}: {} page(s), metadata title {:?}",
                input_file.display(),
                doc.page_count(),
                doc.metadata_title().unwrap_or("-")
            );
            output::table::print_candidates(&candidates, ranks.sizes());
        }
    }

    Ok(())
}
