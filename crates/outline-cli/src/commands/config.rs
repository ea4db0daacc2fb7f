use outline_core::config::builtin;
use outline_core::error::OutlineError;
use std::path::Path;

pub fn list() -> Result<(), OutlineError> {
    println!("Available predefined configurations:\n");
    for name in builtin::PRESETS {
        let config = builtin::load_preset(name)?;
        let default_marker = if *name == builtin::DEFAULT_PRESET {
            " [default]"
        } else {
            ""
        };
        println!(
            "  {:<4} {} (v{}){}",
            name, config.name, config.version, default_marker
        );
        if let Some(ref desc) = config.description {
            println!("       {}", desc);
        }
        println!(
            "       {} keyword(s), OCR language '{}'",
            config.keywords.len(),
            config.ocr.language
        );
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), OutlineError> {
    let config = builtin::load_preset(preset)?;
    println!("{}", serde_json::to_string_pretty(&config)?);
    Ok(())
}

pub fn validate(file: &Path) -> Result<(), OutlineError> {
    let config = outline_core::config::load_config(file)?;

    println!(
        "Configuration '{}' (v{}) is valid.",
        config.name, config.version
    );
    println!("  Keywords: {}", config.keywords.join(", "));
    let s = &config.scoring;
    println!(
        "  Thresholds: H1 >= {}, H2 >= {}, H3 >= {}",
        s.h1_min_score, s.h2_min_score, s.h3_min_score
    );
    println!(
        "  OCR: {} ({} dpi, language '{}')",
        if config.ocr.enabled { "on" } else { "off" },
        config.ocr.dpi,
        config.ocr.language
    );

    // Potential issues (warnings, not errors)
    let mut warnings = Vec::new();
    let max_score =
        s.rank_weights.iter().copied().max().unwrap_or(0) + s.bold_bonus + s.short_bonus;
    if max_score < s.h1_min_score {
        warnings.push(format!(
            "highest reachable score {} is below the H1 threshold {}",
            max_score, s.h1_min_score
        ));
    }
    if s.short_bonus >= s.h3_min_score {
        warnings.push(
            "short_bonus alone reaches the H3 threshold, so every short line is a heading".into(),
        );
    }
    for (i, keyword) in config.keywords.iter().enumerate() {
        if config.keywords[..i].contains(keyword) {
            warnings.push(format!("keyword '{}' is listed more than once", keyword));
        }
    }

    if !warnings.is_empty() {
        println!("\nWarnings:");
        for w in &warnings {
            println!("  - {}", w);
        }
    }

    Ok(())
}
