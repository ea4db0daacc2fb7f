use outline_core::error::OutlineError;
use serde::Serialize;
use std::path::Path;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), OutlineError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}

/// Write pretty JSON (two-space indent, non-ASCII kept as UTF-8).
pub fn write<T: Serialize + ?Sized>(value: &T, path: &Path) -> Result<(), OutlineError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json)?;
    Ok(())
}
