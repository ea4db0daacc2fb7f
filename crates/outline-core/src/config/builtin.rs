use crate::config::schema::OutlineConfig;
use crate::error::OutlineError;

const EN_JSON: &str = include_str!("../../../../presets/en.json");
const SV_JSON: &str = include_str!("../../../../presets/sv.json");

/// Available predefined configurations.
pub const PRESETS: &[&str] = &["en", "sv"];

/// Preset used when neither a preset nor a config file is given.
pub const DEFAULT_PRESET: &str = "en";

/// Load a predefined configuration by name.
pub fn load_preset(name: &str) -> Result<OutlineConfig, OutlineError> {
    let json = match name {
        "en" => EN_JSON,
        "sv" => SV_JSON,
        _ => {
            return Err(OutlineError::ConfigInvalid(format!(
                "unknown preset '{}'. Available: {}",
                name,
                PRESETS.join(", ")
            )))
        }
    };
    let config: OutlineConfig = serde_json::from_str(json)?;
    Ok(config)
}

/// The default configuration.
pub fn default_config() -> Result<OutlineConfig, OutlineError> {
    load_preset(DEFAULT_PRESET)
}
