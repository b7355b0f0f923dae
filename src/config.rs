//! Render settings loading and saving
//!
//! Uses RON (Rusty Object Notation) for human-readable settings files.
//! Missing fields fall back to the defaults, so a file may override only
//! what it needs.

use std::fs;
use std::path::Path;
use crate::rasterizer::RenderSettings;

/// Settings file picked up by the binary when present
pub const DEFAULT_CONFIG_PATH: &str = "render.ron";

/// Error type for settings loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    SerializeError(ron::Error),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl From<ron::Error> for ConfigError {
    fn from(e: ron::Error) -> Self {
        ConfigError::SerializeError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
            ConfigError::SerializeError(e) => write!(f, "Serialize error: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Load render settings from a RON file
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<RenderSettings, ConfigError> {
    let contents = fs::read_to_string(path)?;
    load_settings_from_str(&contents)
}

/// Load render settings from a RON string
pub fn load_settings_from_str(s: &str) -> Result<RenderSettings, ConfigError> {
    Ok(ron::from_str(s)?)
}

/// Save render settings to a RON file
pub fn save_settings<P: AsRef<Path>>(settings: &RenderSettings, path: P) -> Result<(), ConfigError> {
    let config = ron::ser::PrettyConfig::new()
        .depth_limit(3)
        .indentor("  ".to_string());

    let contents = ron::ser::to_string_pretty(settings, config)?;
    fs::write(path, contents)?;
    Ok(())
}
