//! tri-raster: render the reference triangle to art.bmp
//!
//! Settings come from `render.ron` in the working directory when it exists,
//! otherwise the built-in 64x64 blue triangle is used.

use std::io::ErrorKind;
use std::process::ExitCode;
use log::info;

use tri_raster::config::{load_settings, ConfigError, DEFAULT_CONFIG_PATH};
use tri_raster::rasterizer::{create_test_image, RenderSettings};

/// Settings from the config file, or the defaults when there is no file
fn settings_or_default(result: Result<RenderSettings, ConfigError>) -> Result<RenderSettings, ConfigError> {
    match result {
        Ok(settings) => {
            info!("Loaded settings from {}", DEFAULT_CONFIG_PATH);
            Ok(settings)
        }
        Err(ConfigError::IoError(e)) if e.kind() == ErrorKind::NotFound => Ok(RenderSettings::default()),
        Err(e) => Err(e),
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let settings = settings_or_default(load_settings(DEFAULT_CONFIG_PATH))?;
    let path = create_test_image(&settings)?;
    println!("Wrote {}", path.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_missing_config_falls_back_to_defaults() {
        let missing = Err(ConfigError::IoError(io::Error::new(ErrorKind::NotFound, "no file")));
        assert_eq!(settings_or_default(missing).unwrap(), RenderSettings::default());
    }

    #[test]
    fn test_unreadable_config_is_an_error() {
        let denied = Err(ConfigError::IoError(io::Error::new(ErrorKind::PermissionDenied, "denied")));
        assert!(matches!(settings_or_default(denied), Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let parsed = tri_raster::config::load_settings_from_str("(width: \"wide\")");
        assert!(matches!(settings_or_default(parsed), Err(ConfigError::ParseError(_))));
    }
}
