//! Core TOML config loading: read from path or platform default.

use crate::schema::{OrbitConfig, CONFIG_SCHEMA_VERSION};
use crate::validation;
use orbit_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Deserializes the file using serde defaults for any missing fields.
/// A `version` other than [`CONFIG_SCHEMA_VERSION`] is rejected. Other
/// validation failures are logged as a warning and the parsed config is
/// returned as-is; callers that need strictness run
/// [`validation::validate`] themselves.
pub fn load_from_path(path: &Path) -> Result<OrbitConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: OrbitConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if config.version != CONFIG_SCHEMA_VERSION {
        return Err(ConfigError::ValidationError(format!(
            "{}: config version {} is not supported (expected {CONFIG_SCHEMA_VERSION})",
            path.display(),
            config.version
        )));
    }

    if let Err(e) = validation::validate(&config) {
        warn!("config validation warning: {e}");
    }

    info!(
        items = config.items.len(),
        "loaded config from {}",
        path.display()
    );
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/orbit/config.toml`
/// On Linux: `~/.config/orbit/config.toml`
///
/// If the file does not exist, creates a default config file and returns defaults.
pub fn load_default() -> Result<OrbitConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(OrbitConfig::default())
        }
        Err(e) => Err(e),
    }
}
