//! Orbit configuration system.
//!
//! Provides TOML-based configuration with full validation. All config
//! sections use defaults matching the reference tuning so partial configs
//! work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use orbit_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{OrbitConfig, CONFIG_SCHEMA_VERSION};

use orbit_common::ConfigError;
use std::path::Path;

/// Load and validate config.
///
/// With `path` set the file must exist. Without it the platform default
/// is used and created on first run.
pub fn load_config(path: Option<&Path>) -> Result<OrbitConfig, ConfigError> {
    let config = match path {
        Some(path) => toml_loader::load_from_path(path)?,
        None => toml_loader::load_default()?,
    };

    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &OrbitConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let config = OrbitConfig::default();
        let json = config_to_json(&config);
        for section in [
            "\"sphere\"",
            "\"controls\"",
            "\"camera\"",
            "\"shading\"",
            "\"atlas\"",
            "\"motion\"",
            "\"window\"",
            "\"logging\"",
            "\"items\"",
        ] {
            assert!(json.contains(section), "missing {section}");
        }
    }

    #[test]
    fn config_schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let mut config = OrbitConfig::default();
        config.items.push(orbit_common::MenuItem::new("a.png", "A"));
        let json = config_to_json(&config);
        let parsed: OrbitConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sphere.disc_steps, 56);
        assert_eq!(parsed.items, config.items);
    }

    #[test]
    fn load_config_rejects_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[atlas]\ncell_size = 1\n").unwrap();
        let err = load_config(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn load_config_missing_explicit_path_fails() {
        let err = load_config(Some(Path::new("/tmp/definitely_missing_orbit.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }
}
