//! Full configuration validation.
//!
//! Each section has its own submodule; this orchestrator calls them all
//! and collects errors into a single `ConfigError`.

mod helpers;
mod scene;
mod system;


use crate::schema::OrbitConfig;
use orbit_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &OrbitConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    scene::validate_sphere(&mut errors, config);
    scene::validate_controls(&mut errors, config);
    scene::validate_camera(&mut errors, config);
    scene::validate_shading(&mut errors, config);
    system::validate_atlas(&mut errors, config);
    system::validate_motion(&mut errors, config);
    system::validate_window(&mut errors, config);
    system::validate_items(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
