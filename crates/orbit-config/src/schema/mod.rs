//! Configuration schema types for the orbit menu.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Defaults reproduce the tuning of the reference widget.

mod atlas;
mod camera;
mod controls;
mod shading;
mod sphere;
mod system;

pub use atlas::*;
pub use camera::*;
pub use controls::*;
pub use shading::*;
pub use sphere::*;
pub use system::*;

use orbit_common::MenuItem;
use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OrbitConfig {
    /// Must equal [`CONFIG_SCHEMA_VERSION`]; omitted means current.
    pub version: u32,
    pub sphere: SphereConfig,
    pub controls: ControlsConfig,
    pub camera: CameraConfig,
    pub shading: ShadingConfig,
    pub atlas: AtlasConfig,
    pub motion: MotionConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    /// Menu entries in display order. Empty means "use the placeholder".
    pub items: Vec<MenuItem>,
}

impl Default for OrbitConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_SCHEMA_VERSION,
            sphere: SphereConfig::default(),
            controls: ControlsConfig::default(),
            camera: CameraConfig::default(),
            shading: ShadingConfig::default(),
            atlas: AtlasConfig::default(),
            motion: MotionConfig::default(),
            window: WindowConfig::default(),
            logging: LoggingConfig::default(),
            items: Vec::new(),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_reference_sphere() {
        let config = OrbitConfig::default();
        assert!((config.sphere.radius - 2.0).abs() < f64::EPSILON);
        assert_eq!(config.sphere.subdivisions, 1);
        assert_eq!(config.sphere.disc_steps, 56);
        assert!((config.sphere.disc_scale - 0.25).abs() < f64::EPSILON);
        assert!((config.sphere.scale_intensity - 0.6).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_reference_controls() {
        let c = OrbitConfig::default().controls;
        assert!((c.target_frame_ms - 1000.0 / 60.0).abs() < 1e-9);
        assert!((c.drag_intensity - 0.3).abs() < f64::EPSILON);
        assert!((c.angle_amplification - 5.0).abs() < f64::EPSILON);
        assert!((c.drag_epsilon - 0.1).abs() < f64::EPSILON);
        assert!((c.idle_decay - 0.1).abs() < f64::EPSILON);
        assert!((c.snap_intensity - 0.2).abs() < f64::EPSILON);
        assert_eq!(c.snap_direction, [0.0, 0.0, -1.0]);
    }

    #[test]
    fn default_config_has_reference_camera() {
        let c = OrbitConfig::default().camera;
        assert!((c.rest_distance - 3.0).abs() < f64::EPSILON);
        assert!((c.near - 0.1).abs() < f64::EPSILON);
        assert!((c.far - 40.0).abs() < f64::EPSILON);
        assert!((c.drag_push_gain - 80.0).abs() < f64::EPSILON);
        assert!((c.drag_push_offset - 2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_reference_shading() {
        let s = OrbitConfig::default().shading;
        assert!((s.stretch_limit - 0.15).abs() < f64::EPSILON);
        assert!((s.stretch_gain - 15.0).abs() < f64::EPSILON);
        assert!((s.velocity_scale - 1.1).abs() < f64::EPSILON);
    }

    #[test]
    fn default_config_has_no_items() {
        assert!(OrbitConfig::default().items.is_empty());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: OrbitConfig = toml::from_str(
            r#"
[sphere]
radius = 3.0

[[items]]
image = "a.png"
title = "A"
"#,
        )
        .unwrap();
        assert!((config.sphere.radius - 3.0).abs() < f64::EPSILON);
        assert_eq!(config.sphere.disc_steps, 56);
        assert_eq!(config.items.len(), 1);
        assert_eq!(config.items[0].title, "A");
        assert_eq!(config.atlas.cell_size, 512);
        assert_eq!(config.version, CONFIG_SCHEMA_VERSION);
    }
}
