//! Tile sphere layout configuration.

use serde::{Deserialize, Serialize};

/// Geometry of the tile sphere and its per-tile scaling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SphereConfig {
    /// Radius tiles are placed at.
    pub radius: f64,
    /// Icosahedron subdivision passes (1 → 42 tiles).
    pub subdivisions: u32,
    /// Rim segments of the rounded tile disc (minimum 4).
    pub disc_steps: u32,
    pub disc_radius: f64,
    /// Base scale applied to every disc.
    pub disc_scale: f64,
    /// How strongly depth shrinks edge-on tiles (0 = uniform size).
    pub scale_intensity: f64,
}

impl Default for SphereConfig {
    fn default() -> Self {
        Self {
            radius: 2.0,
            subdivisions: 1,
            disc_steps: 56,
            disc_radius: 1.0,
            disc_scale: 0.25,
            scale_intensity: 0.6,
        }
    }
}
