//! Tile shader tuning.

use serde::{Deserialize, Serialize};

/// Motion-stretch and uniform scaling passed to the disc shader.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShadingConfig {
    /// Upper bound on the tangential stretch offset.
    pub stretch_limit: f64,
    /// Multiplier from rotation velocity to stretch offset.
    pub stretch_gain: f64,
    /// Multiplier applied to the velocity before upload.
    pub velocity_scale: f64,
    pub scale_factor: f64,
}

impl Default for ShadingConfig {
    fn default() -> Self {
        Self {
            stretch_limit: 0.15,
            stretch_gain: 15.0,
            velocity_scale: 1.1,
            scale_factor: 1.0,
        }
    }
}
