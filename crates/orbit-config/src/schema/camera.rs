//! Camera dolly and projection configuration.

use serde::{Deserialize, Serialize};

/// Camera placement and zoom-out behaviour during fast spins.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Distance from the sphere center when idle.
    pub rest_distance: f64,
    pub near: f64,
    pub far: f64,
    /// Push-back per unit of rotation velocity while dragging.
    pub drag_push_gain: f64,
    /// Constant push-back added while dragging.
    pub drag_push_offset: f64,
    /// Maximum velocity-driven push-back.
    pub max_drag_push: f64,
    pub damping_idle: f64,
    pub damping_drag: f64,
    /// Half-height of the framed region as a fraction of sphere radius.
    pub frame_height: f64,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            rest_distance: 3.0,
            near: 0.1,
            far: 40.0,
            drag_push_gain: 80.0,
            drag_push_offset: 2.5,
            max_drag_push: 20.0,
            damping_idle: 5.0,
            damping_drag: 7.0,
            frame_height: 0.35,
        }
    }
}
