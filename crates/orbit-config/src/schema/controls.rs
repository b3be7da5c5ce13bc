//! Arcball rotation controller tuning.

use serde::{Deserialize, Serialize};

/// Smoothing, momentum and snapping constants for pointer rotation.
///
/// Intensities are expressed per 60 Hz frame and scaled by elapsed time
/// at runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ControlsConfig {
    /// Baseline frame duration in milliseconds.
    pub target_frame_ms: f64,
    /// Fraction of the pointer delta consumed per tick while dragging.
    pub drag_intensity: f64,
    pub angle_amplification: f64,
    /// Squared pointer displacement below which a drag counts as still.
    pub drag_epsilon: f64,
    /// Pointer rotation decay toward identity while idle.
    pub idle_decay: f64,
    pub snap_intensity: f64,
    /// World direction considered "front and center".
    pub snap_direction: [f64; 3],
    /// Radius of the virtual arcball in normalized pointer units.
    pub arcball_radius: f64,
    pub axis_smoothing: f64,
    pub velocity_smoothing: f64,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            target_frame_ms: 1000.0 / 60.0,
            drag_intensity: 0.3,
            angle_amplification: 5.0,
            drag_epsilon: 0.1,
            idle_decay: 0.1,
            snap_intensity: 0.2,
            snap_direction: [0.0, 0.0, -1.0],
            arcball_radius: 2.0,
            axis_smoothing: 0.8,
            velocity_smoothing: 0.5,
        }
    }
}

/// Frame pacing and movement detection.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Upper bound on a single frame's elapsed time in milliseconds.
    pub max_frame_delta_ms: f64,
    /// Smoothed rotation speed above which the grid reports movement.
    pub moving_epsilon: f64,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            max_frame_delta_ms: 32.0,
            moving_epsilon: 0.01,
        }
    }
}
