//! Pointer state and tuning parameters for the arcball controller.

use glam::{Vec2, Vec3};
use orbit_config::schema::ControlsConfig;

/// Single-pointer drag state.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PointerState {
    #[default]
    Idle,
    /// `previous` trails `pointer` and catches up a fraction per tick.
    Dragging { pointer: Vec2, previous: Vec2 },
}

impl PointerState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, PointerState::Dragging { .. })
    }
}

/// Controller constants, expressed per frame at the target frame rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcballParams {
    pub target_frame_ms: f32,
    pub drag_intensity: f32,
    pub angle_amplification: f32,
    pub drag_epsilon: f32,
    pub idle_decay: f32,
    pub snap_intensity: f32,
    /// Unit world direction tiles snap toward.
    pub snap_direction: Vec3,
    pub arcball_radius: f32,
    pub axis_smoothing: f32,
    pub velocity_smoothing: f32,
}

impl ArcballParams {
    pub fn from_config(config: &ControlsConfig) -> Self {
        let [x, y, z] = config.snap_direction;
        let snap_direction = Vec3::new(x as f32, y as f32, z as f32)
            .try_normalize()
            .unwrap_or(Vec3::NEG_Z);

        Self {
            target_frame_ms: config.target_frame_ms as f32,
            drag_intensity: config.drag_intensity as f32,
            angle_amplification: config.angle_amplification as f32,
            drag_epsilon: config.drag_epsilon as f32,
            idle_decay: config.idle_decay as f32,
            snap_intensity: config.snap_intensity as f32,
            snap_direction,
            arcball_radius: config.arcball_radius as f32,
            axis_smoothing: config.axis_smoothing as f32,
            velocity_smoothing: config.velocity_smoothing as f32,
        }
    }
}

impl Default for ArcballParams {
    fn default() -> Self {
        Self::from_config(&ControlsConfig::default())
    }
}
