//! Tile shading: the disc WGSL program plus CPU versions of its math.
//!
//! The CPU functions reproduce the shader stage by stage so the
//! distortion and atlas lookup can be checked without a GPU.

use glam::{Vec2, Vec3};
use orbit_config::schema::ShadingConfig;

/// WGSL source for the disc pipeline.
pub const DISC_SHADER: &str = include_str!("../shaders/disc.wgsl");

const DEGENERATE_EPSILON: f32 = 1e-12;

/// Stretch and uniform scaling parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShadingParams {
    pub stretch_limit: f32,
    pub stretch_gain: f32,
    pub velocity_scale: f32,
    pub scale_factor: f32,
}

impl ShadingParams {
    pub fn from_config(config: &ShadingConfig) -> Self {
        Self {
            stretch_limit: config.stretch_limit as f32,
            stretch_gain: config.stretch_gain as f32,
            velocity_scale: config.velocity_scale as f32,
            scale_factor: config.scale_factor as f32,
        }
    }

    /// Clamped stretch amount for an uploaded velocity.
    pub fn stretch_amount(&self, uploaded_velocity: f32) -> f32 {
        (uploaded_velocity * self.stretch_gain).min(self.stretch_limit)
    }
}

impl Default for ShadingParams {
    fn default() -> Self {
        Self::from_config(&ShadingConfig::default())
    }
}

/// Vertex stage: stretch a rim vertex tangentially and put it back on the
/// disc center's sphere.
///
/// `velocity` is the uploaded value (already multiplied by
/// `velocity_scale`). The fan center (`is_center`) is only re-projected.
pub fn displace_vertex(
    world: Vec3,
    center: Vec3,
    axis: Vec3,
    velocity: f32,
    params: &ShadingParams,
    is_center: bool,
) -> Vec3 {
    let radius = center.length();
    let mut pos = world;

    if !is_center {
        let amount = params.stretch_amount(velocity);
        let tangent = center.cross(axis);
        let offset = world - center;
        if tangent.length_squared() > DEGENERATE_EPSILON
            && offset.length_squared() > DEGENERATE_EPSILON
        {
            let stretch_dir = tangent.normalize();
            let alignment = stretch_dir.dot(offset.normalize());
            let inv = (alignment.abs() - 1.0).min(0.0);
            let strength = amount * sign(alignment) * (inv * inv * inv + 1.0).abs();
            pos += stretch_dir * strength;
        }
    }

    radius * pos.normalize_or_zero()
}

/// Opacity fade: fully visible facing the camera, 10% facing away.
pub fn fade_alpha(world: Vec3) -> f32 {
    smoothstep(0.5, 1.0, world.normalize_or_zero().z) * 0.9 + 0.1
}

/// Fragment stage: atlas texture coordinate for a disc uv of `instance`.
pub fn atlas_uv(
    uv: Vec2,
    instance: u32,
    item_count: u32,
    cells_per_row: u32,
    image_aspect: f32,
) -> Vec2 {
    let item = instance % item_count.max(1);
    let per_row = cells_per_row.max(1);
    let cell_size = 1.0 / per_row as f32;
    let cell = Vec2::new((item % per_row) as f32, (item / per_row) as f32);

    let scale = image_aspect.max(1.0 / image_aspect);
    let st = Vec2::ONE - uv;
    let st = ((st - 0.5) * scale + 0.5).clamp(Vec2::ZERO, Vec2::ONE);
    st * cell_size + cell * cell_size
}

/// WGSL `sign`: zero maps to zero.
fn sign(x: f32) -> f32 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

fn smoothstep(edge0: f32, edge1: f32, x: f32) -> f32 {
    let t = ((x - edge0) / (edge1 - edge0)).clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

// =============================================================================
// Tests
// =============================================================================
