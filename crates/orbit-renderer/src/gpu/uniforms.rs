//! Uniform block read by both disc shader stages.

use crate::grid::MenuScene;
use crate::shading::ShadingParams;

/// GPU-side uniform buffer matching the WGSL `Uniforms` struct.
///
/// Layout: three column-major 4×4 matrices then four 16-byte rows,
/// 256 bytes in total.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct DiscUniforms {
    pub world: [[f32; 4]; 4],
    pub view: [[f32; 4]; 4],
    pub projection: [[f32; 4]; 4],

    pub camera_position: [f32; 3],
    /// Uniform scale of the whole menu (1.0 = unscaled).
    pub scale_factor: f32,

    /// xyz = rotation axis, w = smoothed velocity × velocity scale.
    pub rotation_axis_velocity: [f32; 4],

    /// Elapsed time in target-frame units.
    pub frames: f32,
    pub item_count: u32,
    /// Cells per atlas row.
    pub atlas_size: u32,
    pub stretch_limit: f32,

    pub stretch_gain: f32,
    pub _padding: [f32; 3],
}

impl DiscUniforms {
    /// Snapshot the scene state for this frame.
    pub fn from_scene(scene: &MenuScene, shading: &ShadingParams) -> Self {
        let camera = scene.camera();
        let axis = scene.control().rotation_axis();
        let velocity = scene.smoothed_velocity() * shading.velocity_scale;
        Self {
            world: scene.world_matrix().to_cols_array_2d(),
            view: camera.view().to_cols_array_2d(),
            projection: camera.projection().to_cols_array_2d(),
            camera_position: camera.position.to_array(),
            scale_factor: shading.scale_factor,
            rotation_axis_velocity: [axis.x, axis.y, axis.z, velocity],
            frames: scene.frames(),
            item_count: scene.item_count() as u32,
            atlas_size: scene.atlas_layout().cells_per_row,
            stretch_limit: shading.stretch_limit,
            stretch_gain: shading.stretch_gain,
            _padding: [0.0; 3],
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}
