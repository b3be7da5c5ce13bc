//! Dolly camera looking at the sphere center.

use glam::{Mat4, Vec3};
use orbit_config::schema::CameraConfig;

/// Camera constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    pub rest_distance: f32,
    pub near: f32,
    pub far: f32,
    pub drag_push_gain: f32,
    pub drag_push_offset: f32,
    pub max_drag_push: f32,
    pub damping_idle: f32,
    pub damping_drag: f32,
    /// Visible half-height as a fraction of sphere radius.
    pub frame_height: f32,
}

impl CameraParams {
    pub fn from_config(config: &CameraConfig) -> Self {
        Self {
            rest_distance: config.rest_distance as f32,
            near: config.near as f32,
            far: config.far as f32,
            drag_push_gain: config.drag_push_gain as f32,
            drag_push_offset: config.drag_push_offset as f32,
            max_drag_push: config.max_drag_push as f32,
            damping_idle: config.damping_idle as f32,
            damping_drag: config.damping_drag as f32,
            frame_height: config.frame_height as f32,
        }
    }
}

impl Default for CameraParams {
    fn default() -> Self {
        Self::from_config(&CameraConfig::default())
    }
}

/// Perspective camera on the +Z axis. Only the distance changes at runtime.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub up: Vec3,
    /// Vertical field of view in radians.
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    view: Mat4,
    projection: Mat4,
}

impl Camera {
    pub fn new(params: &CameraParams) -> Self {
        let mut camera = Self {
            position: Vec3::new(0.0, 0.0, params.rest_distance),
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4,
            aspect: 1.0,
            near: params.near,
            far: params.far,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
        };
        camera.update_view();
        camera.projection = Mat4::perspective_rh(camera.fov, camera.aspect, camera.near, camera.far);
        camera
    }

    pub fn distance(&self) -> f32 {
        self.position.z
    }

    /// Move a `1/damping` fraction of the way to `target_z`.
    pub fn ease_toward(&mut self, target_z: f32, damping: f32) {
        self.position.z += (target_z - self.position.z) / damping.max(1.0);
        self.update_view();
    }

    pub fn update_view(&mut self) {
        self.view = Mat4::look_at_rh(self.position, Vec3::ZERO, self.up);
    }

    /// Recompute aspect, field of view and projection for a new surface size.
    ///
    /// The field of view frames `visible_half_height` along the shorter
    /// screen axis, so the sphere keeps its apparent size across aspect
    /// ratios.
    pub fn update_projection(&mut self, width: u32, height: u32, visible_half_height: f32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
        let distance = self.distance().max(f32::EPSILON);
        self.fov = if self.aspect > 1.0 {
            2.0 * (visible_half_height / distance).atan()
        } else {
            2.0 * (visible_half_height / self.aspect / distance).atan()
        };
        self.projection = Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far);
    }

    pub fn view(&self) -> Mat4 {
        self.view
    }

    pub fn projection(&self) -> Mat4 {
        self.projection
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_camera() {
        let c = Camera::new(&CameraParams::default());
        assert_eq!(c.position, Vec3::new(0.0, 0.0, 3.0));
        assert!((c.fov - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        let origin = c.view().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(0.0, 0.0, -3.0)).length() < 1e-6);
    }

    #[test]
    fn ease_toward_moves_fraction() {
        let mut c = Camera::new(&CameraParams::default());
        c.ease_toward(7.0, 4.0);
        assert!((c.distance() - 4.0).abs() < 1e-6);
        let origin = c.view().transform_point3(Vec3::ZERO);
        assert!((origin.z + 4.0).abs() < 1e-5);
    }

    #[test]
    fn ease_toward_never_overshoots() {
        let mut c = Camera::new(&CameraParams::default());
        c.ease_toward(10.0, 0.1);
        assert!((c.distance() - 10.0).abs() < 1e-6);
    }

    #[test]
    fn landscape_fov_uses_height() {
        let mut c = Camera::new(&CameraParams::default());
        c.update_projection(1600, 900, 0.7);
        assert!((c.fov - 2.0 * (0.7f32 / 3.0).atan()).abs() < 1e-6);
    }

    #[test]
    fn portrait_fov_widens() {
        let mut c = Camera::new(&CameraParams::default());
        c.update_projection(900, 1600, 0.7);
        let aspect = 900.0 / 1600.0;
        assert!((c.fov - 2.0 * (0.7f32 / aspect / 3.0).atan()).abs() < 1e-6);
    }
}
