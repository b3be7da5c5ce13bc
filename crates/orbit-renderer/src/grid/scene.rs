//! Per-frame derivation of the tile sphere.

use glam::{Mat4, Quat, Vec3};
use orbit_config::OrbitConfig;
use tracing::debug;

use crate::atlas::AtlasLayout;
use crate::controls::{ArcballControl, ArcballParams};
use crate::geometry::{build_anchor_sphere, build_disc, instance_matrix, tile_scale, Geometry};

use super::callbacks::MenuCallbacks;
use super::camera::{Camera, CameraParams};
use super::instances::InstanceArena;

/// Bias keeping the camera damping time scale strictly positive.
const CAMERA_TIME_SCALE_BIAS: f32 = 1e-4;

/// Layout and pacing constants for the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneParams {
    pub sphere_radius: f32,
    pub disc_scale: f32,
    pub scale_intensity: f32,
    pub target_frame_ms: f32,
    pub max_frame_delta_ms: f32,
    pub moving_epsilon: f32,
}

impl SceneParams {
    pub fn from_config(config: &OrbitConfig) -> Self {
        Self {
            sphere_radius: config.sphere.radius as f32,
            disc_scale: config.sphere.disc_scale as f32,
            scale_intensity: config.sphere.scale_intensity as f32,
            target_frame_ms: config.controls.target_frame_ms as f32,
            max_frame_delta_ms: config.motion.max_frame_delta_ms as f32,
            moving_epsilon: config.motion.moving_epsilon as f32,
        }
    }
}

/// CPU state of the menu: anchors, transforms, controller and camera.
pub struct MenuScene {
    params: SceneParams,
    camera_params: CameraParams,
    disc: Geometry,
    instances: InstanceArena,
    control: ArcballControl,
    camera: Camera,
    callbacks: MenuCallbacks,

    item_count: usize,
    atlas_layout: AtlasLayout,
    viewport: (u32, u32),

    frames: f32,
    smoothed_velocity: f32,
    moving: bool,
    active_item: Option<usize>,
    nearest_anchor: usize,
}

impl MenuScene {
    /// Build meshes and anchors, then derive the first set of transforms.
    ///
    /// `item_count` of zero is treated as one.
    pub fn new(
        config: &OrbitConfig,
        item_count: usize,
        width: u32,
        height: u32,
        callbacks: MenuCallbacks,
    ) -> Self {
        let params = SceneParams::from_config(config);
        let camera_params = CameraParams::from_config(&config.camera);

        let disc = build_disc(config.sphere.disc_steps, config.sphere.disc_radius as f32);
        let anchors = build_anchor_sphere(config.sphere.subdivisions, params.sphere_radius);
        let instances = InstanceArena::new(anchors.positions());

        let width = width.max(1);
        let height = height.max(1);
        let control = ArcballControl::new(ArcballParams::from_config(&config.controls), width, height);
        let mut camera = Camera::new(&camera_params);
        camera.update_projection(
            width,
            height,
            params.sphere_radius * camera_params.frame_height,
        );

        let item_count = item_count.max(1);
        let mut scene = Self {
            params,
            camera_params,
            disc,
            instances,
            control,
            camera,
            callbacks,
            item_count,
            atlas_layout: AtlasLayout::new(item_count, config.atlas.cell_size),
            viewport: (width, height),
            frames: 0.0,
            smoothed_velocity: 0.0,
            moving: false,
            active_item: None,
            nearest_anchor: 0,
        };
        scene.update_instances();

        debug!(
            anchors = scene.instances.len(),
            disc_vertices = scene.disc.vertex_count(),
            items = item_count,
            "menu scene built"
        );
        scene
    }

    // -- input ----------------------------------------------------------------

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.control.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.control.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.control.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.control.pointer_leave();
    }

    /// Apply a new drawable size. Returns `false` if nothing changed.
    pub fn resize(&mut self, width: u32, height: u32) -> bool {
        let size = (width.max(1), height.max(1));
        if size == self.viewport {
            return false;
        }
        self.viewport = size;
        self.control.set_viewport(size.0, size.1);
        self.camera.update_projection(
            size.0,
            size.1,
            self.params.sphere_radius * self.camera_params.frame_height,
        );
        true
    }

    // -- per-frame ------------------------------------------------------------

    /// Advance one frame by `delta_ms` milliseconds (capped).
    pub fn advance(&mut self, delta_ms: f32) {
        let dt = delta_ms.clamp(0.0, self.params.max_frame_delta_ms);
        self.frames += dt / self.params.target_frame_ms;

        self.control.update(dt);
        self.on_control_update(dt);
        self.update_instances();

        self.smoothed_velocity = self.control.rotation_velocity();
    }

    fn on_control_update(&mut self, dt: f32) {
        let cam = self.camera_params;
        let time_scale = dt / self.params.target_frame_ms + CAMERA_TIME_SCALE_BIAS;
        let mut damping = cam.damping_idle / time_scale;
        let mut target_z = cam.rest_distance;

        let dragging = self.control.is_pointer_down();
        let moving = dragging || self.smoothed_velocity.abs() > self.params.moving_epsilon;
        if moving != self.moving {
            self.moving = moving;
            debug!(moving, "movement changed");
            self.callbacks.movement_changed(moving);
        }

        if !dragging {
            let nearest = self.find_nearest_anchor();
            self.nearest_anchor = nearest;
            let item = nearest % self.item_count.max(1);
            if self.active_item != Some(item) {
                self.active_item = Some(item);
                debug!(item, anchor = nearest, "active item changed");
                self.callbacks.active_item_changed(item);
            }
            let snap = self.anchor_world_position(nearest).normalize_or_zero();
            self.control.set_snap_target(Some(snap));
        } else {
            let push = (self.control.rotation_velocity() * cam.drag_push_gain).min(cam.max_drag_push);
            target_z += push + cam.drag_push_offset;
            damping = cam.damping_drag / time_scale;
        }

        self.camera.ease_toward(target_z, damping);
    }

    fn update_instances(&mut self) {
        let q = self.control.orientation();
        let p = self.params;
        for i in 0..self.instances.len() {
            let Some(anchor) = self.instances.anchor(i) else {
                continue;
            };
            let world = q * anchor;
            let scale = tile_scale(world, p.sphere_radius, p.scale_intensity, p.disc_scale);
            self.instances
                .set_transform(i, instance_matrix(world, scale, p.sphere_radius));
        }
    }

    /// Anchor best aligned with the snap direction under the current
    /// orientation.
    pub fn find_nearest_anchor(&self) -> usize {
        let local = self.control.orientation().conjugate() * self.control.snap_direction();
        nearest_anchor(self.instances.anchors(), local)
    }

    /// Current world position of anchor `index` (origin if out of range).
    pub fn anchor_world_position(&self, index: usize) -> Vec3 {
        self.instances
            .anchor(index)
            .map(|a| self.control.orientation() * a)
            .unwrap_or(Vec3::ZERO)
    }

    // -- accessors ------------------------------------------------------------

    pub fn disc(&self) -> &Geometry {
        &self.disc
    }

    pub fn instances(&self) -> &InstanceArena {
        &self.instances
    }

    pub fn instance_count(&self) -> u32 {
        self.instances.len() as u32
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn control(&self) -> &ArcballControl {
        &self.control
    }

    pub fn orientation(&self) -> Quat {
        self.control.orientation()
    }

    pub fn world_matrix(&self) -> Mat4 {
        Mat4::IDENTITY
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn atlas_layout(&self) -> AtlasLayout {
        self.atlas_layout
    }

    pub fn viewport(&self) -> (u32, u32) {
        self.viewport
    }

    /// Elapsed time in 60 Hz frames.
    pub fn frames(&self) -> f32 {
        self.frames
    }

    /// Rotation velocity as of the end of the last frame.
    pub fn smoothed_velocity(&self) -> f32 {
        self.smoothed_velocity
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    /// Last reported active item, `None` before the first idle tick.
    pub fn active_item(&self) -> Option<usize> {
        self.active_item
    }

    pub fn nearest_anchor_index(&self) -> usize {
        self.nearest_anchor
    }

    #[cfg(test)]
    pub(crate) fn params(&self) -> &SceneParams {
        &self.params
    }
}

/// Index of the anchor with the largest dot product against `direction`.
/// Ties go to the lowest index; an empty slice yields 0.
pub fn nearest_anchor(anchors: &[Vec3], direction: Vec3) -> usize {
    let mut best = 0;
    let mut best_dot = f32::NEG_INFINITY;
    for (i, anchor) in anchors.iter().enumerate() {
        let d = anchor.dot(direction);
        if d > best_dot {
            best_dot = d;
            best = i;
        }
    }
    best
}

// =============================================================================
// Tests
// =============================================================================
