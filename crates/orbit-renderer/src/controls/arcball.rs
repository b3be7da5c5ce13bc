//! Arcball controller with drag momentum, idle decay and snapping.
//!
//! Pointer positions are projected onto a virtual hemisphere (hyperbolic
//! sheet past the rim) and the rotation between consecutive projections
//! becomes the per-tick pointer rotation. While idle, that rotation decays
//! toward identity and an optional snap target is pulled onto the snap
//! direction. Every smoothing factor is scaled by elapsed time relative to
//! the target frame duration.

use glam::{Quat, Vec2, Vec3};

use super::types::{ArcballParams, PointerState};

/// Below this `sin(angle/2)` the rotation axis is left unchanged.
const AXIS_EPSILON: f32 = 1e-6;

/// Time-scale bias keeping `time_scale` strictly positive.
const TIME_SCALE_BIAS: f32 = 1e-5;

pub struct ArcballControl {
    params: ArcballParams,
    state: PointerState,
    viewport: Vec2,

    orientation: Quat,
    pointer_rotation: Quat,
    smoothed_rotation: Quat,

    rotation_axis: Vec3,
    rotation_velocity: f32,
    smoothed_velocity: f32,

    snap_target: Option<Vec3>,
}

impl ArcballControl {
    pub fn new(params: ArcballParams, width: u32, height: u32) -> Self {
        Self {
            params,
            state: PointerState::Idle,
            viewport: Vec2::new(width.max(1) as f32, height.max(1) as f32),
            orientation: Quat::IDENTITY,
            pointer_rotation: Quat::IDENTITY,
            smoothed_rotation: Quat::IDENTITY,
            rotation_axis: Vec3::X,
            rotation_velocity: 0.0,
            smoothed_velocity: 0.0,
            snap_target: None,
        }
    }

    // -- pointer transitions --------------------------------------------------

    /// Idle → Dragging. The drag origin is the pressed position.
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        let p = Vec2::new(x, y);
        self.state = PointerState::Dragging {
            pointer: p,
            previous: p,
        };
    }

    /// Moves are only tracked while dragging.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        if let PointerState::Dragging { pointer, .. } = &mut self.state {
            *pointer = Vec2::new(x, y);
        }
    }

    pub fn pointer_up(&mut self) {
        self.state = PointerState::Idle;
    }

    pub fn pointer_leave(&mut self) {
        self.state = PointerState::Idle;
    }

    /// Pointer coordinates are interpreted relative to this surface size.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        self.viewport = Vec2::new(width.max(1) as f32, height.max(1) as f32);
    }

    pub fn set_snap_target(&mut self, direction: Option<Vec3>) {
        self.snap_target = direction.and_then(Vec3::try_normalize);
    }

    // -- per-tick update ------------------------------------------------------

    /// Advance the controller by `delta_ms` milliseconds.
    pub fn update(&mut self, delta_ms: f32) {
        let p = self.params;
        let time_scale = delta_ms / p.target_frame_ms + TIME_SCALE_BIAS;
        let mut angle_factor = time_scale;
        let mut snap_rotation = Quat::IDENTITY;

        match &mut self.state {
            PointerState::Dragging { pointer, previous } => {
                let intensity = p.drag_intensity * time_scale;
                let amplification = p.angle_amplification / time_scale;

                let step = (*pointer - *previous) * intensity;
                if step.length_squared() > p.drag_epsilon {
                    let mid = *previous + step;
                    let a = project(mid, self.viewport, p.arcball_radius).normalize_or_zero();
                    let b =
                        project(*previous, self.viewport, p.arcball_radius).normalize_or_zero();
                    *previous = mid;

                    angle_factor *= amplification;
                    self.pointer_rotation = quat_from_vectors(a, b, angle_factor);
                } else {
                    self.pointer_rotation =
                        slerp_clamped(self.pointer_rotation, Quat::IDENTITY, intensity);
                }
            }
            PointerState::Idle => {
                let intensity = p.idle_decay * time_scale;
                self.pointer_rotation =
                    slerp_clamped(self.pointer_rotation, Quat::IDENTITY, intensity);

                if let Some(target) = self.snap_target {
                    let sq_dist = target.distance_squared(p.snap_direction);
                    let distance_factor = (1.0 - sq_dist * 10.0).max(0.1);
                    angle_factor *= p.snap_intensity * distance_factor;
                    snap_rotation = quat_from_vectors(target, p.snap_direction, angle_factor);
                }
            }
        }

        let combined = snap_rotation * self.pointer_rotation;
        self.orientation = (combined * self.orientation).normalize();

        self.smoothed_rotation = slerp_clamped(
            self.smoothed_rotation,
            combined,
            p.axis_smoothing * time_scale,
        )
        .normalize();

        let q = self.smoothed_rotation;
        let angle = q.w.clamp(-1.0, 1.0).acos() * 2.0;
        let s = (angle / 2.0).sin();
        let mut velocity = 0.0;
        if s > AXIS_EPSILON {
            velocity = angle / std::f32::consts::TAU;
            self.rotation_axis = Vec3::new(q.x, q.y, q.z) / s;
        }

        let v_intensity = (p.velocity_smoothing * time_scale).min(1.0);
        self.smoothed_velocity += (velocity - self.smoothed_velocity) * v_intensity;
        self.rotation_velocity = self.smoothed_velocity / time_scale;
    }

    // -- accessors ------------------------------------------------------------

    pub fn orientation(&self) -> Quat {
        self.orientation
    }

    pub fn rotation_axis(&self) -> Vec3 {
        self.rotation_axis
    }

    pub fn rotation_velocity(&self) -> f32 {
        self.rotation_velocity
    }

    pub fn is_pointer_down(&self) -> bool {
        self.state.is_dragging()
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> PointerState {
        self.state
    }

    pub fn snap_direction(&self) -> Vec3 {
        self.params.snap_direction
    }
}

/// Map a pointer position onto the arcball surface.
///
/// Positions are normalized by the longer viewport side. Inside
/// `r / sqrt(2)` the point lands on the sphere of radius `r`; outside it
/// lands on the hyperbolic sheet `z = r² / |xy|`. X is negated so dragging
/// right rotates the front of the sphere right.
pub fn project(pos: Vec2, viewport: Vec2, radius: f32) -> Vec3 {
    let s = (viewport.x.max(viewport.y) - 1.0).max(1.0);
    let x = (2.0 * pos.x - viewport.x - 1.0) / s;
    let y = (2.0 * pos.y - viewport.y - 1.0) / s;

    let xy_sq = x * x + y * y;
    let r_sq = radius * radius;
    let z = if xy_sq <= r_sq / 2.0 {
        (r_sq - xy_sq).sqrt()
    } else {
        r_sq / xy_sq.sqrt()
    };

    Vec3::new(-x, y, z)
}

/// Rotation carrying unit vector `a` toward `b`, with its angle scaled by
/// `factor`. Parallel or degenerate inputs yield identity.
pub fn quat_from_vectors(a: Vec3, b: Vec3, factor: f32) -> Quat {
    let Some(axis) = a.cross(b).try_normalize() else {
        return Quat::IDENTITY;
    };
    let d = a.dot(b).clamp(-1.0, 1.0);
    Quat::from_axis_angle(axis, d.acos() * factor)
}

fn slerp_clamped(from: Quat, to: Quat, t: f32) -> Quat {
    from.slerp(to, t.clamp(0.0, 1.0))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1000.0 / 60.0;

    fn control() -> ArcballControl {
        ArcballControl::new(ArcballParams::default(), 800, 600)
    }

    fn drag(c: &mut ArcballControl, from: (f32, f32), to: (f32, f32), ticks: u32) {
        c.pointer_down(from.0, from.1);
        for i in 1..=ticks {
            let t = i as f32 / ticks as f32;
            c.pointer_move(from.0 + (to.0 - from.0) * t, from.1 + (to.1 - from.1) * t);
            c.update(FRAME);
        }
    }

    #[test]
    fn starts_at_rest() {
        let c = control();
        assert_eq!(c.orientation(), Quat::IDENTITY);
        assert_eq!(c.rotation_axis(), Vec3::X);
        assert_eq!(c.rotation_velocity(), 0.0);
        assert!(!c.is_pointer_down());
    }

    #[test]
    fn pointer_transitions() {
        let mut c = control();
        c.pointer_move(10.0, 10.0);
        assert_eq!(c.state(), PointerState::Idle);

        c.pointer_down(100.0, 200.0);
        assert_eq!(
            c.state(),
            PointerState::Dragging {
                pointer: Vec2::new(100.0, 200.0),
                previous: Vec2::new(100.0, 200.0),
            }
        );

        c.pointer_move(120.0, 200.0);
        assert!(matches!(
            c.state(),
            PointerState::Dragging { pointer, .. } if pointer == Vec2::new(120.0, 200.0)
        ));

        c.pointer_up();
        assert!(!c.is_pointer_down());

        c.pointer_down(0.0, 0.0);
        c.pointer_leave();
        assert!(!c.is_pointer_down());
    }

    #[test]
    fn idle_ticks_without_input_stay_at_identity() {
        let mut c = control();
        for _ in 0..100 {
            c.update(FRAME);
        }
        assert!(c.orientation().abs_diff_eq(Quat::IDENTITY, 1e-6));
        // Zero rotation keeps the previous axis.
        assert_eq!(c.rotation_axis(), Vec3::X);
        assert!(c.rotation_velocity().abs() < 1e-6);
    }

    #[test]
    fn tiny_drag_below_threshold_does_not_rotate() {
        let mut c = control();
        c.pointer_down(400.0, 300.0);
        c.pointer_move(400.5, 300.0);
        for _ in 0..10 {
            c.update(FRAME);
        }
        assert!(c.orientation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn horizontal_drag_rotates_about_vertical_axis() {
        let mut c = control();
        drag(&mut c, (400.0, 300.0), (600.0, 300.0), 20);

        assert!(!c.orientation().abs_diff_eq(Quat::IDENTITY, 1e-3));
        assert!(c.rotation_velocity() > 0.0);
        let axis = c.rotation_axis().normalize();
        assert!(axis.y.abs() > 0.9, "axis {axis:?}");
        // The front of the sphere follows the pointer to the right.
        let front = c.orientation() * Vec3::Z;
        assert!(front.x > 0.0, "front {front:?}");
    }

    #[test]
    fn momentum_decays_after_release() {
        let mut c = control();
        drag(&mut c, (400.0, 300.0), (700.0, 350.0), 15);
        let spinning = c.rotation_velocity();
        c.pointer_up();
        for _ in 0..600 {
            c.update(FRAME);
        }
        assert!(spinning > 0.0);
        assert!(c.rotation_velocity() < spinning * 0.05);
    }

    #[test]
    fn orientation_stays_unit_length() {
        let mut c = control();
        let mut seed: u32 = 0x1234_5678;
        let mut next = move || {
            seed = seed.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
            (seed >> 8) as f32 / (1u32 << 24) as f32
        };

        for i in 0..10_000 {
            match i % 50 {
                0 => c.pointer_down(next() * 800.0, next() * 600.0),
                40 => c.pointer_up(),
                _ => c.pointer_move(next() * 800.0, next() * 600.0),
            }
            c.update(5.0 + next() * 27.0);
            assert!((c.orientation().length() - 1.0).abs() < 1e-4);
        }
    }

    #[test]
    fn snapping_pulls_target_onto_snap_direction() {
        let mut c = control();
        let anchor = Vec3::new(0.3, 0.2, -1.0).normalize();
        for _ in 0..600 {
            c.set_snap_target(Some(c.orientation() * anchor));
            c.update(FRAME);
        }
        let world = c.orientation() * anchor;
        assert!(world.distance(Vec3::NEG_Z) < 1e-2, "world {world:?}");
    }

    #[test]
    fn snapping_is_suspended_while_dragging() {
        let mut c = control();
        c.pointer_down(400.0, 300.0);
        c.set_snap_target(Some(Vec3::new(1.0, 0.0, -1.0)));
        for _ in 0..30 {
            c.update(FRAME);
        }
        assert!(c.orientation().abs_diff_eq(Quat::IDENTITY, 1e-6));
    }

    #[test]
    fn project_center_hits_sphere_top() {
        let v = project(Vec2::new(51.0, 51.0), Vec2::new(101.0, 101.0), 2.0);
        assert!(v.x.abs() < 1e-6 && v.y.abs() < 1e-6);
        assert!((v.z - 2.0).abs() < 1e-6);
    }

    #[test]
    fn project_far_point_uses_hyperbolic_sheet() {
        let viewport = Vec2::new(101.0, 101.0);
        // x = (2*201 - 102) / 100 = 3
        let v = project(Vec2::new(201.0, 51.0), viewport, 2.0);
        assert!((v.x + 3.0).abs() < 1e-5);
        assert!((v.z - 4.0 / 3.0).abs() < 1e-5);
    }

    #[test]
    fn project_is_continuous_at_the_rim() {
        // x² = r²/2 is the switch-over point.
        let r = 2.0_f32;
        let xy = (r * r / 2.0).sqrt();
        let inside = (r * r - xy * xy).sqrt();
        let outside = r * r / xy;
        assert!((inside - outside).abs() < 1e-5);
    }

    #[test]
    fn quat_from_vectors_full_factor() {
        let q = quat_from_vectors(Vec3::X, Vec3::Y, 1.0);
        assert!((q * Vec3::X).abs_diff_eq(Vec3::Y, 1e-6));
    }

    #[test]
    fn quat_from_vectors_half_factor() {
        let q = quat_from_vectors(Vec3::X, Vec3::Y, 0.5);
        let expected = Vec3::new(1.0, 1.0, 0.0).normalize();
        assert!((q * Vec3::X).abs_diff_eq(expected, 1e-6));
    }

    #[test]
    fn quat_from_parallel_vectors_is_identity() {
        assert_eq!(quat_from_vectors(Vec3::Z, Vec3::Z, 1.0), Quat::IDENTITY);
        assert_eq!(quat_from_vectors(Vec3::ZERO, Vec3::Z, 1.0), Quat::IDENTITY);
    }
}
