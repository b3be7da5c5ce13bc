//! Matrix helpers for placing tiles on the sphere.

use glam::{Mat4, Vec3, Vec4};

/// Rotation-plus-translation that places an object at `eye` with its local
/// +Z axis pointing away from `target`.
///
/// Degenerate inputs fall back to a valid orthonormal basis: coincident
/// eye/target use +Z, and an `up` parallel to the view axis is replaced
/// by an arbitrary perpendicular.
pub fn target_to(eye: Vec3, target: Vec3, up: Vec3) -> Mat4 {
    let z = (eye - target).try_normalize().unwrap_or(Vec3::Z);
    let x = up.cross(z).try_normalize().unwrap_or_else(|| z.any_orthonormal_vector());
    let y = z.cross(x);

    Mat4::from_cols(
        x.extend(0.0),
        y.extend(0.0),
        z.extend(0.0),
        Vec4::new(eye.x, eye.y, eye.z, 1.0),
    )
}

/// Depth-driven tile scale: largest facing the camera (`|z| = radius`),
/// smallest edge-on (`z = 0`), times `base_scale`.
pub fn tile_scale(world_position: Vec3, radius: f32, intensity: f32, base_scale: f32) -> f32 {
    let s = (world_position.z.abs() / radius) * intensity + (1.0 - intensity);
    s * base_scale
}

/// Model matrix of one disc instance.
///
/// The disc is pushed `radius` along its local -Z, scaled, oriented to the
/// anchor direction and finally offset by the negated anchor position.
pub fn instance_matrix(world_position: Vec3, scale: f32, radius: f32) -> Mat4 {
    Mat4::from_translation(-world_position)
        * target_to(Vec3::ZERO, world_position, Vec3::Y)
        * Mat4::from_scale(Vec3::splat(scale))
        * Mat4::from_translation(Vec3::new(0.0, 0.0, -radius))
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_to_is_orthonormal() {
        let m = target_to(Vec3::ZERO, Vec3::new(0.3, -1.2, 0.8), Vec3::Y);
        let x = m.x_axis.truncate();
        let y = m.y_axis.truncate();
        let z = m.z_axis.truncate();
        assert!((x.length() - 1.0).abs() < 1e-5);
        assert!((y.length() - 1.0).abs() < 1e-5);
        assert!(x.dot(y).abs() < 1e-5);
        assert!((x.cross(y) - z).length() < 1e-5);
    }

    #[test]
    fn target_to_points_z_away_from_target() {
        let target = Vec3::new(0.0, 0.0, 2.0);
        let m = target_to(Vec3::ZERO, target, Vec3::Y);
        assert!((m.z_axis.truncate() - Vec3::new(0.0, 0.0, -1.0)).length() < 1e-6);
        assert!((m.x_axis.truncate() - Vec3::new(-1.0, 0.0, 0.0)).length() < 1e-6);
    }

    #[test]
    fn target_to_handles_up_parallel_to_axis() {
        let m = target_to(Vec3::ZERO, Vec3::new(0.0, 2.0, 0.0), Vec3::Y);
        assert!(m.determinant().abs() > 0.99);
        assert!(m.is_finite());
    }

    #[test]
    fn target_to_keeps_eye_translation() {
        let eye = Vec3::new(1.0, 2.0, 3.0);
        let m = target_to(eye, Vec3::ZERO, Vec3::Y);
        assert_eq!(m.w_axis, Vec4::new(1.0, 2.0, 3.0, 1.0));
    }

    #[test]
    fn tile_scale_range() {
        assert!((tile_scale(Vec3::new(0.0, 0.0, 2.0), 2.0, 0.6, 0.25) - 0.25).abs() < 1e-6);
        assert!((tile_scale(Vec3::new(0.0, 0.0, -2.0), 2.0, 0.6, 0.25) - 0.25).abs() < 1e-6);
        assert!((tile_scale(Vec3::new(2.0, 0.0, 0.0), 2.0, 0.6, 0.25) - 0.1).abs() < 1e-6);
    }

    #[test]
    fn instance_center_lies_opposite_anchor() {
        let p = Vec3::new(0.0, 0.0, 2.0);
        let s = 0.25;
        let m = instance_matrix(p, s, 2.0);
        let center = m.transform_point3(Vec3::ZERO);
        // s * R along the anchor direction, then shifted back by the anchor.
        assert!((center - Vec3::new(0.0, 0.0, (s - 1.0) * 2.0)).length() < 1e-5);
    }

    #[test]
    fn instance_disc_faces_outward() {
        let p = Vec3::new(2.0, 0.0, 0.0);
        let m = instance_matrix(p, 0.25, 2.0);
        let center = m.transform_point3(Vec3::ZERO);
        let normal = m.transform_vector3(Vec3::Z).normalize();
        assert!(normal.dot(center.normalize()) > 0.999);
    }
}
