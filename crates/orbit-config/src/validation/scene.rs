//! Validation for the sphere, controls, camera, and shading sections.

use crate::schema::OrbitConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_sphere(errors: &mut Vec<String>, config: &OrbitConfig) {
    let s = &config.sphere;
    validate_range_f64(errors, "sphere.radius", s.radius, 0.1, 100.0);
    validate_range(errors, "sphere.subdivisions", s.subdivisions, 0, 4);
    validate_range(errors, "sphere.disc_steps", s.disc_steps, 4, 256);
    validate_range_f64(errors, "sphere.disc_radius", s.disc_radius, 0.01, 10.0);
    validate_range_f64(errors, "sphere.disc_scale", s.disc_scale, 0.01, 2.0);
    validate_range_f64(errors, "sphere.scale_intensity", s.scale_intensity, 0.0, 1.0);
}

pub(crate) fn validate_controls(errors: &mut Vec<String>, config: &OrbitConfig) {
    let c = &config.controls;
    validate_range_f64(errors, "controls.target_frame_ms", c.target_frame_ms, 1.0, 1000.0);
    validate_range_f64(errors, "controls.drag_intensity", c.drag_intensity, 0.0, 1.0);
    validate_range_f64(
        errors,
        "controls.angle_amplification",
        c.angle_amplification,
        0.0,
        100.0,
    );
    validate_range_f64(errors, "controls.drag_epsilon", c.drag_epsilon, 0.0, 100.0);
    validate_range_f64(errors, "controls.idle_decay", c.idle_decay, 0.0, 1.0);
    validate_range_f64(errors, "controls.snap_intensity", c.snap_intensity, 0.0, 1.0);
    validate_range_f64(errors, "controls.arcball_radius", c.arcball_radius, 0.1, 100.0);
    validate_range_f64(errors, "controls.axis_smoothing", c.axis_smoothing, 0.0, 1.0);
    validate_range_f64(
        errors,
        "controls.velocity_smoothing",
        c.velocity_smoothing,
        0.0,
        1.0,
    );

    let [x, y, z] = c.snap_direction;
    let len = (x * x + y * y + z * z).sqrt();
    if len.is_nan() || len <= 1e-9 {
        errors.push("controls.snap_direction must be a non-zero vector".into());
    }
}

pub(crate) fn validate_camera(errors: &mut Vec<String>, config: &OrbitConfig) {
    let c = &config.camera;
    validate_range_f64(errors, "camera.rest_distance", c.rest_distance, 0.1, 100.0);
    validate_range_f64(errors, "camera.near", c.near, 0.001, 10.0);
    validate_range_f64(errors, "camera.far", c.far, 1.0, 10_000.0);
    if c.far <= c.near {
        errors.push(format!(
            "camera.far = {} must be greater than camera.near = {}",
            c.far, c.near
        ));
    }
    validate_range_f64(errors, "camera.drag_push_gain", c.drag_push_gain, 0.0, 1000.0);
    validate_range_f64(errors, "camera.drag_push_offset", c.drag_push_offset, 0.0, 100.0);
    validate_range_f64(errors, "camera.max_drag_push", c.max_drag_push, 0.0, 1000.0);
    validate_range_f64(errors, "camera.damping_idle", c.damping_idle, 1.0, 1000.0);
    validate_range_f64(errors, "camera.damping_drag", c.damping_drag, 1.0, 1000.0);
    validate_range_f64(errors, "camera.frame_height", c.frame_height, 0.01, 10.0);
}

pub(crate) fn validate_shading(errors: &mut Vec<String>, config: &OrbitConfig) {
    let s = &config.shading;
    validate_range_f64(errors, "shading.stretch_limit", s.stretch_limit, 0.0, 1.0);
    validate_range_f64(errors, "shading.stretch_gain", s.stretch_gain, 0.0, 1000.0);
    validate_range_f64(errors, "shading.velocity_scale", s.velocity_scale, 0.0, 100.0);
    validate_range_f64(errors, "shading.scale_factor", s.scale_factor, 0.01, 100.0);
}
