//! Validation for atlas, motion, window, and item sections.

use crate::schema::OrbitConfig;

use super::helpers::{validate_range, validate_range_f64};

pub(crate) fn validate_atlas(errors: &mut Vec<String>, config: &OrbitConfig) {
    validate_range(errors, "atlas.cell_size", config.atlas.cell_size, 16, 4096);
    if config.atlas.load_timeout_ms > 600_000 {
        errors.push(format!(
            "atlas.load_timeout_ms = {} is out of range [0, 600000]",
            config.atlas.load_timeout_ms
        ));
    }
}

pub(crate) fn validate_motion(errors: &mut Vec<String>, config: &OrbitConfig) {
    validate_range_f64(
        errors,
        "motion.max_frame_delta_ms",
        config.motion.max_frame_delta_ms,
        1.0,
        1000.0,
    );
    validate_range_f64(
        errors,
        "motion.moving_epsilon",
        config.motion.moving_epsilon,
        0.0,
        10.0,
    );
}

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &OrbitConfig) {
    validate_range(errors, "window.width", config.window.width, 64, 16_384);
    validate_range(errors, "window.height", config.window.height, 64, 16_384);
}

/// Every configured item needs an image source.
pub(crate) fn validate_items(errors: &mut Vec<String>, config: &OrbitConfig) {
    for (i, item) in config.items.iter().enumerate() {
        if item.image.trim().is_empty() {
            errors.push(format!("items[{i}].image must not be empty"));
        }
    }
}
