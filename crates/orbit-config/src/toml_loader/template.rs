//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Orbit Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

version = 1

[sphere]
# radius = 2.0            # 0.1-100
# subdivisions = 1        # 0-4 (1 = 42 tiles)
# disc_steps = 56         # 4-256
# disc_radius = 1.0
# disc_scale = 0.25
# scale_intensity = 0.6   # 0.0-1.0

[controls]
# target_frame_ms = 16.666666666666668
# drag_intensity = 0.3
# angle_amplification = 5.0
# drag_epsilon = 0.1
# idle_decay = 0.1
# snap_intensity = 0.2
# snap_direction = [0.0, 0.0, -1.0]
# arcball_radius = 2.0
# axis_smoothing = 0.8
# velocity_smoothing = 0.5

[camera]
# rest_distance = 3.0
# near = 0.1
# far = 40.0
# drag_push_gain = 80.0
# drag_push_offset = 2.5
# max_drag_push = 20.0
# damping_idle = 5.0
# damping_drag = 7.0
# frame_height = 0.35

[shading]
# stretch_limit = 0.15
# stretch_gain = 15.0
# velocity_scale = 1.1
# scale_factor = 1.0

[atlas]
# cell_size = 512         # 16-4096
# mipmaps = true
# load_timeout_ms = 15000 # 0-600000, 0 waits forever

[motion]
# max_frame_delta_ms = 32.0
# moving_epsilon = 0.01

[window]
# title = "Orbit"
# width = 1280
# height = 800

[logging]
# level = "info"           # trace, debug, info, warn, error
# stats_interval_secs = 5  # 0 disables frame statistics

# Menu entries. With none configured a single placeholder tile is shown.
# [[items]]
# image = "https://picsum.photos/900/900?grayscale"
# title = "First"
# date = "2024-01-01"
# locale = "en-US"
"##
    .to_string()
}
