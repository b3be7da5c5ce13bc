//! Frame clock: per-tick delta plus rolling frame statistics.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Default rolling window size.
const DEFAULT_SAMPLES: usize = 120;

/// Measures the time between ticks and keeps a window of recent
/// frame durations for FPS reporting.
pub struct FrameTimer {
    frame_times: VecDeque<Duration>,
    last_frame: Instant,
    max_samples: usize,
    frame_count: u64,
}

impl FrameTimer {
    /// Create a new frame timer with a 120-sample rolling window.
    pub fn new() -> Self {
        Self::with_samples(DEFAULT_SAMPLES)
    }

    pub fn with_samples(max_samples: usize) -> Self {
        Self {
            frame_times: VecDeque::with_capacity(max_samples),
            last_frame: Instant::now(),
            max_samples: max_samples.max(1),
            frame_count: 0,
        }
    }

    /// Mark the start of a frame and return the time since the previous one
    /// in milliseconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now - self.last_frame;
        self.last_frame = now;
        self.record(dt);
        dt.as_secs_f32() * 1000.0
    }

    /// Add one frame duration to the window.
    pub fn record(&mut self, dt: Duration) {
        self.frame_times.push_back(dt);
        if self.frame_times.len() > self.max_samples {
            self.frame_times.pop_front();
        }
        self.frame_count += 1;
    }

    /// Average frames per second over the sample window.
    pub fn fps(&self) -> f64 {
        let total = self.window_secs();
        if total <= 0.0 {
            return 0.0;
        }
        self.frame_times.len() as f64 / total
    }

    /// Average frame time in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.frame_times.is_empty() {
            return 0.0;
        }
        (self.window_secs() / self.frame_times.len() as f64) * 1000.0
    }

    /// Longest frame in the window, in milliseconds.
    pub fn worst_frame_ms(&self) -> f64 {
        self.frame_times
            .iter()
            .max()
            .map(|d| d.as_secs_f64() * 1000.0)
            .unwrap_or(0.0)
    }

    /// Number of frame samples currently stored.
    pub fn sample_count(&self) -> usize {
        self.frame_times.len()
    }

    /// Frames recorded since creation.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    fn window_secs(&self) -> f64 {
        self.frame_times.iter().map(|d| d.as_secs_f64()).sum()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
