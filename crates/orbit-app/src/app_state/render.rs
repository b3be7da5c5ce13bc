//! Per-frame driving: advance the menu, report notifications and stats.

use std::time::{Duration, Instant};

use orbit_common::{MenuItem, OrbitError};

use super::core::OrbitApp;
use super::types::MenuEvent;

impl OrbitApp {
    /// Advance and draw one frame. A render failure ends the app.
    pub(super) fn render_frame(&mut self) {
        let delta_ms = self.frame_timer.tick();

        let result = match self.menu.as_mut() {
            Some(menu) => menu.frame(delta_ms),
            None => Ok(()),
        };
        if let Err(e) = result {
            self.fail(OrbitError::Renderer(e.to_string()));
        }

        self.drain_menu_events();
        self.report_stats();
    }

    fn drain_menu_events(&mut self) {
        while let Ok(event) = self.menu_rx.try_recv() {
            match event {
                MenuEvent::ActiveItem(index) => {
                    let item = self.menu.as_ref().and_then(|m| m.items().get(index));
                    match item {
                        Some(item) => {
                            tracing::info!(index, "Active item: {}", describe_item(item))
                        }
                        None => tracing::warn!(index, "Active item out of range"),
                    }
                }
                MenuEvent::Movement(moving) => {
                    tracing::debug!(moving, "Menu movement changed");
                }
            }
        }
    }

    fn report_stats(&mut self) {
        let interval = self.config.logging.stats_interval_secs;
        if interval == 0 {
            return;
        }
        let now = Instant::now();
        if now.duration_since(self.last_stats) < Duration::from_secs(u64::from(interval)) {
            return;
        }
        self.last_stats = now;
        let (atlas_ready, failed, active) = match self.menu.as_ref() {
            Some(menu) => (
                menu.is_atlas_ready(),
                menu.failed_items().len(),
                menu.active_menu_item().map(describe_item),
            ),
            None => (false, 0, None),
        };
        tracing::debug!(
            fps = self.frame_timer.fps(),
            frame_ms = self.frame_timer.frame_time_ms(),
            worst_ms = self.frame_timer.worst_frame_ms(),
            frames = self.frame_timer.frame_count(),
            atlas_ready,
            failed,
            active = active.as_deref().unwrap_or("-"),
            "Frame stats"
        );
    }
}

/// Human-readable line for an item: title plus its date, if any.
pub(super) fn describe_item(item: &MenuItem) -> String {
    let title = if item.title.is_empty() {
        "(untitled)"
    } else {
        item.title.as_str()
    };
    match item.date {
        Some(date) => format!("{title} ({})", date.format("%B %-d, %Y")),
        None => title.to_string(),
    }
}
