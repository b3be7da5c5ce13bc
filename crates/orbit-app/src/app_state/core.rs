//! OrbitApp struct definition and constructor.

use std::sync::mpsc;
use std::sync::Arc;
use std::time::Instant;

use winit::window::Window;

use orbit_common::OrbitError;
use orbit_config::OrbitConfig;
use orbit_renderer::{FrameTimer, InfiniteMenu};

use super::input::PointerRouter;
use super::types::MenuEvent;

/// Top-level application state.
pub struct OrbitApp {
    pub(super) config: OrbitConfig,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) menu: Option<InfiniteMenu>,

    // Atlas decoding runs here
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,

    // Input mapping
    pub(super) pointer: PointerRouter,

    // Menu callbacks push into this channel
    pub(super) menu_tx: mpsc::Sender<MenuEvent>,
    pub(super) menu_rx: mpsc::Receiver<MenuEvent>,

    // Frame pacing and statistics
    pub(super) frame_timer: FrameTimer,
    pub(super) last_stats: Instant,

    // Whether the app should exit, and why if it failed
    pub(super) should_exit: bool,
    pub(super) fatal_error: Option<OrbitError>,
}

impl OrbitApp {
    pub fn new(config: OrbitConfig) -> orbit_common::Result<Self> {
        let tokio_runtime = tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("orbit-worker")
            .build()?;
        let (menu_tx, menu_rx) = mpsc::channel();

        Ok(Self {
            config,
            window: None,
            menu: None,
            tokio_runtime: Some(tokio_runtime),
            pointer: PointerRouter::new(),
            menu_tx,
            menu_rx,
            frame_timer: FrameTimer::new(),
            last_stats: Instant::now(),
            should_exit: false,
            fatal_error: None,
        })
    }

    /// The error that ended the event loop, if any.
    pub fn take_error(&mut self) -> Option<OrbitError> {
        self.fatal_error.take()
    }

    /// Record a fatal error and ask the loop to stop.
    pub(super) fn fail(&mut self, error: OrbitError) {
        self.fatal_error = Some(error);
        self.should_exit = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_app_has_no_error() {
        let mut app = OrbitApp::new(OrbitConfig::default()).unwrap();
        assert!(app.take_error().is_none());
        assert!(!app.should_exit);
    }

    #[test]
    fn failure_is_reported_once_and_stops_the_loop() {
        let mut app = OrbitApp::new(OrbitConfig::default()).unwrap();
        app.fail(OrbitError::Renderer("surface lost for good".into()));

        assert!(app.should_exit);
        let err = app.take_error().unwrap();
        assert!(matches!(err, OrbitError::Renderer(_)));
        assert!(err.to_string().contains("surface lost for good"));
        assert!(app.take_error().is_none());
    }

    #[test]
    fn frame_without_menu_is_not_an_error() {
        let mut app = OrbitApp::new(OrbitConfig::default()).unwrap();
        app.render_frame();
        assert!(app.take_error().is_none());
        assert!(!app.should_exit);
    }
}
