//! Graceful shutdown: stop the menu, then the runtime.

use std::time::Duration;

use super::core::OrbitApp;

impl OrbitApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// The menu goes first so its pending atlas is cancelled before the
    /// runtime that runs it is shut down.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(mut menu) = self.menu.take() {
            menu.shutdown();
        }

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.window = None;
        self.should_exit = true;

        tracing::info!("Graceful shutdown complete");
    }
}
