//! Window creation and menu initialization.

use std::sync::Arc;

use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use orbit_common::OrbitError;
use orbit_renderer::{InfiniteMenu, MenuCallbacks};

use super::core::OrbitApp;
use super::types::MenuEvent;

impl OrbitApp {
    /// Create the window and initialize the menu renderer.
    pub(super) fn initialize_window(
        &mut self,
        event_loop: &ActiveEventLoop,
    ) -> orbit_common::Result<()> {
        let window_config = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(window_config.title.clone())
            .with_transparent(true)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(window_config.width),
                f64::from(window_config.height),
            ));

        let window = event_loop
            .create_window(attrs)
            .map(Arc::new)
            .map_err(|e| OrbitError::Other(format!("failed to create window: {e}")))?;

        let active_tx = self.menu_tx.clone();
        let movement_tx = self.menu_tx.clone();
        let callbacks = MenuCallbacks::new()
            .on_active_item(move |index| {
                let _ = active_tx.send(MenuEvent::ActiveItem(index));
            })
            .on_movement(move |moving| {
                let _ = movement_tx.send(MenuEvent::Movement(moving));
            });

        let runtime = self.tokio_runtime.as_ref().map(|rt| rt.handle().clone());
        let menu = pollster::block_on(InfiniteMenu::new(
            window.clone(),
            &self.config,
            self.config.items.clone(),
            callbacks,
            runtime,
            None,
        ));

        let menu = menu.map_err(|e| OrbitError::Renderer(e.to_string()))?;
        self.menu = Some(menu);

        self.window = Some(window);
        tracing::info!("Window created and renderer initialized");
        Ok(())
    }

    pub(super) fn request_redraw(&self) {
        if let Some(ref window) = self.window {
            window.request_redraw();
        }
    }
}
