//! `ApplicationHandler` implementation for the winit event loop.

use winit::application::ApplicationHandler;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::keyboard::{Key, NamedKey};
use winit::window::WindowId;

use super::core::OrbitApp;
use super::types::PointerAction;

impl ApplicationHandler for OrbitApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        if let Err(e) = self.initialize_window(event_loop) {
            self.fail(e);
            event_loop.exit();
            return;
        }

        // The menu animates continuously.
        event_loop.set_control_flow(ControlFlow::Poll);
        self.frame_timer.tick();
        self.request_redraw();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                tracing::info!("Window close requested");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key: Key::Named(NamedKey::Escape),
                        state: ElementState::Pressed,
                        ..
                    },
                ..
            } => {
                tracing::info!("Escape pressed, exiting");
                self.shutdown();
                event_loop.exit();
            }

            WindowEvent::Resized(size) => {
                if size.width > 0 && size.height > 0 {
                    if let Some(ref mut menu) = self.menu {
                        menu.resize(size.width, size.height);
                    }
                }
            }

            WindowEvent::CursorMoved { position, .. } => {
                let action = self.pointer.cursor_moved(position.x, position.y);
                self.apply_pointer(action);
            }

            WindowEvent::MouseInput { state, button, .. } => {
                let action = self.pointer.mouse_input(state, button);
                self.apply_pointer(action);
            }

            WindowEvent::CursorLeft { .. } => {
                let action = self.pointer.cursor_left();
                self.apply_pointer(action);
            }

            WindowEvent::Touch(touch) => {
                let action =
                    self.pointer
                        .touch(touch.id, touch.phase, touch.location.x, touch.location.y);
                self.apply_pointer(action);
            }

            WindowEvent::RedrawRequested => {
                if self.should_exit {
                    event_loop.exit();
                    return;
                }
                self.render_frame();
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.should_exit {
            event_loop.exit();
            return;
        }
        self.request_redraw();
    }
}

impl OrbitApp {
    fn apply_pointer(&mut self, action: Option<PointerAction>) {
        let (Some(action), Some(menu)) = (action, self.menu.as_mut()) else {
            return;
        };
        match action {
            PointerAction::Down { x, y } => menu.pointer_down(x, y),
            PointerAction::Move { x, y } => menu.pointer_move(x, y),
            PointerAction::Up => menu.pointer_up(),
            PointerAction::Leave => menu.pointer_leave(),
        }
    }
}
