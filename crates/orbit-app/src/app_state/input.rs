//! Mouse and single-touch input mapped to menu pointer actions.

use winit::event::{ElementState, MouseButton, TouchPhase};

use super::types::PointerAction;

/// Tracks cursor position and the active touch so window events can be
/// turned into pointer actions. Only the first touch drives the menu.
#[derive(Debug, Default)]
pub struct PointerRouter {
    cursor: Option<(f32, f32)>,
    active_touch: Option<u64>,
}

impl PointerRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor_moved(&mut self, x: f64, y: f64) -> Option<PointerAction> {
        let (x, y) = (x as f32, y as f32);
        self.cursor = Some((x, y));
        if self.active_touch.is_some() {
            return None;
        }
        Some(PointerAction::Move { x, y })
    }

    pub fn mouse_input(&mut self, state: ElementState, button: MouseButton) -> Option<PointerAction> {
        if button != MouseButton::Left || self.active_touch.is_some() {
            return None;
        }
        match state {
            ElementState::Pressed => {
                let (x, y) = self.cursor?;
                Some(PointerAction::Down { x, y })
            }
            ElementState::Released => Some(PointerAction::Up),
        }
    }

    pub fn cursor_left(&mut self) -> Option<PointerAction> {
        self.cursor = None;
        if self.active_touch.is_some() {
            return None;
        }
        Some(PointerAction::Leave)
    }

    pub fn touch(&mut self, id: u64, phase: TouchPhase, x: f64, y: f64) -> Option<PointerAction> {
        let (x, y) = (x as f32, y as f32);
        match phase {
            TouchPhase::Started if self.active_touch.is_none() => {
                self.active_touch = Some(id);
                Some(PointerAction::Down { x, y })
            }
            TouchPhase::Moved if self.active_touch == Some(id) => {
                Some(PointerAction::Move { x, y })
            }
            TouchPhase::Ended | TouchPhase::Cancelled if self.active_touch == Some(id) => {
                self.active_touch = None;
                Some(PointerAction::Up)
            }
            _ => None,
        }
    }
}
