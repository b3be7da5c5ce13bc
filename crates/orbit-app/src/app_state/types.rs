//! Notifications passed from menu callbacks back to the app.

/// Emitted by the menu callbacks during a frame, drained right after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    ActiveItem(usize),
    Movement(bool),
}

/// A pointer input after mapping from window events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerAction {
    Down { x: f32, y: f32 },
    Move { x: f32, y: f32 },
    Up,
    Leave,
}
