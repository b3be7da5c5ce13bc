//! Host notifications raised from inside a frame tick.

/// Optional host hooks.
///
/// Both are called from [`MenuScene::advance`](super::MenuScene::advance)
/// only, never while the scene is borrowed elsewhere.
#[derive(Default)]
pub struct MenuCallbacks {
    on_active_item: Option<Box<dyn FnMut(usize)>>,
    on_movement: Option<Box<dyn FnMut(bool)>>,
}

impl MenuCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Called with the new item index whenever the snapped tile changes.
    pub fn on_active_item(mut self, f: impl FnMut(usize) + 'static) -> Self {
        self.on_active_item = Some(Box::new(f));
        self
    }

    /// Called on every transition between moving and at rest.
    pub fn on_movement(mut self, f: impl FnMut(bool) + 'static) -> Self {
        self.on_movement = Some(Box::new(f));
        self
    }

    pub(crate) fn active_item_changed(&mut self, index: usize) {
        if let Some(f) = self.on_active_item.as_mut() {
            f(index);
        }
    }

    pub(crate) fn movement_changed(&mut self, moving: bool) {
        if let Some(f) = self.on_movement.as_mut() {
            f(moving);
        }
    }
}

impl std::fmt::Debug for MenuCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MenuCallbacks")
            .field("on_active_item", &self.on_active_item.is_some())
            .field("on_movement", &self.on_movement.is_some())
            .finish()
    }
}
