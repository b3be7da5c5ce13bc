//! GPU resources for drawing the menu.

mod disc;
mod texture;
mod vertex;

pub use disc::*;
pub use texture::*;
pub use vertex::*;
