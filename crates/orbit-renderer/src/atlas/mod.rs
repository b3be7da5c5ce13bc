//! Texture atlas: item images composed into one square grid texture.
//!
//! Images load concurrently and the atlas is only produced once every
//! image has either arrived or failed. Failed images leave a blank cell.

mod binding;
mod builder;
mod layout;
mod loader;

pub use binding::*;
pub use builder::*;
pub use layout::*;
pub use loader::*;
