//! Grid orchestration: camera, instance transforms, nearest-tile snapping
//! and movement reporting, all on the CPU.
//!
//! [`MenuScene`] is GPU-free so the whole per-frame derivation can be
//! driven and inspected from tests. The GPU side reads its results.

mod callbacks;
mod camera;
mod instances;
mod scene;

pub use callbacks::*;
pub use camera::*;
pub use instances::*;
pub use scene::*;
