//! Geometry kernel: indexed triangle meshes for tile anchors and tile shape.
//!
//! Construction is pure and deterministic. Meshes are built once at
//! startup and only read afterwards.

mod mesh;
mod shapes;
mod transform;

pub use mesh::*;
pub use shapes::*;
pub use transform::*;
