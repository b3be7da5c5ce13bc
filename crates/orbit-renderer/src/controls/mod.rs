//! Arcball rotation controller: pointer drags to a smoothed orientation.

mod arcball;
mod types;

pub use arcball::*;
pub use types::*;
