pub mod atlas;
pub mod clock;
pub mod controls;
pub mod geometry;
pub mod gpu;
pub mod grid;
pub mod menu;
pub mod pipeline;
pub mod shading;

pub use atlas::{AtlasImage, AtlasLayout, ImageLoader, PendingAtlas, UriImageLoader};
pub use clock::FrameTimer;
pub use controls::{ArcballControl, ArcballParams};
pub use gpu::{GpuContext, RendererError};
pub use grid::{MenuCallbacks, MenuScene};
pub use menu::InfiniteMenu;
pub use shading::ShadingParams;
