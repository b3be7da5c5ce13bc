pub mod errors;
pub mod types;

pub use errors::{AssetError, ConfigError, OrbitError};
pub use types::{MenuItem, PLACEHOLDER_IMAGE};

pub type Result<T> = std::result::Result<T, OrbitError>;
