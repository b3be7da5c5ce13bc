//! Texture atlas configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AtlasConfig {
    /// Edge length in pixels of one item cell.
    pub cell_size: u32,
    pub mipmaps: bool,
    /// Per-image load limit in milliseconds. 0 waits forever.
    pub load_timeout_ms: u64,
}

impl AtlasConfig {
    pub fn load_timeout(&self) -> Option<Duration> {
        (self.load_timeout_ms > 0).then(|| Duration::from_millis(self.load_timeout_ms))
    }
}

impl Default for AtlasConfig {
    fn default() -> Self {
        Self {
            cell_size: 512,
            mipmaps: true,
            load_timeout_ms: 15_000,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_timeout_disables_limit() {
        let mut atlas = AtlasConfig::default();
        assert_eq!(atlas.load_timeout(), Some(Duration::from_secs(15)));
        atlas.load_timeout_ms = 0;
        assert_eq!(atlas.load_timeout(), None);
    }
}
