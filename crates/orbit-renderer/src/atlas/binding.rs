//! Placeholder to atlas swap bookkeeping.

use tracing::debug;

use super::builder::AtlasImage;

/// What to do with an atlas offered to [`AtlasBinding::offer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AtlasDecision {
    /// Upload it and replace the placeholder.
    Bind,
    /// Larger than the device allows; keep the placeholder.
    TooLarge,
    /// An atlas was already settled; drop this one.
    Ignore,
}

/// Tracks whether the placeholder has been replaced.
///
/// The first atlas offered settles the binding either way. Anything
/// offered afterwards is ignored, so the placeholder is swapped at most
/// once.
#[derive(Debug, Default)]
pub struct AtlasBinding {
    settled: bool,
    bound: bool,
    failed: Vec<usize>,
}

impl AtlasBinding {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, atlas: &AtlasImage, max_side: u32) -> AtlasDecision {
        if self.settled {
            debug!("atlas already settled, ignoring");
            return AtlasDecision::Ignore;
        }
        self.settled = true;
        self.failed = atlas.failed.clone();

        if atlas.base().width() > max_side {
            return AtlasDecision::TooLarge;
        }
        self.bound = true;
        AtlasDecision::Bind
    }

    /// True once a composed atlas replaced the placeholder.
    pub fn is_bound(&self) -> bool {
        self.bound
    }

    /// Items whose image failed in the settled atlas.
    pub fn failed(&self) -> &[usize] {
        &self.failed
    }
}
