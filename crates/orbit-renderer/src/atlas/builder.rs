//! Concurrent atlas composition and the pending-atlas handoff.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{mpsc, Arc};
use std::time::Duration;

use image::imageops::{self, FilterType};
use image::RgbaImage;
use orbit_common::AssetError;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use super::layout::AtlasLayout;
use super::loader::ImageLoader;

/// A fully composed atlas, ready for upload.
#[derive(Debug, Clone)]
pub struct AtlasImage {
    pub layout: AtlasLayout,
    /// Level 0 first, each following level half the previous size.
    pub levels: Vec<RgbaImage>,
    /// Item indices whose image could not be produced.
    pub failed: Vec<usize>,
}

impl AtlasImage {
    pub fn base(&self) -> &RgbaImage {
        &self.levels[0]
    }

    pub fn mip_level_count(&self) -> u32 {
        self.levels.len() as u32
    }
}

/// Load every source, wait for all of them, then compose the atlas.
///
/// Each image is fetched and decoded independently; one failure never
/// cancels the others and only blanks its own cell. A load that outlives
/// `load_timeout` counts as failed.
pub async fn build_atlas(
    loader: Arc<dyn ImageLoader>,
    sources: Vec<String>,
    cell_size: u32,
    mipmaps: bool,
    load_timeout: Option<Duration>,
) -> AtlasImage {
    let layout = AtlasLayout::new(sources.len(), cell_size);
    let cell = layout.cell_size;

    let mut tasks = JoinSet::new();
    for (index, source) in sources.iter().cloned().enumerate() {
        let loader = Arc::clone(&loader);
        tasks.spawn(async move {
            let result = load_cell(loader.as_ref(), &source, cell, load_timeout).await;
            (index, source, result)
        });
    }

    let side = layout.side_px();
    let mut atlas = RgbaImage::new(side, side);
    let mut loaded = vec![false; sources.len()];

    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok((index, source, Ok(tile))) => {
                let (x, y) = layout.cell_origin_px(index as u32);
                imageops::replace(&mut atlas, &tile, x as i64, y as i64);
                loaded[index] = true;
                debug!(index, %source, "atlas cell loaded");
            }
            Ok((index, _, Err(e))) => {
                warn!(index, "atlas cell left blank: {e}");
            }
            Err(e) => {
                warn!("atlas task failed: {e}");
            }
        }
    }

    let failed: Vec<usize> = loaded
        .iter()
        .enumerate()
        .filter(|(_, ok)| !**ok)
        .map(|(i, _)| i)
        .collect();

    let levels = if mipmaps {
        build_mip_chain(atlas)
    } else {
        vec![atlas]
    };

    info!(
        items = layout.item_count,
        cells_per_row = layout.cells_per_row,
        unused = layout.unused_cells(),
        side,
        levels = levels.len(),
        failed = failed.len(),
        "atlas composed"
    );

    AtlasImage {
        layout,
        levels,
        failed,
    }
}

async fn load_cell(
    loader: &dyn ImageLoader,
    source: &str,
    cell: u32,
    load_timeout: Option<Duration>,
) -> Result<RgbaImage, AssetError> {
    let bytes = match load_timeout {
        Some(limit) => tokio::time::timeout(limit, loader.load(source))
            .await
            .map_err(|_| AssetError::Timeout {
                source_uri: source.to_string(),
                after_ms: limit.as_millis() as u64,
            })??,
        None => loader.load(source).await?,
    };
    let source_uri = source.to_string();

    tokio::task::spawn_blocking(move || decode_to_cell(&bytes, &source_uri, cell))
        .await
        .map_err(|e| AssetError::Decode {
            source_uri: source.to_string(),
            reason: e.to_string(),
        })?
}

/// Decode `bytes` and stretch the image to fill a `cell`×`cell` square.
pub fn decode_to_cell(bytes: &[u8], source_uri: &str, cell: u32) -> Result<RgbaImage, AssetError> {
    let decoded = image::load_from_memory(bytes).map_err(|e| AssetError::Decode {
        source_uri: source_uri.to_string(),
        reason: e.to_string(),
    })?;
    Ok(imageops::resize(&decoded.to_rgba8(), cell, cell, FilterType::Triangle))
}

/// Successive half-size levels down to 1×1.
pub fn build_mip_chain(base: RgbaImage) -> Vec<RgbaImage> {
    let mut levels = vec![base];
    loop {
        let Some(last) = levels.last() else { break };
        let (w, h) = last.dimensions();
        if w <= 1 && h <= 1 {
            break;
        }
        let next = imageops::resize(last, (w / 2).max(1), (h / 2).max(1), FilterType::Triangle);
        levels.push(next);
    }
    levels
}

// ---------------------------------------------------------------------------
// PendingAtlas
// ---------------------------------------------------------------------------

/// An atlas build running on a tokio runtime.
///
/// The result is handed over through a channel and picked up with
/// [`PendingAtlas::poll`] from the frame loop. Once cancelled (or dropped)
/// a late result is discarded instead of sent.
pub struct PendingAtlas {
    receiver: mpsc::Receiver<AtlasImage>,
    alive: Arc<AtomicBool>,
    task: Option<tokio::task::JoinHandle<()>>,
}

impl PendingAtlas {
    pub fn spawn(
        runtime: &tokio::runtime::Handle,
        loader: Arc<dyn ImageLoader>,
        sources: Vec<String>,
        cell_size: u32,
        mipmaps: bool,
        load_timeout: Option<Duration>,
    ) -> Self {
        let (sender, receiver) = mpsc::channel();
        let alive = Arc::new(AtomicBool::new(true));
        let task_alive = Arc::clone(&alive);

        let task = runtime.spawn(async move {
            let atlas = build_atlas(loader, sources, cell_size, mipmaps, load_timeout).await;
            if !task_alive.load(Ordering::Acquire) {
                debug!("atlas finished after teardown, discarding");
                return;
            }
            if sender.send(atlas).is_err() {
                debug!("atlas receiver gone, discarding");
            }
        });

        Self {
            receiver,
            alive,
            task: Some(task),
        }
    }

    /// Take the finished atlas, if it has arrived. Returns `Some` at most once.
    pub fn poll(&mut self) -> Option<AtlasImage> {
        if !self.is_alive() {
            return None;
        }
        match self.receiver.try_recv() {
            Ok(atlas) => {
                self.task = None;
                Some(atlas)
            }
            Err(_) => None,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.alive.load(Ordering::Acquire)
    }

    /// Stop the build; any result produced afterwards is dropped.
    pub fn cancel(&mut self) {
        self.alive.store(false, Ordering::Release);
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for PendingAtlas {
    fn drop(&mut self) {
        self.cancel();
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use image::{ImageFormat, Rgba};
    use std::collections::HashMap;
    use std::io::Cursor;

    fn png(color: [u8; 4], w: u32, h: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(w, h, Rgba(color));
        let mut out = Vec::new();
        img.write_to(&mut Cursor::new(&mut out), ImageFormat::Png)
            .unwrap();
        out
    }

    struct MapLoader(HashMap<String, Vec<u8>>);

    #[async_trait]
    impl ImageLoader for MapLoader {
        async fn load(&self, source: &str) -> Result<Vec<u8>, AssetError> {
            self.0.get(source).cloned().ok_or_else(|| AssetError::Fetch {
                source_uri: source.to_string(),
                reason: "not found".into(),
            })
        }
    }

    /// Blocks until the gate opens.
    struct GatedLoader(Arc<tokio::sync::Notify>, Vec<u8>);

    #[async_trait]
    impl ImageLoader for GatedLoader {
        async fn load(&self, _source: &str) -> Result<Vec<u8>, AssetError> {
            self.0.notified().await;
            Ok(self.1.clone())
        }
    }

    fn loader() -> Arc<dyn ImageLoader> {
        let mut map = HashMap::new();
        map.insert("red".to_string(), png([255, 0, 0, 255], 8, 4));
        map.insert("blue".to_string(), png([0, 0, 255, 255], 3, 9));
        map.insert("garbage".to_string(), vec![0, 1, 2, 3]);
        Arc::new(MapLoader(map))
    }

    fn sources(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn stretches_images_into_cells() {
        let atlas = build_atlas(loader(), sources(&["red", "blue"]), 16, false, None).await;
        assert_eq!(atlas.layout.cells_per_row, 2);
        assert_eq!(atlas.base().dimensions(), (32, 32));
        assert!(atlas.failed.is_empty());

        assert_eq!(atlas.base().get_pixel(0, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(atlas.base().get_pixel(15, 15), &Rgba([255, 0, 0, 255]));
        assert_eq!(atlas.base().get_pixel(16, 0), &Rgba([0, 0, 255, 255]));
        assert_eq!(atlas.base().get_pixel(31, 15), &Rgba([0, 0, 255, 255]));
        // Unused trailing cells stay blank.
        assert_eq!(atlas.base().get_pixel(8, 24), &Rgba([0, 0, 0, 0]));
    }

    #[tokio::test]
    async fn failed_images_leave_blank_cells() {
        let atlas = build_atlas(
            loader(),
            sources(&["red", "missing", "blue", "garbage"]),
            8,
            false,
            None,
        )
        .await;

        assert_eq!(atlas.failed, vec![1, 3]);
        assert_eq!(atlas.base().get_pixel(4, 4), &Rgba([255, 0, 0, 255]));
        assert_eq!(atlas.base().get_pixel(12, 4), &Rgba([0, 0, 0, 0]));
        assert_eq!(atlas.base().get_pixel(4, 12), &Rgba([0, 0, 255, 255]));
        assert_eq!(atlas.base().get_pixel(12, 12), &Rgba([0, 0, 0, 0]));
    }

    #[tokio::test]
    async fn all_failures_still_produce_an_atlas() {
        let atlas = build_atlas(loader(), sources(&["nope"]), 4, true, None).await;
        assert_eq!(atlas.failed, vec![0]);
        assert_eq!(atlas.base().dimensions(), (4, 4));
    }

    /// Serves `slow` only after the gate opens, everything else at once.
    struct StallingLoader {
        gate: Arc<tokio::sync::Notify>,
        bytes: Vec<u8>,
    }

    #[async_trait]
    impl ImageLoader for StallingLoader {
        async fn load(&self, source: &str) -> Result<Vec<u8>, AssetError> {
            if source == "slow" {
                self.gate.notified().await;
            }
            Ok(self.bytes.clone())
        }
    }

    #[tokio::test]
    async fn stalled_load_times_out_into_blank_cell() {
        let loader: Arc<dyn ImageLoader> = Arc::new(StallingLoader {
            gate: Arc::new(tokio::sync::Notify::new()),
            bytes: png([0, 255, 0, 255], 2, 2),
        });
        let atlas = build_atlas(
            loader,
            sources(&["fast", "slow"]),
            4,
            false,
            Some(Duration::from_millis(50)),
        )
        .await;

        assert_eq!(atlas.failed, vec![1]);
        assert_eq!(atlas.base().get_pixel(1, 1), &Rgba([0, 255, 0, 255]));
        assert_eq!(atlas.base().get_pixel(5, 1), &Rgba([0, 0, 0, 0]));
    }

    #[tokio::test]
    async fn timeout_reports_source_and_limit() {
        let loader = StallingLoader {
            gate: Arc::new(tokio::sync::Notify::new()),
            bytes: Vec::new(),
        };
        let err = load_cell(&loader, "slow", 4, Some(Duration::from_millis(20)))
            .await
            .unwrap_err();
        match err {
            AssetError::Timeout {
                source_uri,
                after_ms,
            } => {
                assert_eq!(source_uri, "slow");
                assert_eq!(after_ms, 20);
            }
            other => panic!("expected timeout, got {other}"),
        }
    }

    #[test]
    fn mip_chain_halves_to_one() {
        let levels = build_mip_chain(RgbaImage::new(64, 64));
        let sizes: Vec<u32> = levels.iter().map(|l| l.width()).collect();
        assert_eq!(sizes, vec![64, 32, 16, 8, 4, 2, 1]);
    }

    #[test]
    fn mip_chain_non_power_of_two() {
        let levels = build_mip_chain(RgbaImage::new(48, 48));
        assert_eq!(levels.last().unwrap().dimensions(), (1, 1));
        assert_eq!(levels[1].dimensions(), (24, 24));
    }

    #[test]
    fn decode_rejects_garbage() {
        let err = decode_to_cell(&[9, 9, 9], "x.png", 4).unwrap_err();
        assert!(matches!(err, AssetError::Decode { .. }));
    }

    #[test]
    fn pending_atlas_delivers_once() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let mut pending =
            PendingAtlas::spawn(runtime.handle(), loader(), sources(&["red"]), 4, true, None);

        let mut delivered = None;
        for _ in 0..500 {
            if let Some(atlas) = pending.poll() {
                delivered = Some(atlas);
                break;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        let atlas = delivered.expect("atlas never arrived");
        assert_eq!(atlas.mip_level_count(), 3);
        assert!(pending.poll().is_none());
    }

    #[test]
    fn cancelled_atlas_is_discarded() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let gate = Arc::new(tokio::sync::Notify::new());
        let loader: Arc<dyn ImageLoader> =
            Arc::new(GatedLoader(Arc::clone(&gate), png([1, 2, 3, 255], 2, 2)));

        let mut pending =
            PendingAtlas::spawn(runtime.handle(), loader, sources(&["a"]), 4, false, None);
        assert!(pending.poll().is_none());

        pending.cancel();
        gate.notify_waiters();
        std::thread::sleep(Duration::from_millis(50));

        assert!(!pending.is_alive());
        assert!(pending.poll().is_none());
    }
}
