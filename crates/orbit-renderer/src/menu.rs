//! The windowed menu: a `MenuScene` drawn through the disc pipeline.

use std::sync::Arc;

use orbit_common::MenuItem;
use orbit_config::OrbitConfig;
use tracing::{debug, error, info, warn};
use winit::window::Window;

use crate::atlas::{AtlasBinding, AtlasDecision, ImageLoader, PendingAtlas, UriImageLoader};
use crate::grid::{MenuCallbacks, MenuScene};
use crate::gpu::{DiscUniforms, GpuContext, RendererError};
use crate::pipeline::{AtlasTexture, DiscPipeline};
use crate::shading::ShadingParams;

/// Where atlas decoding runs.
enum RuntimeSlot {
    Shared(tokio::runtime::Handle),
    Owned(tokio::runtime::Runtime),
}

impl RuntimeSlot {
    fn handle(&self) -> tokio::runtime::Handle {
        match self {
            RuntimeSlot::Shared(handle) => handle.clone(),
            RuntimeSlot::Owned(runtime) => runtime.handle().clone(),
        }
    }
}

/// Interactive tile sphere bound to a window surface.
///
/// Drive it with [`InfiniteMenu::frame`] once per redraw and forward
/// pointer and resize events. The atlas builds in the background; frames
/// sample a placeholder until it is bound.
pub struct InfiniteMenu {
    gpu: GpuContext,
    pipeline: DiscPipeline,
    scene: MenuScene,
    shading: ShadingParams,
    items: Vec<MenuItem>,
    pending: Option<PendingAtlas>,
    binding: AtlasBinding,
    shut_down: bool,
    // Owned runtimes must outlive the pending atlas build.
    _runtime: RuntimeSlot,
}

impl InfiniteMenu {
    /// Set up the GPU, build the scene and start loading the atlas.
    ///
    /// An empty `items` list is replaced by a single placeholder item.
    /// Without a `runtime` handle a private multi-thread runtime is
    /// created; without a `loader`, images load through [`UriImageLoader`].
    pub async fn new(
        window: Arc<Window>,
        config: &OrbitConfig,
        items: Vec<MenuItem>,
        callbacks: MenuCallbacks,
        runtime: Option<tokio::runtime::Handle>,
        loader: Option<Arc<dyn ImageLoader>>,
    ) -> Result<Self, RendererError> {
        if items.is_empty() {
            warn!("menu created without items, using a placeholder");
        }
        let items = MenuItem::non_empty(items);

        let runtime = match runtime {
            Some(handle) => RuntimeSlot::Shared(handle),
            None => RuntimeSlot::Owned(
                tokio::runtime::Builder::new_multi_thread()
                    .enable_all()
                    .thread_name("orbit-atlas")
                    .build()
                    .map_err(|e| RendererError::RuntimeError(e.to_string()))?,
            ),
        };

        let gpu = GpuContext::new(window).await?;
        let scene = MenuScene::new(
            config,
            items.len(),
            gpu.size.width,
            gpu.size.height,
            callbacks,
        );
        let pipeline = DiscPipeline::new(
            &gpu.device,
            &gpu.queue,
            gpu.format(),
            scene.disc(),
            scene.instance_count(),
        );

        let loader = loader.unwrap_or_else(|| Arc::new(UriImageLoader::new()));
        let sources = items.iter().map(|item| item.image.clone()).collect();
        let pending = PendingAtlas::spawn(
            &runtime.handle(),
            loader,
            sources,
            config.atlas.cell_size,
            config.atlas.mipmaps,
            config.atlas.load_timeout(),
        );

        info!(
            items = items.len(),
            instances = scene.instance_count(),
            width = gpu.size.width,
            height = gpu.size.height,
            "menu initialized"
        );

        Ok(Self {
            gpu,
            pipeline,
            scene,
            shading: ShadingParams::from_config(&config.shading),
            items,
            pending: Some(pending),
            binding: AtlasBinding::new(),
            shut_down: false,
            _runtime: runtime,
        })
    }

    // -- input ----------------------------------------------------------------

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.scene.pointer_down(x, y);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.scene.pointer_move(x, y);
    }

    pub fn pointer_up(&mut self) {
        self.scene.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.scene.pointer_leave();
    }

    /// Resize the surface and recompute the projection.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.gpu.resize(width, height);
        if self.scene.resize(self.gpu.size.width, self.gpu.size.height) {
            debug!(width = self.gpu.size.width, height = self.gpu.size.height, "menu resized");
        }
    }

    // -- frame ----------------------------------------------------------------

    /// Advance by `delta_ms` and draw one frame.
    ///
    /// A lost or outdated surface is reconfigured and the frame skipped;
    /// any other surface error is returned.
    pub fn frame(&mut self, delta_ms: f32) -> Result<(), RendererError> {
        if self.shut_down {
            return Ok(());
        }

        self.poll_atlas();
        self.scene.advance(delta_ms);

        let queue = &self.gpu.queue;
        self.pipeline
            .update_instances(queue, self.scene.instances().as_bytes());
        self.pipeline
            .update_uniforms(queue, &DiscUniforms::from_scene(&self.scene, &self.shading));

        self.render()
    }

    fn poll_atlas(&mut self) {
        let Some(atlas) = self.pending.as_mut().and_then(PendingAtlas::poll) else {
            return;
        };
        self.pending = None;

        let max_side = self.gpu.device.limits().max_texture_dimension_2d;
        match self.binding.offer(&atlas, max_side) {
            AtlasDecision::Bind => {
                let texture = AtlasTexture::from_atlas(&self.gpu.device, &self.gpu.queue, &atlas);
                self.pipeline.set_atlas(&self.gpu.device, texture);
                let bound = self.pipeline.atlas();
                info!(
                    side = bound.side(),
                    levels = bound.mip_level_count(),
                    failed = self.binding.failed().len(),
                    "atlas bound"
                );
            }
            AtlasDecision::TooLarge => {
                error!(
                    side = atlas.base().width(),
                    max_side,
                    "atlas exceeds the texture size limit, keeping placeholder"
                );
            }
            AtlasDecision::Ignore => {}
        }
    }

    fn render(&mut self) -> Result<(), RendererError> {
        let output = match self.gpu.current_texture() {
            Ok(t) => t,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                warn!("surface lost or outdated, reconfiguring");
                self.gpu.reconfigure();
                return Ok(());
            }
            Err(e) => {
                error!("Failed to get surface texture: {e}");
                return Err(RendererError::SurfaceError(e.to_string()));
            }
        };

        let view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .gpu
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("menu frame encoder"),
            });
        self.pipeline
            .render(&mut encoder, &view, self.gpu.depth_view());

        self.gpu.queue.submit(std::iter::once(encoder.finish()));
        output.present();

        log_first_frame(self.gpu.size.width, self.gpu.size.height, self.gpu.format());
        Ok(())
    }

    // -- teardown -------------------------------------------------------------

    /// Stop the atlas build and ignore further frames. Idempotent.
    pub fn shutdown(&mut self) {
        if self.shut_down {
            return;
        }
        self.shut_down = true;
        if let Some(mut pending) = self.pending.take() {
            pending.cancel();
        }
        info!("menu shut down");
    }

    // -- accessors ------------------------------------------------------------

    /// Last reported active item index.
    pub fn active_item(&self) -> Option<usize> {
        self.scene.active_item()
    }

    pub fn active_menu_item(&self) -> Option<&MenuItem> {
        self.scene.active_item().and_then(|i| self.items.get(i))
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn is_moving(&self) -> bool {
        self.scene.is_moving()
    }

    pub fn is_atlas_ready(&self) -> bool {
        self.binding.is_bound()
    }

    /// Items whose image failed to load in the settled atlas.
    pub fn failed_items(&self) -> &[usize] {
        self.binding.failed()
    }
}

impl Drop for InfiniteMenu {
    fn drop(&mut self) {
        self.shutdown();
    }
}

/// Log the first frame presentation (once only).
fn log_first_frame(width: u32, height: u32, format: wgpu::TextureFormat) {
    static PRESENTED: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
    if !PRESENTED.swap(true, std::sync::atomic::Ordering::Relaxed) {
        info!(
            "First frame presented ({}x{}, format={:?})",
            width,
            height,
            format,
        );
    }
}
