//! The atlas texture: a 1×1 placeholder until the composed atlas arrives.

use crate::atlas::AtlasImage;

/// Atlas texel format. Source images are sRGB encoded.
pub const ATLAS_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Rgba8UnormSrgb;

/// Shown before the atlas resolves.
const PLACEHOLDER_PIXEL: [u8; 4] = [0, 0, 0, 255];

pub struct AtlasTexture {
    texture: wgpu::Texture,
    view: wgpu::TextureView,
}

impl AtlasTexture {
    pub fn placeholder(device: &wgpu::Device, queue: &wgpu::Queue) -> Self {
        let texture = create_texture(device, "atlas placeholder", 1, 1);
        write_level(queue, &texture, 0, 1, &PLACEHOLDER_PIXEL);
        Self::wrap(texture)
    }

    /// Upload every level of a composed atlas.
    pub fn from_atlas(device: &wgpu::Device, queue: &wgpu::Queue, atlas: &AtlasImage) -> Self {
        let side = atlas.base().width();
        let levels = atlas.mip_level_count();
        let texture = create_texture(device, "menu atlas", side, levels);
        for (level, image) in atlas.levels.iter().enumerate() {
            write_level(queue, &texture, level as u32, image.width(), image.as_raw());
        }
        Self::wrap(texture)
    }

    fn wrap(texture: wgpu::Texture) -> Self {
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
        Self { texture, view }
    }

    pub fn view(&self) -> &wgpu::TextureView {
        &self.view
    }

    pub fn side(&self) -> u32 {
        self.texture.width()
    }

    pub fn mip_level_count(&self) -> u32 {
        self.texture.mip_level_count()
    }
}

/// Linear filtering across and between mip levels, clamped at the edges.
pub fn create_atlas_sampler(device: &wgpu::Device) -> wgpu::Sampler {
    device.create_sampler(&wgpu::SamplerDescriptor {
        label: Some("atlas sampler"),
        address_mode_u: wgpu::AddressMode::ClampToEdge,
        address_mode_v: wgpu::AddressMode::ClampToEdge,
        address_mode_w: wgpu::AddressMode::ClampToEdge,
        mag_filter: wgpu::FilterMode::Linear,
        min_filter: wgpu::FilterMode::Linear,
        mipmap_filter: wgpu::FilterMode::Linear,
        ..Default::default()
    })
}

/// Side length of mip `level` for a square texture of `side` texels.
pub fn mip_side(side: u32, level: u32) -> u32 {
    (side >> level.min(31)).max(1)
}

fn create_texture(device: &wgpu::Device, label: &str, side: u32, levels: u32) -> wgpu::Texture {
    device.create_texture(&wgpu::TextureDescriptor {
        label: Some(label),
        size: wgpu::Extent3d {
            width: side,
            height: side,
            depth_or_array_layers: 1,
        },
        mip_level_count: levels.max(1),
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: ATLAS_FORMAT,
        usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
        view_formats: &[],
    })
}

fn write_level(queue: &wgpu::Queue, texture: &wgpu::Texture, level: u32, side: u32, rgba: &[u8]) {
    queue.write_texture(
        wgpu::TexelCopyTextureInfo {
            texture,
            mip_level: level,
            origin: wgpu::Origin3d::ZERO,
            aspect: wgpu::TextureAspect::All,
        },
        rgba,
        wgpu::TexelCopyBufferLayout {
            offset: 0,
            bytes_per_row: Some(4 * side),
            rows_per_image: Some(side),
        },
        wgpu::Extent3d {
            width: side,
            height: side,
            depth_or_array_layers: 1,
        },
    );
}
