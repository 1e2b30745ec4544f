//! CPU-side image data and the opaque handles standing in for GPU resources.
//!
//! The host engine owns the actual GPU textures; this layer only tracks
//! their ids and sizes, plus the pixel data it needs for region arithmetic
//! and colour lookups.

use glam::{UVec2, Vec2};

/// Identifies a texture resource owned by the host renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextureId(pub u32);

/// Handle to a single 2D texture: opaque id plus its size in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureHandle {
    pub id: TextureId,
    pub size: Vec2,
}

/// Handle to a layered texture (e.g. province shape pieces, terrain variants).
/// All layers share one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureArrayHandle {
    pub id: TextureId,
    pub layer_size: UVec2,
    pub layers: u32,
}

/// Axis-aligned sub-rectangle of an atlas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Region {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Region {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Region covering an entire atlas of the given size.
    pub fn full(size: Vec2) -> Self {
        Self {
            pos: Vec2::ZERO,
            size,
        }
    }

    /// Bottom-right corner.
    pub fn end(&self) -> Vec2 {
        self.pos + self.size
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.pos.x
            && point.y >= self.pos.y
            && point.x < self.pos.x + self.size.x
            && point.y < self.pos.y + self.size.y
    }
}

/// Owned RGBA8 pixel buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageData {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageData {
    /// Create a zero-filled (transparent black) image.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    /// Wrap an existing RGBA8 byte buffer. The buffer length must be
    /// exactly `width * height * 4`.
    pub fn from_pixels(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Build from `[r, g, b, a]` quads in row-major order.
    pub fn from_pixel_quads(width: u32, height: u32, quads: &[[u8; 4]]) -> Self {
        Self::from_pixels(width, height, bytemuck::cast_slice(quads).to_vec())
    }

    /// Convert a decoded bitmap into our RGBA8 layout.
    pub fn from_dynamic(image: image::DynamicImage) -> Self {
        let rgba = image.into_rgba8();
        let (width, height) = rgba.dimensions();
        Self {
            width,
            height,
            pixels: rgba.into_raw(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dims(&self) -> UVec2 {
        UVec2::new(self.width, self.height)
    }

    /// Size as float vector, matching texture handle sizes.
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Read one pixel. Coordinates must be in bounds.
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Write one pixel. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: [u8; 4]) {
        if x < self.width && y < self.height {
            let i = ((y * self.width + x) * 4) as usize;
            self.pixels[i..i + 4].copy_from_slice(&rgba);
        }
    }

    /// Copy out a sub-rectangle. Areas past the source edge stay zero-filled,
    /// so callers can use this to pad pieces to a fixed size.
    pub fn sub_image(&self, x: u32, y: u32, w: u32, h: u32) -> ImageData {
        let mut out = ImageData::new(w, h);
        let copy_w = w.min(self.width.saturating_sub(x));
        let copy_h = h.min(self.height.saturating_sub(y));
        for row in 0..copy_h {
            let src = (((y + row) * self.width + x) * 4) as usize;
            let dst = ((row * w) * 4) as usize;
            let len = (copy_w * 4) as usize;
            out.pixels[dst..dst + len].copy_from_slice(&self.pixels[src..src + len]);
        }
        out
    }

    /// Raw RGBA8 bytes, row-major.
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }

    /// Pixels viewed as `[r, g, b, a]` quads.
    pub fn as_quads(&self) -> &[[u8; 4]] {
        bytemuck::cast_slice(&self.pixels)
    }
}
