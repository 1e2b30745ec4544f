//! Province shape texture: the map image encoding which province owns each
//! pixel.
//!
//! Encoding is RGB8: R | G << 8 is the province index, B selects the
//! terrain variant. To support a wider range of GPUs the image is split
//! into a grid of pieces, none exceeding `MAX_PIECE_DIM` on either axis,
//! stored as layers of one texture array. The combined image is retained
//! for CPU-side pixel lookups.

use std::sync::Arc;

use glam::{IVec2, UVec2, Vec2};

use crate::api::types::ProvinceIndex;
use crate::assets::cache::AssetCache;
use crate::renderer::texture::{ImageData, TextureArrayHandle};

/// Largest per-piece dimension the weakest supported GPUs accept.
pub const MAX_PIECE_DIM: u32 = 16383;

/// Number of (horizontal, vertical) pieces needed for an image of `dims`.
pub fn subdivisions_for(dims: UVec2) -> IVec2 {
    IVec2::new(
        dims.x.div_ceil(MAX_PIECE_DIM) as i32,
        dims.y.div_ceil(MAX_PIECE_DIM) as i32,
    )
}

/// Decode the province index encoded at one pixel.
pub fn province_index_at(image: &ImageData, x: u32, y: u32) -> ProvinceIndex {
    let [r, g, _, _] = image.pixel(x, y);
    ProvinceIndex(r as u32 | (g as u32) << 8)
}

/// Terrain variant encoded at one pixel.
pub fn terrain_variant_at(image: &ImageData, x: u32, y: u32) -> u8 {
    image.pixel(x, y)[2]
}

/// The loaded province shape image, its subdivision grid, and the texture
/// array holding its pieces.
pub struct ProvinceShape {
    image: Arc<ImageData>,
    subdivisions: IVec2,
    piece_size: UVec2,
    texture: TextureArrayHandle,
}

impl ProvinceShape {
    /// Split a shape image into equally-sized pieces (right/bottom pieces
    /// zero-padded) and allocate the backing texture array.
    pub fn load(cache: &mut AssetCache, image: Arc<ImageData>) -> Self {
        let dims = image.dims();
        let subdivisions = subdivisions_for(dims);
        let piece_size = UVec2::new(
            dims.x.div_ceil(subdivisions.x as u32),
            dims.y.div_ceil(subdivisions.y as u32),
        );
        let layers = (subdivisions.x * subdivisions.y) as u32;
        let texture = cache.alloc_texture_array(piece_size, layers);
        Self {
            image,
            subdivisions,
            piece_size,
            texture,
        }
    }

    pub fn image(&self) -> &Arc<ImageData> {
        &self.image
    }

    pub fn subdivisions(&self) -> IVec2 {
        self.subdivisions
    }

    pub fn texture(&self) -> TextureArrayHandle {
        self.texture
    }

    pub fn dims(&self) -> UVec2 {
        self.image.dims()
    }

    /// Extract the piece for one array layer, zero-padded to the shared
    /// piece size. Layers are in row-major subdivision order.
    pub fn piece(&self, layer: u32) -> ImageData {
        let cols = self.subdivisions.x as u32;
        let px = (layer % cols) * self.piece_size.x;
        let py = (layer / cols) * self.piece_size.y;
        self.image.sub_image(px, py, self.piece_size.x, self.piece_size.y)
    }

    /// Province under a UV coordinate in `[0, 1]^2`. Out-of-range UVs map
    /// to no province.
    pub fn province_index_at_uv(&self, uv: Vec2) -> ProvinceIndex {
        let dims = self.image.dims();
        if uv.x < 0.0 || uv.y < 0.0 || uv.x >= 1.0 || uv.y >= 1.0 {
            return ProvinceIndex::NONE;
        }
        let x = ((uv.x * dims.x as f32) as u32).min(dims.x - 1);
        let y = ((uv.y * dims.y as f32) as u32).min(dims.y - 1);
        province_index_at(&self.image, x, y)
    }
}
