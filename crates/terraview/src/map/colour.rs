//! Province colour overlay: one base and one stripe colour per province,
//! rebuilt from the simulation whenever the mapmode changes.
//!
//! The image is `PROVINCE_INDEX_SPLIT` pixels wide; province `i` lives at
//! column `i % SPLIT` in row pair `(i / SPLIT) * 2` (base on the even row,
//! stripe below it). Entry 0 stays transparent for "no province".

use crate::api::sim::Simulation;
use crate::api::types::ProvinceIndex;
use crate::assets::cache::AssetCache;
use crate::renderer::texture::{ImageData, TextureHandle};

/// Provinces per colour-image row.
pub const PROVINCE_INDEX_SPLIT: u32 = 256;

/// Image height needed for `province_count` provinces plus the zero entry.
pub fn colour_image_height(province_count: u32) -> u32 {
    (province_count + 1).div_ceil(PROVINCE_INDEX_SPLIT) * 2
}

pub struct ProvinceColourMap {
    image: ImageData,
    texture: TextureHandle,
}

impl ProvinceColourMap {
    /// Allocate the overlay image and texture for a fixed province count.
    pub fn new(cache: &mut AssetCache, province_count: u32) -> Self {
        let height = colour_image_height(province_count);
        let image = ImageData::new(PROVINCE_INDEX_SPLIT, height);
        let texture = cache.alloc_texture(image.size());
        Self { image, texture }
    }

    /// Re-derive every province's base/stripe colour for a mapmode. The
    /// host re-uploads the image under the existing texture handle.
    pub fn rebuild<S: Simulation>(&mut self, sim: &S, mapmode: usize) {
        let count = sim.province_count();
        for index in 1..=count {
            let colours = sim.province_colours(mapmode, ProvinceIndex(index));
            let x = index % PROVINCE_INDEX_SPLIT;
            let y = (index / PROVINCE_INDEX_SPLIT) * 2;
            self.image.set_pixel(x, y, colours.base);
            self.image.set_pixel(x, y + 1, colours.stripe);
        }
    }

    pub fn image(&self) -> &ImageData {
        &self.image
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    /// Colours currently stored for one province.
    pub fn colours_of(&self, province: ProvinceIndex) -> ([u8; 4], [u8; 4]) {
        let x = province.0 % PROVINCE_INDEX_SPLIT;
        let y = (province.0 / PROVINCE_INDEX_SPLIT) * 2;
        (self.image.pixel(x, y), self.image.pixel(x, y + 1))
    }
}
