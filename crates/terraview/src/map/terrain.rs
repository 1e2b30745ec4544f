//! Terrain variant textures, stored as layers of one texture array so the
//! map shader can index them by the shape image's terrain channel.

use std::sync::Arc;

use glam::UVec2;

use crate::assets::cache::AssetCache;
use crate::error::ViewError;
use crate::renderer::texture::{ImageData, TextureArrayHandle};

#[derive(Debug)]
pub struct TerrainVariants {
    images: Vec<Arc<ImageData>>,
    texture: TextureArrayHandle,
}

impl TerrainVariants {
    /// Load terrain variants by asset name, in terrain-index order. Every
    /// image must share the first image's dimensions.
    pub fn load(cache: &mut AssetCache, names: &[String]) -> Result<Self, ViewError> {
        let mut images = Vec::with_capacity(names.len());
        for name in names {
            let image = cache
                .get_image(name)
                .ok_or_else(|| ViewError::AssetLoadFailure { name: name.clone() })?;
            images.push(image);
        }
        let dims = images
            .first()
            .map(|image| image.dims())
            .unwrap_or(UVec2::ZERO);
        for (index, image) in images.iter().enumerate() {
            if image.dims() != dims {
                return Err(ViewError::TerrainSizeMismatch {
                    index,
                    width: dims.x,
                    height: dims.y,
                    got_width: image.width(),
                    got_height: image.height(),
                });
            }
        }
        let texture = cache.alloc_texture_array(dims, images.len() as u32);
        Ok(Self { images, texture })
    }

    pub fn texture(&self) -> TextureArrayHandle {
        self.texture
    }

    pub fn variant_count(&self) -> u32 {
        self.images.len() as u32
    }

    /// Pixel data for one variant layer.
    pub fn variant(&self, index: u32) -> Option<&Arc<ImageData>> {
        self.images.get(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| (*s).to_owned()).collect()
    }

    #[test]
    fn loads_matching_variants() {
        let mut cache = AssetCache::new();
        cache.insert_image("terrain/grass.png", ImageData::new(64, 64));
        cache.insert_image("terrain/desert.png", ImageData::new(64, 64));

        let terrain =
            TerrainVariants::load(&mut cache, &names(&["terrain/grass.png", "terrain/desert.png"]))
                .unwrap();
        assert_eq!(terrain.variant_count(), 2);
        assert_eq!(terrain.texture().layers, 2);
        assert_eq!(terrain.texture().layer_size, UVec2::new(64, 64));
        assert!(terrain.variant(1).is_some());
        assert!(terrain.variant(2).is_none());
    }

    #[test]
    fn missing_variant_fails() {
        let mut cache = AssetCache::new();
        let err = TerrainVariants::load(&mut cache, &names(&["terrain/void.png"])).unwrap_err();
        assert!(matches!(err, ViewError::AssetLoadFailure { .. }));
    }

    #[test]
    fn size_mismatch_fails_with_offender() {
        let mut cache = AssetCache::new();
        cache.insert_image("a.png", ImageData::new(64, 64));
        cache.insert_image("b.png", ImageData::new(32, 64));

        let err = TerrainVariants::load(&mut cache, &names(&["a.png", "b.png"])).unwrap_err();
        match err {
            ViewError::TerrainSizeMismatch {
                index, got_width, ..
            } => {
                assert_eq!(index, 1);
                assert_eq!(got_width, 32);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
