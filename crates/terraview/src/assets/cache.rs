//! Asset cache: file-path-keyed images and the texture handles derived
//! from them.
//!
//! Images are decoded once and shared; texture handles stand in for the
//! GPU uploads the host performs, so one name always maps to one handle.
//! The cache is also the allocator for standalone and layered textures
//! (colour overlay, shape pieces, terrain variants).

use std::collections::HashMap;
use std::sync::Arc;

use glam::{UVec2, Vec2};

use crate::error::ViewError;
use crate::renderer::texture::{ImageData, TextureArrayHandle, TextureHandle, TextureId};

pub struct AssetCache {
    images: HashMap<String, Arc<ImageData>>,
    textures: HashMap<String, TextureHandle>,
    next_id: u32,
}

impl AssetCache {
    pub fn new() -> Self {
        Self {
            images: HashMap::new(),
            textures: HashMap::new(),
            next_id: 1,
        }
    }

    /// Register an already-decoded image under a name.
    pub fn insert_image(&mut self, name: &str, image: ImageData) {
        self.images.insert(name.to_owned(), Arc::new(image));
    }

    /// Decode and register a bitmap from raw file bytes.
    pub fn load_from_bytes(&mut self, name: &str, bytes: &[u8]) -> Result<(), ViewError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|source| ViewError::ImageDecode {
                name: name.to_owned(),
                source,
            })?;
        self.insert_image(name, ImageData::from_dynamic(decoded));
        Ok(())
    }

    /// Cached image for this name, if one has been registered.
    pub fn get_image(&self, name: &str) -> Option<Arc<ImageData>> {
        self.images.get(name).cloned()
    }

    /// Texture handle for this name, allocated on first request from the
    /// cached image. Returns None if the image was never registered.
    pub fn get_texture(&mut self, name: &str) -> Option<TextureHandle> {
        if let Some(handle) = self.textures.get(name) {
            return Some(*handle);
        }
        let size = self.images.get(name)?.size();
        let handle = TextureHandle {
            id: self.alloc_id(),
            size,
        };
        self.textures.insert(name.to_owned(), handle);
        Some(handle)
    }

    /// Allocate an anonymous texture handle (e.g. for a generated image).
    pub fn alloc_texture(&mut self, size: Vec2) -> TextureHandle {
        TextureHandle {
            id: self.alloc_id(),
            size,
        }
    }

    /// Allocate a layered texture handle.
    pub fn alloc_texture_array(&mut self, layer_size: UVec2, layers: u32) -> TextureArrayHandle {
        TextureArrayHandle {
            id: self.alloc_id(),
            layer_size,
            layers,
        }
    }

    fn alloc_id(&mut self) -> TextureId {
        let id = TextureId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn image_count(&self) -> usize {
        self.images.len()
    }
}

impl Default for AssetCache {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_assets_return_none() {
        let mut cache = AssetCache::new();
        assert!(cache.get_image("gfx/missing.png").is_none());
        assert!(cache.get_texture("gfx/missing.png").is_none());
    }

    #[test]
    fn image_is_shared_not_copied() {
        let mut cache = AssetCache::new();
        cache.insert_image("a.png", ImageData::new(8, 8));
        let first = cache.get_image("a.png").unwrap();
        let second = cache.get_image("a.png").unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn texture_handle_is_stable_per_name() {
        let mut cache = AssetCache::new();
        cache.insert_image("a.png", ImageData::new(32, 16));
        cache.insert_image("b.png", ImageData::new(4, 4));

        let a1 = cache.get_texture("a.png").unwrap();
        let b = cache.get_texture("b.png").unwrap();
        let a2 = cache.get_texture("a.png").unwrap();

        assert_eq!(a1, a2);
        assert_ne!(a1.id, b.id);
        assert_eq!(a1.size, glam::Vec2::new(32.0, 16.0));
    }

    #[test]
    fn allocated_handles_get_fresh_ids() {
        let mut cache = AssetCache::new();
        let t = cache.alloc_texture(glam::Vec2::new(256.0, 4.0));
        let a = cache.alloc_texture_array(UVec2::new(64, 64), 8);
        assert_ne!(t.id, a.id);
        assert_eq!(a.layers, 8);
    }

    #[test]
    fn bad_bytes_fail_to_decode() {
        let mut cache = AssetCache::new();
        let err = cache.load_from_bytes("x.png", &[0, 1, 2, 3]).unwrap_err();
        assert!(matches!(err, ViewError::ImageDecode { .. }));
    }
}
