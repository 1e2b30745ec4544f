//! Indexable atlas texture resolved from a named sprite descriptor.
//!
//! Maps a descriptor plus a 1-based frame index to an atlas sub-region and
//! draws it onto a host surface, as a nine-patch for cornered tiles. The
//! descriptor's kind is classified exactly once per resolution; switching
//! frames only recomputes the region.

use std::sync::Arc;

use glam::IVec2;
use log::warn;

use crate::assets::cache::AssetCache;
use crate::assets::registry::SpriteRegistry;
use crate::components::button::{ButtonState, ButtonStateTexture};
use crate::components::sprite::{FrameIndex, SpriteDescriptor, SpriteKind, NO_FRAMES};
use crate::error::ViewError;
use crate::renderer::surface::DrawSurface;
use crate::renderer::texture::{ImageData, Region, TextureHandle};

pub struct SpriteTexture {
    sprite: Option<Arc<SpriteDescriptor>>,
    atlas: Option<TextureHandle>,
    atlas_image: Option<Arc<ImageData>>,
    region: Region,
    icon_index: FrameIndex,
    icon_count: FrameIndex,
    cornered_tile: bool,
    border_size: IVec2,
    button_states: Vec<ButtonStateTexture>,
}

impl SpriteTexture {
    pub fn new() -> Self {
        Self {
            sprite: None,
            atlas: None,
            atlas_image: None,
            region: Region::default(),
            icon_index: NO_FRAMES,
            icon_count: NO_FRAMES,
            cornered_tile: false,
            border_size: IVec2::ZERO,
            button_states: Vec::new(),
        }
    }

    /// Resolve a descriptor by name and apply a frame index. An empty name
    /// clears the texture and succeeds.
    pub fn set_sprite_name(
        &mut self,
        cache: &mut AssetCache,
        registry: &SpriteRegistry,
        name: &str,
        frame: FrameIndex,
    ) -> Result<(), ViewError> {
        if name.is_empty() {
            self.clear();
            return Ok(());
        }
        let descriptor = registry.get_texture_sprite(name)?;
        self.set_sprite(cache, Some(&descriptor), frame)
    }

    /// Resolve a descriptor reference and apply a frame index.
    ///
    /// Resolving the descriptor already held skips re-classification but
    /// still re-applies the frame. A load failure leaves the previously
    /// resolved state untouched.
    pub fn set_sprite(
        &mut self,
        cache: &mut AssetCache,
        new_sprite: Option<&Arc<SpriteDescriptor>>,
        frame: FrameIndex,
    ) -> Result<(), ViewError> {
        let Some(new_sprite) = new_sprite else {
            self.clear();
            return Ok(());
        };
        let same = self
            .sprite
            .as_ref()
            .is_some_and(|held| Arc::ptr_eq(held, new_sprite));
        if !same {
            let file = new_sprite.texture_file.as_str();
            // The image is kept alongside the texture so button-state
            // variants can be derived from region pixels.
            let image = cache.get_image(file).ok_or_else(|| ViewError::AssetLoadFailure {
                name: file.to_owned(),
            })?;
            let texture = cache.get_texture(file).ok_or_else(|| ViewError::AssetLoadFailure {
                name: file.to_owned(),
            })?;

            self.atlas_image = Some(image);
            self.atlas = Some(texture);
            self.sprite = Some(Arc::clone(new_sprite));
            self.icon_index = NO_FRAMES;

            match new_sprite.kind {
                SpriteKind::IconStrip { frames } => {
                    self.icon_count = frames;
                    self.cornered_tile = false;
                    self.border_size = IVec2::ZERO;
                }
                SpriteKind::CorneredTile { border } => {
                    self.icon_count = NO_FRAMES;
                    self.cornered_tile = true;
                    self.border_size = border;
                }
                SpriteKind::Plain => {
                    self.icon_count = NO_FRAMES;
                    self.cornered_tile = false;
                    self.border_size = IVec2::ZERO;
                }
            }
        }
        self.set_icon_index(frame)
    }

    /// Select a frame and recompute the atlas region.
    ///
    /// For sprites without frames any positive index is rejected with a
    /// warning and the full atlas is shown. For strips, over-range indices
    /// clamp to frame 1 with a warning; non-positive indices default to 1
    /// silently.
    pub fn set_icon_index(&mut self, new_icon_index: FrameIndex) -> Result<(), ViewError> {
        let atlas = self.atlas.as_ref().ok_or(ViewError::NoAtlas)?;
        let size = atlas.size;
        if self.icon_count <= NO_FRAMES {
            if new_icon_index > NO_FRAMES {
                warn!(
                    "invalid icon index {new_icon_index} for texture with no frames"
                );
            }
            self.icon_index = NO_FRAMES;
            self.region = Region::full(size);
        } else {
            if NO_FRAMES < new_icon_index && new_icon_index <= self.icon_count {
                self.icon_index = new_icon_index;
            } else {
                self.icon_index = 1;
                if new_icon_index > self.icon_count {
                    warn!(
                        "invalid icon index {new_icon_index} out of count {} - defaulting to {}",
                        self.icon_count, self.icon_index
                    );
                }
            }
            let frame_width = size.x / self.icon_count as f32;
            self.region = Region::new(
                (self.icon_index - 1) as f32 * frame_width,
                0.0,
                frame_width,
                size.y,
            );
        }
        self.update_button_states();
        Ok(())
    }

    /// Draw onto a surface: nine-patch for cornered tiles, plain rect
    /// otherwise. Without a resolved atlas this is a no-op.
    pub fn draw(&self, surface: &mut dyn DrawSurface, dest: Region) {
        let Some(atlas) = &self.atlas else {
            return;
        };
        if self.cornered_tile {
            let border = self.border_size.as_vec2();
            surface.draw_nine_patch(
                atlas,
                dest,
                Region::full(atlas.size),
                border,
                atlas.size - border,
            );
        } else {
            surface.draw_rect(atlas, self.region, dest);
        }
    }

    /// Return to the empty state. Idempotent.
    pub fn clear(&mut self) {
        self.sprite = None;
        self.atlas = None;
        self.atlas_image = None;
        self.region = Region::default();
        self.icon_index = NO_FRAMES;
        self.icon_count = NO_FRAMES;
        self.cornered_tile = false;
        self.border_size = IVec2::ZERO;
        for button in &mut self.button_states {
            button.clear();
        }
    }

    /// Allocate a button-state variant. It is refreshed immediately if an
    /// atlas is resolved, and after every subsequent frame change.
    pub fn enable_button_state(&mut self, state: ButtonState) {
        if self.button_states.iter().any(|b| b.state() == state) {
            return;
        }
        let mut button = ButtonStateTexture::new(state);
        if let Some(image) = &self.atlas_image {
            button.refresh(image, self.region);
        }
        self.button_states.push(button);
    }

    /// The modulated image for a previously enabled button state.
    pub fn button_state_image(&self, state: ButtonState) -> Option<&ImageData> {
        self.button_states
            .iter()
            .find(|b| b.state() == state)
            .and_then(|b| b.image())
    }

    fn update_button_states(&mut self) {
        if let Some(image) = &self.atlas_image {
            for button in &mut self.button_states {
                button.refresh(image, self.region);
            }
        }
    }

    pub fn sprite(&self) -> Option<&Arc<SpriteDescriptor>> {
        self.sprite.as_ref()
    }

    /// Resolved descriptor name, or empty when cleared.
    pub fn sprite_name(&self) -> &str {
        self.sprite.as_ref().map_or("", |s| s.name.as_str())
    }

    pub fn atlas(&self) -> Option<TextureHandle> {
        self.atlas
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn icon_index(&self) -> FrameIndex {
        self.icon_index
    }

    pub fn icon_count(&self) -> FrameIndex {
        self.icon_count
    }

    pub fn is_cornered_tile(&self) -> bool {
        self.cornered_tile
    }

    pub fn border_size(&self) -> IVec2 {
        self.border_size
    }
}

impl Default for SpriteTexture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::SpriteDefs;
    use crate::renderer::surface::{DrawCommand, RecordingSurface};
    use glam::Vec2;

    fn fixtures() -> (AssetCache, SpriteRegistry) {
        let mut cache = AssetCache::new();
        cache.insert_image("gfx/goods.png", ImageData::new(128, 32));
        cache.insert_image("gfx/panel.png", ImageData::new(64, 64));
        cache.insert_image("gfx/logo.png", ImageData::new(100, 50));

        let json = r#"{
            "sprites": {
                "goods": { "type": "icon", "file": "gfx/goods.png", "frames": 4 },
                "panel": { "type": "cornered_tile", "file": "gfx/panel.png", "border": [4, 4] },
                "logo": { "type": "texture", "file": "gfx/logo.png" },
                "title": { "type": "text", "font": "garamond_14" },
                "ghost": { "type": "texture", "file": "gfx/unloaded.png" }
            }
        }"#;
        let registry = SpriteRegistry::from_defs(&SpriteDefs::from_json(json).unwrap());
        (cache, registry)
    }

    #[test]
    fn frame_region_is_horizontal_slice() {
        let (mut cache, registry) = fixtures();
        let mut tex = SpriteTexture::new();
        tex.set_sprite_name(&mut cache, &registry, "goods", 2).unwrap();

        assert_eq!(tex.icon_index(), 2);
        assert_eq!(tex.icon_count(), 4);
        assert_eq!(tex.region(), Region::new(32.0, 0.0, 32.0, 32.0));
    }

    #[test]
    fn over_range_frame_clamps_to_one() {
        let (mut cache, registry) = fixtures();
        let mut tex = SpriteTexture::new();
        tex.set_sprite_name(&mut cache, &registry, "goods", 5).unwrap();

        assert_eq!(tex.icon_index(), 1);
        assert_eq!(tex.region(), Region::new(0.0, 0.0, 32.0, 32.0));
    }

    #[test]
    fn non_positive_frame_defaults_to_one() {
        let (mut cache, registry) = fixtures();
        let mut tex = SpriteTexture::new();
        tex.set_sprite_name(&mut cache, &registry, "goods", -3).unwrap();
        assert_eq!(tex.icon_index(), 1);

        tex.set_sprite_name(&mut cache, &registry, "goods", NO_FRAMES).unwrap();
        assert_eq!(tex.icon_index(), 1);
    }

    #[test]
    fn frameless_sprite_ignores_indexing() {
        let (mut cache, registry) = fixtures();
        let mut tex = SpriteTexture::new();
        tex.set_sprite_name(&mut cache, &registry, "logo", 3).unwrap();

        assert_eq!(tex.icon_index(), NO_FRAMES);
        assert_eq!(tex.icon_count(), NO_FRAMES);
        assert_eq!(tex.region(), Region::full(Vec2::new(100.0, 50.0)));

        tex.set_icon_index(7).unwrap();
        assert_eq!(tex.icon_index(), NO_FRAMES);
        assert_eq!(tex.region(), Region::full(Vec2::new(100.0, 50.0)));
    }

    #[test]
    fn empty_name_clears() {
        let (mut cache, registry) = fixtures();
        let mut tex = SpriteTexture::new();
        tex.set_sprite_name(&mut cache, &registry, "goods", 2).unwrap();
        tex.set_sprite_name(&mut cache, &registry, "", 1).unwrap();

        assert!(tex.sprite().is_none());
        assert!(tex.atlas().is_none());
        assert_eq!(tex.sprite_name(), "");
        assert_eq!(tex.icon_index(), NO_FRAMES);
        assert_eq!(tex.icon_count(), NO_FRAMES);
        assert!(!tex.is_cornered_tile());
        assert_eq!(tex.border_size(), IVec2::ZERO);
    }

    #[test]
    fn unknown_and_wrong_kind_names_fail() {
        let (mut cache, registry) = fixtures();
        let mut tex = SpriteTexture::new();
        assert!(matches!(
            tex.set_sprite_name(&mut cache, &registry, "nope", 1),
            Err(ViewError::NotFound { .. })
        ));
        assert!(matches!(
            tex.set_sprite_name(&mut cache, &registry, "title", 1),
            Err(ViewError::TypeMismatch { .. })
        ));
    }

    #[test]
    fn load_failure_preserves_previous_state() {
        let (mut cache, registry) = fixtures();
        let mut tex = SpriteTexture::new();
        tex.set_sprite_name(&mut cache, &registry, "goods", 2).unwrap();

        let err = tex.set_sprite_name(&mut cache, &registry, "ghost", 1);
        assert!(matches!(err, Err(ViewError::AssetLoadFailure { .. })));
        assert_eq!(tex.sprite_name(), "goods");
        assert_eq!(tex.icon_index(), 2);
    }

    #[test]
    fn same_descriptor_reapplies_only_frame() {
        let (mut cache, registry) = fixtures();
        let descriptor = registry.get_texture_sprite("goods").unwrap();
        let mut tex = SpriteTexture::new();
        tex.set_sprite(&mut cache, Some(&descriptor), 2).unwrap();
        let atlas = tex.atlas().unwrap();

        tex.set_sprite(&mut cache, Some(&descriptor), 4).unwrap();
        assert_eq!(tex.icon_index(), 4);
        assert_eq!(tex.icon_count(), 4);
        assert_eq!(tex.atlas().unwrap(), atlas);
        assert_eq!(tex.region(), Region::new(96.0, 0.0, 32.0, 32.0));
    }

    #[test]
    fn set_icon_index_without_atlas_fails() {
        let mut tex = SpriteTexture::new();
        assert!(matches!(tex.set_icon_index(1), Err(ViewError::NoAtlas)));
    }

    #[test]
    fn plain_draw_uses_current_region() {
        let (mut cache, registry) = fixtures();
        let mut tex = SpriteTexture::new();
        tex.set_sprite_name(&mut cache, &registry, "goods", 3).unwrap();

        let mut surface = RecordingSurface::new();
        tex.draw(&mut surface, Region::new(10.0, 10.0, 48.0, 48.0));

        assert_eq!(surface.commands.len(), 1);
        match surface.commands[0] {
            DrawCommand::Rect { source, dest, .. } => {
                assert_eq!(source, Region::new(64.0, 0.0, 32.0, 32.0));
                assert_eq!(dest, Region::new(10.0, 10.0, 48.0, 48.0));
            }
            _ => panic!("expected plain rect draw"),
        }
    }

    #[test]
    fn cornered_tile_draws_nine_patch() {
        let (mut cache, registry) = fixtures();
        let mut tex = SpriteTexture::new();
        tex.set_sprite_name(&mut cache, &registry, "panel", NO_FRAMES).unwrap();
        assert!(tex.is_cornered_tile());
        assert_eq!(tex.border_size(), IVec2::new(4, 4));

        let mut surface = RecordingSurface::new();
        tex.draw(&mut surface, Region::new(0.0, 0.0, 200.0, 120.0));

        match surface.commands[0] {
            DrawCommand::NinePatch {
                source,
                margin_min,
                margin_max,
                ..
            } => {
                assert_eq!(source, Region::full(Vec2::new(64.0, 64.0)));
                assert_eq!(margin_min, Vec2::new(4.0, 4.0));
                assert_eq!(margin_max, Vec2::new(60.0, 60.0));
            }
            _ => panic!("expected nine-patch draw"),
        }
    }

    #[test]
    fn cleared_texture_draws_nothing() {
        let tex = SpriteTexture::new();
        let mut surface = RecordingSurface::new();
        tex.draw(&mut surface, Region::new(0.0, 0.0, 10.0, 10.0));
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn button_states_follow_frame_changes() {
        let (mut cache, registry) = fixtures();
        let mut tex = SpriteTexture::new();
        tex.set_sprite_name(&mut cache, &registry, "goods", 1).unwrap();
        tex.enable_button_state(ButtonState::Hover);

        let first = tex.button_state_image(ButtonState::Hover).unwrap();
        assert_eq!(first.dims(), glam::UVec2::new(32, 32));

        tex.set_icon_index(2).unwrap();
        assert!(tex.button_state_image(ButtonState::Hover).is_some());

        tex.clear();
        assert!(tex.button_state_image(ButtonState::Hover).is_none());
    }
}
