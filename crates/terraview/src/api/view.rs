//! Game view facade: the single owner of everything the host engine needs
//! to render the map — shape/colour/terrain/flag textures, the mapmode
//! selection, and the notice queue.
//!
//! One `GameView` is constructed at extension load and dropped at unload;
//! collaborators receive it by reference instead of reaching for a global.

use glam::{IVec2, Vec2};
use log::warn;

use crate::api::sim::Simulation;
use crate::api::types::{CountryId, GameNotice, ProvinceIndex};
use crate::assets::cache::AssetCache;
use crate::assets::registry::SpriteRegistry;
use crate::components::sprite::FrameIndex;
use crate::components::sprite_texture::SpriteTexture;
use crate::error::ViewError;
use crate::map::colour::ProvinceColourMap;
use crate::map::flags::FlagImages;
use crate::map::shape::ProvinceShape;
use crate::map::terrain::TerrainVariants;
use crate::renderer::texture::{ImageData, TextureArrayHandle, TextureHandle};

pub struct GameView<S: Simulation> {
    sim: S,
    cache: AssetCache,
    registry: SpriteRegistry,
    shape: Option<ProvinceShape>,
    colours: Option<ProvinceColourMap>,
    terrain: Option<TerrainVariants>,
    flags: FlagImages,
    mapmode: usize,
    selected_province: ProvinceIndex,
    notices: Vec<GameNotice>,
}

impl<S: Simulation> GameView<S> {
    pub fn new(sim: S, cache: AssetCache, registry: SpriteRegistry) -> Self {
        Self {
            sim,
            cache,
            registry,
            shape: None,
            colours: None,
            terrain: None,
            flags: FlagImages::new(),
            mapmode: 0,
            selected_province: ProvinceIndex::NONE,
            notices: Vec::new(),
        }
    }

    // -- Setup ----------------------------------------------------------

    /// Load the province shape image, split it into GPU-sized pieces, and
    /// allocate the colour overlay for the simulation's province count.
    pub fn load_map_images(&mut self, shape_name: &str) -> Result<(), ViewError> {
        let image = self
            .cache
            .get_image(shape_name)
            .ok_or_else(|| ViewError::AssetLoadFailure {
                name: shape_name.to_owned(),
            })?;
        self.shape = Some(ProvinceShape::load(&mut self.cache, image));

        let mut colours = ProvinceColourMap::new(&mut self.cache, self.sim.province_count());
        colours.rebuild(&self.sim, self.mapmode);
        self.colours = Some(colours);
        Ok(())
    }

    /// Load the cosmetic terrain variant textures, in terrain-index order.
    pub fn load_terrain_variants(&mut self, names: &[String]) -> Result<(), ViewError> {
        self.terrain = Some(TerrainVariants::load(&mut self.cache, names)?);
        Ok(())
    }

    /// Load every country's flag images. Missing variants are logged and
    /// skipped inside `FlagImages::load`.
    pub fn load_flag_images(&mut self) {
        self.flags = FlagImages::load(&mut self.cache, &self.sim);
    }

    // -- Map queries ----------------------------------------------------

    pub fn map_dims(&self) -> IVec2 {
        self.shape
            .as_ref()
            .map_or(IVec2::ZERO, |shape| shape.dims().as_ivec2())
    }

    pub fn map_width(&self) -> i32 {
        self.map_dims().x
    }

    pub fn map_height(&self) -> i32 {
        self.map_dims().y
    }

    pub fn map_aspect_ratio(&self) -> f32 {
        let dims = self.map_dims();
        if dims.y == 0 {
            0.0
        } else {
            dims.x as f32 / dims.y as f32
        }
    }

    /// (horizontal, vertical) piece counts the shape image was split into.
    pub fn province_shape_subdivisions(&self) -> IVec2 {
        self.shape
            .as_ref()
            .map_or(IVec2::ZERO, |shape| shape.subdivisions())
    }

    pub fn province_shape_texture(&self) -> Option<TextureArrayHandle> {
        self.shape.as_ref().map(|shape| shape.texture())
    }

    pub fn province_colour_texture(&self) -> Option<TextureHandle> {
        self.colours.as_ref().map(|colours| colours.texture())
    }

    pub fn terrain_texture(&self) -> Option<TextureArrayHandle> {
        self.terrain.as_ref().map(|terrain| terrain.texture())
    }

    /// Province under a UV coordinate of the map quad. `NONE` before the
    /// map is loaded or outside the map.
    pub fn province_index_at_uv(&self, uv: Vec2) -> ProvinceIndex {
        self.shape
            .as_ref()
            .map_or(ProvinceIndex::NONE, |shape| shape.province_index_at_uv(uv))
    }

    // -- Mapmodes -------------------------------------------------------

    pub fn mapmode_count(&self) -> usize {
        self.sim.mapmode_count()
    }

    pub fn mapmode_identifier(&self, index: usize) -> Option<&str> {
        self.sim.mapmode_identifier(index)
    }

    pub fn current_mapmode(&self) -> usize {
        self.mapmode
    }

    pub fn is_parchment_mapmode_allowed(&self) -> bool {
        self.sim.is_parchment_allowed(self.mapmode)
    }

    /// Switch mapmode by identifier and re-derive the colour overlay.
    /// Selecting before the map is loaded only records the mode; the
    /// overlay is derived when `load_map_images` runs.
    pub fn set_mapmode(&mut self, identifier: &str) -> Result<(), ViewError> {
        let index = (0..self.sim.mapmode_count())
            .find(|&i| self.sim.mapmode_identifier(i) == Some(identifier))
            .ok_or_else(|| ViewError::NoMapmode {
                identifier: identifier.to_owned(),
            })?;
        self.mapmode = index;
        self.update_colour_image();
        Ok(())
    }

    // -- Selection ------------------------------------------------------

    pub fn selected_province(&self) -> ProvinceIndex {
        self.selected_province
    }

    /// Select a province and queue a notice. Indices beyond the province
    /// count deselect with a warning.
    pub fn set_selected_province(&mut self, index: ProvinceIndex) {
        if index.0 > self.sim.province_count() {
            warn!(
                "selected province {} out of range (max {})",
                index.0,
                self.sim.province_count()
            );
            self.selected_province = ProvinceIndex::NONE;
        } else {
            self.selected_province = index;
        }
        self.notices
            .push(GameNotice::ProvinceSelected(self.selected_province));
    }

    // -- Flags ----------------------------------------------------------

    pub fn get_flag_image(&self, country: CountryId, flag_type: &str) -> Option<&ImageData> {
        self.flags
            .get(country, flag_type)
            .map(|image| image.as_ref())
    }

    // -- Simulation bridging --------------------------------------------

    /// React to a simulation state change: re-derive the colour overlay
    /// and queue a notice for the host.
    pub fn on_gamestate_updated(&mut self) {
        self.update_colour_image();
        self.notices.push(GameNotice::GamestateUpdated);
    }

    /// Advance the simulation clock if due; queues a notice when it moved.
    pub fn try_tick(&mut self) {
        if self.sim.tick() {
            self.notices.push(GameNotice::ClockStateChanged);
        }
    }

    /// Drain queued notices, oldest first.
    pub fn take_notices(&mut self) -> Vec<GameNotice> {
        std::mem::take(&mut self.notices)
    }

    fn update_colour_image(&mut self) {
        if let Some(colours) = &mut self.colours {
            colours.rebuild(&self.sim, self.mapmode);
        }
    }

    // -- Sprite resolution ----------------------------------------------

    /// Build a sprite texture resolved against this view's registry and
    /// asset cache.
    pub fn make_sprite_texture(
        &mut self,
        name: &str,
        frame: FrameIndex,
    ) -> Result<SpriteTexture, ViewError> {
        let mut texture = SpriteTexture::new();
        texture.set_sprite_name(&mut self.cache, &self.registry, name, frame)?;
        Ok(texture)
    }

    // -- Accessors ------------------------------------------------------

    pub fn sim(&self) -> &S {
        &self.sim
    }

    pub fn sim_mut(&mut self) -> &mut S {
        &mut self.sim
    }

    pub fn cache(&self) -> &AssetCache {
        &self.cache
    }

    pub fn cache_mut(&mut self) -> &mut AssetCache {
        &mut self.cache
    }

    pub fn registry(&self) -> &SpriteRegistry {
        &self.registry
    }
}
