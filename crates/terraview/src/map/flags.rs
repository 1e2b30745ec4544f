//! Cache of country flag images keyed by (country, flag type).
//!
//! A country missing a flag variant is a content problem, not a fatal one:
//! it is logged and skipped so the rest of the flags still load.

use std::collections::HashMap;
use std::sync::Arc;

use log::warn;

use crate::api::sim::Simulation;
use crate::api::types::CountryId;
use crate::assets::cache::AssetCache;
use crate::renderer::texture::ImageData;

#[derive(Default)]
pub struct FlagImages {
    images: HashMap<(CountryId, String), Arc<ImageData>>,
}

impl FlagImages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Populate from the asset cache using the simulation's flag-sheet
    /// names for every (country, flag type) pair.
    pub fn load<S: Simulation>(cache: &mut AssetCache, sim: &S) -> Self {
        let flag_types = sim.flag_types();
        let mut images = HashMap::new();
        for country in sim.countries() {
            for flag_type in &flag_types {
                let name = sim.flag_sheet_name(country, flag_type);
                match cache.get_image(&name) {
                    Some(image) => {
                        images.insert((country, flag_type.clone()), image);
                    }
                    None => {
                        warn!(
                            "missing flag image `{name}` for country {} ({flag_type})",
                            country.0
                        );
                    }
                }
            }
        }
        Self { images }
    }

    /// Flag image for a country/flag-type pair, if one was loaded.
    pub fn get(&self, country: CountryId, flag_type: &str) -> Option<&Arc<ImageData>> {
        self.images.get(&(country, flag_type.to_owned()))
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}
