//! Boundary to the simulation library.
//!
//! The view layer never reaches into simulation internals; everything it
//! needs (province colours per mapmode, country flags, the clock) comes
//! through this trait, implemented by the host's simulation wrapper.

use crate::api::types::{CountryId, ProvinceColours, ProvinceIndex};

pub trait Simulation {
    /// Number of provinces. Valid indices are `1..=province_count()`.
    fn province_count(&self) -> u32;

    fn mapmode_count(&self) -> usize;

    /// Identifier of the mapmode at `index`, if it exists.
    fn mapmode_identifier(&self, index: usize) -> Option<&str>;

    /// Whether the parchment (paper-style) map skin may be shown under
    /// this mapmode.
    fn is_parchment_allowed(&self, mapmode: usize) -> bool {
        let _ = mapmode;
        true
    }

    /// Base and stripe colour for one province under one mapmode.
    fn province_colours(&self, mapmode: usize, province: ProvinceIndex) -> ProvinceColours;

    fn countries(&self) -> Vec<CountryId>;

    /// Flag variants the game defines (e.g. plain, republic, monarchy).
    fn flag_types(&self) -> Vec<String>;

    /// Asset-cache name of the flag sheet for a country/flag-type pair.
    fn flag_sheet_name(&self, country: CountryId, flag_type: &str) -> String;

    /// Advance the simulation clock if due. Returns true when the clock
    /// state actually changed.
    fn tick(&mut self) -> bool;
}
