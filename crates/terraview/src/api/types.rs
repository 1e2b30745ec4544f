/// Index of a province in the simulation's province list.
/// Zero means "no province" (sea, border, or out of map).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ProvinceIndex(pub u32);

impl ProvinceIndex {
    pub const NONE: ProvinceIndex = ProvinceIndex(0);

    pub fn is_none(self) -> bool {
        self.0 == 0
    }
}

/// Identifier for a country in the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CountryId(pub u32);

/// Base and stripe colour of a province under some mapmode, RGBA8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProvinceColours {
    pub base: [u8; 4],
    pub stripe: [u8; 4],
}

/// Notification queued by the view for the host engine, the analogue of
/// an engine signal. Drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameNotice {
    /// Simulation state changed; dependent UI should refresh.
    GamestateUpdated,
    /// The selected province changed.
    ProvinceSelected(ProvinceIndex),
    /// The simulation clock advanced or changed speed.
    ClockStateChanged,
}
