pub mod sim;
pub mod types;
pub mod view;

// Re-export key types for convenient access
pub use sim::Simulation;
pub use types::{CountryId, GameNotice, ProvinceColours, ProvinceIndex};
pub use view::GameView;
