pub mod api;
pub mod assets;
pub mod components;
pub mod error;
pub mod map;
pub mod renderer;

// Re-export key types at crate root for convenience
pub use api::sim::Simulation;
pub use api::types::{CountryId, GameNotice, ProvinceColours, ProvinceIndex};
pub use api::view::GameView;
pub use assets::cache::AssetCache;
pub use assets::manifest::{SpriteDef, SpriteDefs};
pub use assets::registry::{SpriteEntry, SpriteRegistry};
pub use components::button::{ButtonState, ButtonStateTexture};
pub use components::sprite::{FrameIndex, SpriteDescriptor, SpriteKind, NO_FRAMES};
pub use components::sprite_texture::SpriteTexture;
pub use error::ViewError;
pub use map::colour::{ProvinceColourMap, PROVINCE_INDEX_SPLIT};
pub use map::flags::FlagImages;
pub use map::shape::{ProvinceShape, MAX_PIECE_DIM};
pub use map::terrain::TerrainVariants;
pub use renderer::surface::{DrawCommand, DrawSurface, RecordingSurface};
pub use renderer::texture::{ImageData, Region, TextureArrayHandle, TextureHandle, TextureId};
