pub mod cache;
pub mod manifest;
pub mod registry;

// Re-export key types for convenient access
pub use cache::AssetCache;
pub use manifest::{SpriteDef, SpriteDefs};
pub use registry::{SpriteEntry, SpriteRegistry};
