pub mod colour;
pub mod flags;
pub mod shape;
pub mod terrain;

// Re-export key types for convenient access
pub use colour::{colour_image_height, ProvinceColourMap, PROVINCE_INDEX_SPLIT};
pub use flags::FlagImages;
pub use shape::{subdivisions_for, ProvinceShape, MAX_PIECE_DIM};
pub use terrain::TerrainVariants;
