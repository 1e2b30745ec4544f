pub mod surface;
pub mod texture;

// Re-export key types for convenient access
pub use surface::{DrawCommand, DrawSurface, RecordingSurface};
pub use texture::{ImageData, Region, TextureArrayHandle, TextureHandle, TextureId};
