pub mod button;
pub mod sprite;
pub mod sprite_texture;

// Re-export key types for convenient access
pub use button::{ButtonState, ButtonStateTexture};
pub use sprite::{FrameIndex, SpriteDescriptor, SpriteKind, NO_FRAMES};
pub use sprite_texture::SpriteTexture;
