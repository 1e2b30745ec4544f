//! Sprite descriptors: named records describing a graphical asset and its
//! kind-specific layout metadata.
//!
//! The kind is a closed sum type decided once when a definition file entry
//! is turned into a descriptor, so downstream code never re-runs type tests.

use glam::IVec2;

/// Frame selector into a horizontally-divided atlas. 1-based.
pub type FrameIndex = i32;

/// Sentinel frame value meaning "this sprite has no concept of frames".
///
/// Distinct from frame 1: a plain texture sprite must reject frame indexing
/// outright rather than silently behaving like a one-frame strip.
pub const NO_FRAMES: FrameIndex = 0;

/// Layout variant of a texture sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpriteKind {
    /// Single full-atlas image.
    Plain,
    /// Horizontal strip of equally-sized frames.
    IconStrip { frames: FrameIndex },
    /// Nine-patch tile with a symmetric pixel border.
    CorneredTile { border: IVec2 },
}

/// A resolved texture-sprite descriptor. Shared as `Arc<SpriteDescriptor>`;
/// identity (not equality) decides whether a re-resolution is a no-op.
#[derive(Debug, Clone, PartialEq)]
pub struct SpriteDescriptor {
    pub name: String,
    pub texture_file: String,
    pub kind: SpriteKind,
}

impl SpriteDescriptor {
    /// Number of frames, or `NO_FRAMES` for non-strip kinds.
    pub fn frame_count(&self) -> FrameIndex {
        match self.kind {
            SpriteKind::IconStrip { frames } => frames,
            _ => NO_FRAMES,
        }
    }

    /// Nine-patch border size, if this is a cornered tile.
    pub fn border_size(&self) -> Option<IVec2> {
        match self.kind {
            SpriteKind::CorneredTile { border } => Some(border),
            _ => None,
        }
    }

    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            SpriteKind::Plain => "texture",
            SpriteKind::IconStrip { .. } => "icon",
            SpriteKind::CorneredTile { .. } => "cornered_tile",
        }
    }
}
