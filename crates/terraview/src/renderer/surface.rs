//! Draw-sink boundary between this layer and the host renderer.
//!
//! The host engine rasterizes; we only submit rectangle and nine-patch
//! commands against texture handles. `RecordingSurface` captures the
//! submitted commands so tests can assert on them.

use glam::Vec2;

use crate::renderer::texture::{Region, TextureHandle};

/// A single draw submitted to the host renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Plain textured rectangle: `source` region of `texture` into `dest`.
    Rect {
        texture: TextureHandle,
        source: Region,
        dest: Region,
    },
    /// Nine-patch: interior stretches, borders keep their pixel size.
    /// `margin_min` measures from the source's top-left, `margin_max`
    /// from its bottom-right.
    NinePatch {
        texture: TextureHandle,
        dest: Region,
        source: Region,
        margin_min: Vec2,
        margin_max: Vec2,
    },
}

/// Receiver for draw commands.
pub trait DrawSurface {
    fn draw_rect(&mut self, texture: &TextureHandle, source: Region, dest: Region);

    fn draw_nine_patch(
        &mut self,
        texture: &TextureHandle,
        dest: Region,
        source: Region,
        margin_min: Vec2,
        margin_max: Vec2,
    );
}

/// Surface that records commands instead of rendering them.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn draw_rect(&mut self, texture: &TextureHandle, source: Region, dest: Region) {
        self.commands.push(DrawCommand::Rect {
            texture: *texture,
            source,
            dest,
        });
    }

    fn draw_nine_patch(
        &mut self,
        texture: &TextureHandle,
        dest: Region,
        source: Region,
        margin_min: Vec2,
        margin_max: Vec2,
    ) {
        self.commands.push(DrawCommand::NinePatch {
            texture: *texture,
            dest,
            source,
            margin_min,
            margin_max,
        });
    }
}
