//! Sprite definition document describing all named graphical assets.
//! Loaded from a JSON file at runtime.
//!
//! Non-texture kinds (text, progress bar, masked flag) are carried so that
//! a lookup can report "exists but wrong kind" instead of "missing".

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::components::sprite::FrameIndex;

/// All sprite definitions for a game, keyed by sprite name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpriteDefs {
    #[serde(default)]
    pub sprites: HashMap<String, SpriteDef>,
}

/// One entry in the sprite definition file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SpriteDef {
    /// Plain full-image texture sprite.
    Texture { file: String },
    /// Horizontal strip of `frames` equally-sized icons.
    Icon {
        file: String,
        #[serde(default = "default_frames")]
        frames: FrameIndex,
    },
    /// Nine-patch tile with a symmetric pixel border.
    CorneredTile {
        file: String,
        #[serde(default)]
        border: [i32; 2],
    },
    /// Text label style; has no backing texture.
    Text { font: String },
    /// Two-texture progress bar.
    ProgressBar {
        back_file: String,
        progress_file: String,
    },
    /// Country flag with an overlay mask.
    MaskedFlag {
        overlay_file: String,
        mask_file: String,
    },
}

fn default_frames() -> FrameIndex {
    1
}

impl SpriteDef {
    pub fn kind_name(&self) -> &'static str {
        match self {
            SpriteDef::Texture { .. } => "texture",
            SpriteDef::Icon { .. } => "icon",
            SpriteDef::CorneredTile { .. } => "cornered_tile",
            SpriteDef::Text { .. } => "text",
            SpriteDef::ProgressBar { .. } => "progress_bar",
            SpriteDef::MaskedFlag { .. } => "masked_flag",
        }
    }
}

impl SpriteDefs {
    /// Parse definitions from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
