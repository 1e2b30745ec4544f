//! Registry of named sprite descriptors, built from a `SpriteDefs` document.
//! Provides name-based lookup with kind checking for UI code.

use std::collections::HashMap;
use std::sync::Arc;

use glam::IVec2;

use crate::assets::manifest::{SpriteDef, SpriteDefs};
use crate::components::sprite::{SpriteDescriptor, SpriteKind};
use crate::error::ViewError;

/// A registered sprite: either a resolvable texture sprite or a
/// non-texture entry remembered only for diagnostics.
#[derive(Debug, Clone)]
pub enum SpriteEntry {
    Texture(Arc<SpriteDescriptor>),
    Other { kind: &'static str },
}

/// Name → sprite descriptor lookup.
pub struct SpriteRegistry {
    sprites: HashMap<String, SpriteEntry>,
}

impl SpriteRegistry {
    pub fn new() -> Self {
        Self {
            sprites: HashMap::new(),
        }
    }

    /// Build a registry from parsed sprite definitions. Texture-capable
    /// kinds become shared descriptors; the rest keep only their kind name.
    pub fn from_defs(defs: &SpriteDefs) -> Self {
        let mut sprites = HashMap::with_capacity(defs.sprites.len());
        for (name, def) in &defs.sprites {
            let entry = match def {
                SpriteDef::Texture { file } => SpriteEntry::Texture(Arc::new(SpriteDescriptor {
                    name: name.clone(),
                    texture_file: file.clone(),
                    kind: SpriteKind::Plain,
                })),
                SpriteDef::Icon { file, frames } => {
                    SpriteEntry::Texture(Arc::new(SpriteDescriptor {
                        name: name.clone(),
                        texture_file: file.clone(),
                        kind: SpriteKind::IconStrip { frames: *frames },
                    }))
                }
                SpriteDef::CorneredTile { file, border } => {
                    SpriteEntry::Texture(Arc::new(SpriteDescriptor {
                        name: name.clone(),
                        texture_file: file.clone(),
                        kind: SpriteKind::CorneredTile {
                            border: IVec2::new(border[0], border[1]),
                        },
                    }))
                }
                other => SpriteEntry::Other {
                    kind: other.kind_name(),
                },
            };
            sprites.insert(name.clone(), entry);
        }
        Self { sprites }
    }

    /// Look up any entry by name.
    pub fn get(&self, name: &str) -> Option<&SpriteEntry> {
        self.sprites.get(name)
    }

    /// Look up a texture sprite by name, failing with `NotFound` or
    /// `TypeMismatch` so callers can report exactly what went wrong.
    pub fn get_texture_sprite(&self, name: &str) -> Result<Arc<SpriteDescriptor>, ViewError> {
        match self.sprites.get(name) {
            Some(SpriteEntry::Texture(descriptor)) => Ok(Arc::clone(descriptor)),
            Some(SpriteEntry::Other { kind }) => Err(ViewError::TypeMismatch {
                name: name.to_owned(),
                found: kind,
                expected: "texture",
            }),
            None => Err(ViewError::NotFound {
                name: name.to_owned(),
            }),
        }
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}

impl Default for SpriteRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SpriteRegistry {
        let json = r#"{
            "sprites": {
                "goods": { "type": "icon", "file": "gfx/goods.png", "frames": 4 },
                "panel": { "type": "cornered_tile", "file": "gfx/panel.png", "border": [4, 4] },
                "title": { "type": "text", "font": "garamond_14" }
            }
        }"#;
        SpriteRegistry::from_defs(&SpriteDefs::from_json(json).unwrap())
    }

    #[test]
    fn loads_texture_sprites_from_defs() {
        let reg = registry();
        let goods = reg.get_texture_sprite("goods").unwrap();
        assert_eq!(goods.texture_file, "gfx/goods.png");
        assert_eq!(goods.kind, SpriteKind::IconStrip { frames: 4 });

        let panel = reg.get_texture_sprite("panel").unwrap();
        assert_eq!(
            panel.kind,
            SpriteKind::CorneredTile {
                border: IVec2::new(4, 4)
            }
        );
    }

    #[test]
    fn unknown_name_is_not_found() {
        let reg = registry();
        assert!(matches!(
            reg.get_texture_sprite("nonexistent"),
            Err(ViewError::NotFound { .. })
        ));
    }

    #[test]
    fn wrong_kind_is_type_mismatch() {
        let reg = registry();
        match reg.get_texture_sprite("title") {
            Err(ViewError::TypeMismatch { found, expected, .. }) => {
                assert_eq!(found, "text");
                assert_eq!(expected, "texture");
            }
            other => panic!("expected type mismatch, got {other:?}"),
        }
    }

    #[test]
    fn same_name_resolves_to_same_descriptor() {
        let reg = registry();
        let a = reg.get_texture_sprite("goods").unwrap();
        let b = reg.get_texture_sprite("goods").unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
