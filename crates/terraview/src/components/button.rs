//! Button-state sub-textures derived from a sprite's current atlas region.
//!
//! UI buttons show hover/pressed/disabled variants of their base graphic.
//! Each variant is a colour-modulated copy of the region pixels, rebuilt
//! whenever the owning sprite texture changes its frame.

use crate::renderer::texture::{ImageData, Region};

/// Visual state a button variant represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonState {
    Hover,
    Pressed,
    Disabled,
}

impl ButtonState {
    pub const ALL: [ButtonState; 3] = [ButtonState::Hover, ButtonState::Pressed, ButtonState::Disabled];

    /// Modulate one pixel for this state. Alpha is preserved.
    fn modulate(self, [r, g, b, a]: [u8; 4]) -> [u8; 4] {
        match self {
            // Brighten towards white.
            ButtonState::Hover => [brighten(r), brighten(g), brighten(b), a],
            // Darken.
            ButtonState::Pressed => [darken(r), darken(g), darken(b), a],
            // Desaturate to luma.
            ButtonState::Disabled => {
                let luma = (r as u32 * 299 + g as u32 * 587 + b as u32 * 114) / 1000;
                [luma as u8, luma as u8, luma as u8, a]
            }
        }
    }
}

fn brighten(channel: u8) -> u8 {
    (channel as u32 * 3 / 2).min(255) as u8
}

fn darken(channel: u8) -> u8 {
    (channel as u32 * 3 / 4) as u8
}

/// One modulated variant image, regenerated on demand.
#[derive(Debug)]
pub struct ButtonStateTexture {
    state: ButtonState,
    image: Option<ImageData>,
}

impl ButtonStateTexture {
    pub fn new(state: ButtonState) -> Self {
        Self { state, image: None }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Rebuild the variant from the base atlas image and the region the
    /// owning sprite currently shows.
    pub fn refresh(&mut self, base: &ImageData, region: Region) {
        let x = region.pos.x.max(0.0) as u32;
        let y = region.pos.y.max(0.0) as u32;
        let w = region.size.x.max(0.0) as u32;
        let h = region.size.y.max(0.0) as u32;
        let mut image = base.sub_image(x, y, w, h);
        for py in 0..h {
            for px in 0..w {
                let modulated = self.state.modulate(image.pixel(px, py));
                image.set_pixel(px, py, modulated);
            }
        }
        self.image = Some(image);
    }

    /// The current variant image, if `refresh` has run since the last clear.
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    pub fn clear(&mut self) {
        self.image = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn base_image() -> ImageData {
        let mut img = ImageData::new(4, 2);
        for y in 0..2 {
            for x in 0..4 {
                img.set_pixel(x, y, [100, 100, 100, 255]);
            }
        }
        img.set_pixel(2, 0, [200, 40, 0, 255]);
        img
    }

    #[test]
    fn hover_brightens_pressed_darkens() {
        let base = base_image();
        let region = Region::new(2.0, 0.0, 2.0, 2.0);

        let mut hover = ButtonStateTexture::new(ButtonState::Hover);
        hover.refresh(&base, region);
        // (200, 40, 0) -> (255 clamped, 60, 0)
        assert_eq!(hover.image().unwrap().pixel(0, 0), [255, 60, 0, 255]);

        let mut pressed = ButtonStateTexture::new(ButtonState::Pressed);
        pressed.refresh(&base, region);
        assert_eq!(pressed.image().unwrap().pixel(0, 0), [150, 30, 0, 255]);
    }

    #[test]
    fn disabled_is_greyscale() {
        let base = base_image();
        let mut disabled = ButtonStateTexture::new(ButtonState::Disabled);
        disabled.refresh(&base, Region::new(2.0, 0.0, 1.0, 1.0));
        let [r, g, b, a] = disabled.image().unwrap().pixel(0, 0);
        assert_eq!(r, g);
        assert_eq!(g, b);
        assert_eq!(a, 255);
    }

    #[test]
    fn refresh_tracks_region_size() {
        let base = base_image();
        let mut hover = ButtonStateTexture::new(ButtonState::Hover);
        assert!(hover.image().is_none());

        hover.refresh(&base, Region::full(Vec2::new(4.0, 2.0)));
        assert_eq!(hover.image().unwrap().dims(), glam::UVec2::new(4, 2));

        hover.refresh(&base, Region::new(0.0, 0.0, 2.0, 2.0));
        assert_eq!(hover.image().unwrap().dims(), glam::UVec2::new(2, 2));

        hover.clear();
        assert!(hover.image().is_none());
    }
}
