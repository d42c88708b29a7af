//! Swatches offered by the game's wrestler creation screen.

use super::colour::{Colour, DARKEN_DEFAULT};

/// A selectable skin tone: base colour plus its shadow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkinTone {
    pub light: Colour,
    pub shadow: Colour,
}

const fn tone(light: Colour, shadow: Colour) -> SkinTone {
    SkinTone { light, shadow }
}

pub const SKIN_TONES: [SkinTone; 5] = [
    tone(Colour::rgb(0xf5, 0xc5, 0xa3), Colour::rgb(0xe8, 0xa8, 0x82)),
    tone(Colour::rgb(0xe8, 0xa8, 0x82), Colour::rgb(0xc8, 0x84, 0x5a)),
    tone(Colour::rgb(0xc6, 0x86, 0x42), Colour::rgb(0xa0, 0x60, 0x30)),
    tone(Colour::rgb(0x8d, 0x55, 0x24), Colour::rgb(0x6b, 0x3a, 0x18)),
    tone(Colour::rgb(0x4a, 0x2c, 0x12), Colour::rgb(0x2e, 0x1a, 0x08)),
];

pub const HAIR_COLOURS: [Colour; 6] = [
    Colour::rgb(0x2c, 0x18, 0x10),
    Colour::rgb(0xc8, 0xa0, 0x60),
    Colour::rgb(0xe0, 0xe0, 0xe0),
    Colour::rgb(0xff, 0x2d, 0x55),
    Colour::rgb(0xff, 0xd7, 0x00),
    Colour::rgb(0x44, 0x44, 0xff),
];

pub const COSTUME_COLOURS: [Colour; 8] = [
    Colour::rgb(0xff, 0x2d, 0x55),
    Colour::rgb(0xff, 0xd7, 0x00),
    Colour::rgb(0x00, 0x55, 0xff),
    Colour::rgb(0x00, 0xcc, 0x44),
    Colour::rgb(0xaa, 0x00, 0xff),
    Colour::rgb(0x11, 0x11, 0x11),
    Colour::rgb(0xff, 0xff, 0xff),
    Colour::rgb(0xff, 0x66, 0x00),
];

/// Find the preset tone whose base colour is `skin`.
pub fn skin_tone(skin: Colour) -> Option<&'static SkinTone> {
    SKIN_TONES.iter().find(|t| t.light == skin)
}

/// Shadow to pair with `skin` when none was stored.
///
/// Preset tones use their designed shadow; anything else is darkened.
pub fn shadow_for_skin(skin: Colour) -> Colour {
    skin_tone(skin).map_or_else(|| skin.darken(DARKEN_DEFAULT), |t| t.shadow)
}
