//! Core domain types for ringside.
//!
//! - `Colour` - RGBA colour values with the lighten/darken transforms
//! - `AppearanceDescriptor` - the enum/colour record behind one avatar
//! - `Wrestler` - ring identity, stat block, and appearance
//! - presets - the swatches the game offers

mod appearance;
mod colour;
mod presets;
mod wrestler;

pub use appearance::{
    Accessory, AppearanceDescriptor, BootsType, Build, CostumeType, Gender, HairStyle,
};
pub use colour::{Colour, DARKEN_DEFAULT, LIGHTEN_DEFAULT};
pub use presets::{
    shadow_for_skin, skin_tone, SkinTone, COSTUME_COLOURS, HAIR_COLOURS, SKIN_TONES,
};
pub use wrestler::{
    Attitude, FileFormat, StatKind, Stats, Wrestler, STAT_DEFAULT, STAT_HIGH_LEVEL, STAT_MAX,
    STAT_MIN, STAT_TOTAL_MAX,
};
