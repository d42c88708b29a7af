//! Appearance descriptor - the flat record that fully determines an avatar.
//!
//! The serde form matches the blob the game stores alongside each wrestler:
//!
//! ```yaml
//! gender: M
//! build: heavy
//! skin_color: "#c68642"
//! skin_shadow: "#a06030"
//! hair_style: mohawk
//! hair_color: "#ffd700"
//! costume_type: trunks
//! costume_color: "#0055ff"
//! boots_type: tall
//! accessory: none
//! ```
//!
//! The stored blob has no `skin_shadow`; when it is missing the shadow is
//! recovered from the preset skin tones (see [`shadow_for_skin`]).

use std::fmt;

use serde::{Deserialize, Serialize};

use super::colour::Colour;
use super::presets::shadow_for_skin;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Gender {
    #[default]
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Gender {
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Build {
    Slim,
    #[default]
    Normal,
    Heavy,
}

impl Build {
    pub const ALL: [Build; 3] = [Build::Slim, Build::Normal, Build::Heavy];

    pub const fn as_str(self) -> &'static str {
        match self {
            Build::Slim => "slim",
            Build::Normal => "normal",
            Build::Heavy => "heavy",
        }
    }

    /// Horizontal offset added to left-side limbs and subtracted from right-side ones.
    pub const fn offset(self) -> i32 {
        match self {
            Build::Slim => -2,
            Build::Normal => 0,
            Build::Heavy => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HairStyle {
    #[default]
    Short,
    Long,
    Mohawk,
    Bald,
    Ponytail,
}

impl HairStyle {
    pub const ALL: [HairStyle; 5] = [
        HairStyle::Short,
        HairStyle::Long,
        HairStyle::Mohawk,
        HairStyle::Bald,
        HairStyle::Ponytail,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            HairStyle::Short => "short",
            HairStyle::Long => "long",
            HairStyle::Mohawk => "mohawk",
            HairStyle::Bald => "bald",
            HairStyle::Ponytail => "ponytail",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CostumeType {
    #[default]
    Trunks,
    Tights,
    Singlet,
    Shorts,
}

impl CostumeType {
    pub const ALL: [CostumeType; 4] = [
        CostumeType::Trunks,
        CostumeType::Tights,
        CostumeType::Singlet,
        CostumeType::Shorts,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            CostumeType::Trunks => "trunks",
            CostumeType::Tights => "tights",
            CostumeType::Singlet => "singlet",
            CostumeType::Shorts => "shorts",
        }
    }

    /// Whether the legs are covered by the costume rather than bare skin.
    pub const fn covers_legs(self) -> bool {
        matches!(self, CostumeType::Tights | CostumeType::Singlet)
    }

    /// Whether the torso is covered by the costume rather than bare skin.
    pub const fn covers_torso(self) -> bool {
        matches!(self, CostumeType::Singlet)
    }

    /// Height of the waist band, if this costume has one.
    pub const fn trunk_height(self) -> Option<i32> {
        match self {
            CostumeType::Trunks => Some(8),
            CostumeType::Shorts => Some(12),
            CostumeType::Tights | CostumeType::Singlet => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BootsType {
    #[default]
    Short,
    Tall,
    Bare,
}

impl BootsType {
    pub const ALL: [BootsType; 3] = [BootsType::Short, BootsType::Tall, BootsType::Bare];

    pub const fn as_str(self) -> &'static str {
        match self {
            BootsType::Short => "short",
            BootsType::Tall => "tall",
            BootsType::Bare => "bare",
        }
    }

    /// Boot shaft height in pixels.
    pub const fn shaft_height(self) -> i32 {
        match self {
            BootsType::Short => 5,
            BootsType::Tall => 10,
            BootsType::Bare => 0,
        }
    }

    pub const fn is_bare(self) -> bool {
        matches!(self, BootsType::Bare)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessory {
    #[default]
    None,
    Mask,
    Bandana,
    Glasses,
}

impl Accessory {
    pub const ALL: [Accessory; 4] = [
        Accessory::None,
        Accessory::Mask,
        Accessory::Bandana,
        Accessory::Glasses,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Accessory::None => "none",
            Accessory::Mask => "mask",
            Accessory::Bandana => "bandana",
            Accessory::Glasses => "glasses",
        }
    }
}

/// Every visual attribute of one wrestler avatar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "AppearanceRecord")]
pub struct AppearanceDescriptor {
    pub gender: Gender,
    pub build: Build,
    pub skin_color: Colour,
    pub skin_shadow: Colour,
    pub hair_style: HairStyle,
    pub hair_color: Colour,
    pub costume_type: CostumeType,
    pub costume_color: Colour,
    pub boots_type: BootsType,
    pub accessory: Accessory,
}

impl Default for AppearanceDescriptor {
    /// The appearance a new wrestler starts with in the creation screen.
    fn default() -> Self {
        Self {
            gender: Gender::Male,
            build: Build::Normal,
            skin_color: Colour::rgb(0xf5, 0xc5, 0xa3),
            skin_shadow: Colour::rgb(0xe8, 0xa8, 0x82),
            hair_style: HairStyle::Short,
            hair_color: Colour::rgb(0x2c, 0x18, 0x10),
            costume_type: CostumeType::Trunks,
            costume_color: Colour::rgb(0xff, 0x2d, 0x55),
            boots_type: BootsType::Short,
            accessory: Accessory::None,
        }
    }
}

/// Wire form accepted on input; `skin_shadow` is optional there and any
/// missing field takes the creation screen's starting value.
#[derive(Deserialize)]
#[serde(default)]
struct AppearanceRecord {
    gender: Gender,
    build: Build,
    #[serde(deserialize_with = "opaque::colour")]
    skin_color: Colour,
    #[serde(default, alias = "skin_dark", deserialize_with = "opaque::optional_colour")]
    skin_shadow: Option<Colour>,
    hair_style: HairStyle,
    #[serde(deserialize_with = "opaque::colour")]
    hair_color: Colour,
    costume_type: CostumeType,
    #[serde(deserialize_with = "opaque::colour")]
    costume_color: Colour,
    boots_type: BootsType,
    accessory: Accessory,
}

/// Appearance colours are read in the strict `#RRGGBB` form, so every fill
/// the compositor paints is opaque.
mod opaque {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    use super::Colour;

    pub fn colour<'de, D>(deserializer: D) -> Result<Colour, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Colour::from_hex6(&s).map_err(D::Error::custom)
    }

    pub fn optional_colour<'de, D>(deserializer: D) -> Result<Option<Colour>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<String>::deserialize(deserializer)?
            .map(|s| Colour::from_hex6(&s).map_err(D::Error::custom))
            .transpose()
    }
}

impl Default for AppearanceRecord {
    fn default() -> Self {
        let d = AppearanceDescriptor::default();
        Self {
            gender: d.gender,
            build: d.build,
            skin_color: d.skin_color,
            skin_shadow: None,
            hair_style: d.hair_style,
            hair_color: d.hair_color,
            costume_type: d.costume_type,
            costume_color: d.costume_color,
            boots_type: d.boots_type,
            accessory: d.accessory,
        }
    }
}

impl From<AppearanceRecord> for AppearanceDescriptor {
    fn from(record: AppearanceRecord) -> Self {
        Self {
            gender: record.gender,
            build: record.build,
            skin_color: record.skin_color,
            skin_shadow: record
                .skin_shadow
                .unwrap_or_else(|| shadow_for_skin(record.skin_color)),
            hair_style: record.hair_style,
            hair_color: record.hair_color,
            costume_type: record.costume_type,
            costume_color: record.costume_color,
            boots_type: record.boots_type,
            accessory: record.accessory,
        }
    }
}

impl fmt::Display for AppearanceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {} boots",
            self.build.as_str(),
            self.hair_style.as_str(),
            self.costume_type.as_str(),
            self.boots_type.as_str(),
        )?;
        if self.accessory != Accessory::None {
            write!(f, ", {}", self.accessory.as_str())?;
        }
        Ok(())
    }
}
