//! Wrestler profile: identity, stat block, and appearance.
//!
//! The serde layout follows a row of the game's `wrestlers` collection, so an
//! exported row loads directly: stats sit at the top level next to the
//! identity fields, and the appearance is a nested record. Columns this crate
//! has no use for (momentum, fan counts, training points) are ignored.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RingsideError, Result};

use super::appearance::AppearanceDescriptor;

/// Lowest value a stat slider allows.
pub const STAT_MIN: u8 = 30;

/// Highest value any single stat may reach.
pub const STAT_MAX: u8 = 85;

/// Value every stat starts at.
pub const STAT_DEFAULT: u8 = 60;

/// Budget shared by all five stats at creation time.
pub const STAT_TOTAL_MAX: u32 = 350;

/// Stats at or above this level grow more slowly in training.
pub const STAT_HIGH_LEVEL: u8 = 75;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Attitude {
    #[default]
    Face,
    Heel,
    Neutral,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatKind {
    Strength,
    Agility,
    Endurance,
    Technique,
    Charisma,
}

impl StatKind {
    pub const ALL: [StatKind; 5] = [
        StatKind::Strength,
        StatKind::Agility,
        StatKind::Endurance,
        StatKind::Technique,
        StatKind::Charisma,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            StatKind::Strength => "strength",
            StatKind::Agility => "agility",
            StatKind::Endurance => "endurance",
            StatKind::Technique => "technique",
            StatKind::Charisma => "charisma",
        }
    }
}

impl fmt::Display for StatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Stats {
    pub strength: u8,
    pub agility: u8,
    pub endurance: u8,
    pub technique: u8,
    pub charisma: u8,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            strength: STAT_DEFAULT,
            agility: STAT_DEFAULT,
            endurance: STAT_DEFAULT,
            technique: STAT_DEFAULT,
            charisma: STAT_DEFAULT,
        }
    }
}

impl Stats {
    pub fn get(&self, kind: StatKind) -> u8 {
        match kind {
            StatKind::Strength => self.strength,
            StatKind::Agility => self.agility,
            StatKind::Endurance => self.endurance,
            StatKind::Technique => self.technique,
            StatKind::Charisma => self.charisma,
        }
    }

    /// Sum of all five stats.
    pub fn total(&self) -> u32 {
        StatKind::ALL.iter().map(|&k| self.get(k) as u32).sum()
    }

    /// Stats in the slow-growth band, in `StatKind::ALL` order.
    pub fn high_level(&self) -> impl Iterator<Item = (StatKind, u8)> + '_ {
        StatKind::ALL
            .into_iter()
            .map(|k| (k, self.get(k)))
            .filter(|&(_, v)| v >= STAT_HIGH_LEVEL)
    }
}

/// On-disk encoding of a wrestler file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    Yaml,
    Json,
}

impl FileFormat {
    /// Pick the format from a file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => FileFormat::Json,
            _ => FileFormat::Yaml,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Wrestler {
    pub name: String,
    pub nickname: String,
    pub nationality: String,
    pub bio: String,
    pub attitude: Attitude,
    #[serde(flatten)]
    pub stats: Stats,
    pub appearance: AppearanceDescriptor,
}

impl Wrestler {
    /// Parse a wrestler from source text.
    pub fn parse(source: &str, format: FileFormat) -> Result<Self> {
        Self::decode(source, format).map_err(|message| RingsideError::Parse {
            message: format!("Invalid wrestler definition: {}", message),
            help: Some("Check the appearance fields against `ringside presets`".to_string()),
        })
    }

    fn decode(source: &str, format: FileFormat) -> std::result::Result<Self, String> {
        match format {
            FileFormat::Yaml => serde_yaml::from_str(source).map_err(|e| e.to_string()),
            FileFormat::Json => serde_json::from_str(source).map_err(|e| e.to_string()),
        }
    }

    /// Load a wrestler from a `.yaml`, `.yml` or `.json` file.
    pub fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path).map_err(|e| RingsideError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read wrestler file: {}", e),
        })?;

        Self::decode(&source, FileFormat::from_path(path)).map_err(|message| {
            RingsideError::Wrestler {
                path: path.to_path_buf(),
                message,
            }
        })
    }

    /// File-name friendly form of the ring name: `"The Crusher"` -> `the-crusher`.
    pub fn slug(&self) -> String {
        let mut slug = String::with_capacity(self.name.len());
        for c in self.name.trim().chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }
        while slug.ends_with('-') {
            slug.pop();
        }
        if slug.is_empty() {
            slug.push_str("wrestler");
        }
        slug
    }
}
