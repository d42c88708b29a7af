//! ringside - pixel-art wrestler avatar compositor
//!
//! A library for turning wrestler appearance records into 64×64 pixel-art
//! avatars, with PNG output and roster sheet packing.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{discover, DiscoveryResult, Manifest};
pub use error::{Result, RingsideError};
pub use render::{
    paint_plan, render, render_into, scale_pixels, write_png, write_sheet_json, Avatar, Layer,
    PaintCommand, PaintKind, Rect, SheetMeta, SheetPacker, AVATAR_SIZE,
};
pub use types::{
    Accessory, AppearanceDescriptor, Attitude, BootsType, Build, Colour, CostumeType, Gender,
    HairStyle, StatKind, Stats, Wrestler,
};
pub use validation::{validate_wrestler, Diagnostic, Severity, ValidationResult};
