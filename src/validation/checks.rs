//! Validation checks for wrestler definitions.
//!
//! Each check takes a `&Wrestler` and returns a `ValidationResult`.

use palette::{Hsl, IntoColor, Srgb};

use crate::types::{
    skin_tone, Colour, StatKind, Wrestler, STAT_MAX, STAT_MIN, STAT_TOTAL_MAX,
};

use super::diagnostic::{Diagnostic, ValidationResult};

pub const EMPTY_NAME: &str = "ringside::validate::empty-name";
pub const STAT_RANGE: &str = "ringside::validate::stat-range";
pub const STAT_BUDGET: &str = "ringside::validate::stat-budget";
pub const SHADOW_LIGHTER: &str = "ringside::validate::shadow-lighter";
pub const CUSTOM_SKIN_TONE: &str = "ringside::validate::custom-skin-tone";

/// The ring name is required.
pub fn check_name(wrestler: &Wrestler) -> ValidationResult {
    let mut result = ValidationResult::new();

    if wrestler.name.trim().is_empty() {
        result.push(
            Diagnostic::error(EMPTY_NAME, &wrestler.name, "Wrestler has no ring name")
                .with_help("Set `name:` in the wrestler file"),
        );
    }

    result
}

/// Every stat must sit inside the creation slider's range.
pub fn check_stat_range(wrestler: &Wrestler) -> ValidationResult {
    let mut result = ValidationResult::new();

    for kind in StatKind::ALL {
        let value = wrestler.stats.get(kind);
        if !(STAT_MIN..=STAT_MAX).contains(&value) {
            result.push(
                Diagnostic::error(
                    STAT_RANGE,
                    &wrestler.name,
                    format!("{} is {} (allowed {}..={})", kind, value, STAT_MIN, STAT_MAX),
                )
                .with_help(format!("Pick a value between {} and {}", STAT_MIN, STAT_MAX)),
            );
        }
    }

    result
}

/// The five stats share one budget.
pub fn check_stat_budget(wrestler: &Wrestler) -> ValidationResult {
    let mut result = ValidationResult::new();

    let total = wrestler.stats.total();
    if total > STAT_TOTAL_MAX {
        result.push(
            Diagnostic::error(
                STAT_BUDGET,
                &wrestler.name,
                format!("Stats total {} (max {})", total, STAT_TOTAL_MAX),
            )
            .with_help(format!("Remove {} points across the stats", total - STAT_TOTAL_MAX)),
        );
    }

    result
}

/// Skin shading only reads as shadow when it is darker than the skin.
pub fn check_shadow_lightness(wrestler: &Wrestler) -> ValidationResult {
    let mut result = ValidationResult::new();

    let appearance = &wrestler.appearance;
    let skin = lightness(appearance.skin_color);
    let shadow = lightness(appearance.skin_shadow);
    if shadow >= skin {
        result.push(
            Diagnostic::warning(
                SHADOW_LIGHTER,
                &wrestler.name,
                format!(
                    "skin_shadow {} is not darker than skin_color {}",
                    appearance.skin_shadow, appearance.skin_color
                ),
            )
            .with_help("Remove skin_shadow to use the matching preset or a derived shade"),
        );
    }

    result
}

/// The game only stores the base skin colour, so custom tones lose their shadow there.
pub fn check_custom_skin_tone(wrestler: &Wrestler) -> ValidationResult {
    let mut result = ValidationResult::new();

    let skin = wrestler.appearance.skin_color;
    if skin_tone(skin).is_none() {
        result.push(
            Diagnostic::warning(
                CUSTOM_SKIN_TONE,
                &wrestler.name,
                format!("skin_color {} is not one of the game's skin tones", skin),
            )
            .with_help("Run `ringside presets` to list the available tones"),
        );
    }

    result
}

/// HSL lightness in 0.0..=1.0.
fn lightness(colour: Colour) -> f32 {
    let rgb: Srgb<f32> = Srgb::new(
        colour.r as f32 / 255.0,
        colour.g as f32 / 255.0,
        colour.b as f32 / 255.0,
    );
    let hsl: Hsl = rgb.into_color();
    hsl.lightness
}
