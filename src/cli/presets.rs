//! Presets command implementation.
//!
//! Lists the swatches the game's creation screen offers, or prints a starter
//! wrestler file built from them.

use clap::Args;

use crate::error::{RingsideError, Result};
use crate::types::{Wrestler, COSTUME_COLOURS, HAIR_COLOURS, SKIN_TONES};

/// List the game's skin, hair, and costume swatches
#[derive(Args, Debug)]
pub struct PresetsArgs {
    /// Print a starter wrestler file instead of the swatch list
    #[arg(long)]
    pub template: bool,
}

pub fn run(args: PresetsArgs) -> Result<()> {
    if args.template {
        print!("{}", template()?);
    } else {
        print!("{}", swatches());
    }
    Ok(())
}

/// Swatch listing, one colour per line, grouped by slot.
pub fn swatches() -> String {
    let mut out = String::from("skin:\n");
    for tone in &SKIN_TONES {
        out.push_str(&format!("  {} shadow {}\n", tone.light, tone.shadow));
    }

    out.push_str("hair:\n");
    for colour in &HAIR_COLOURS {
        out.push_str(&format!("  {}\n", colour));
    }

    out.push_str("costume:\n");
    for colour in &COSTUME_COLOURS {
        out.push_str(&format!("  {}\n", colour));
    }

    out
}

/// A default wrestler as YAML, ready to save as `<name>.wrestler.yaml`.
pub fn template() -> Result<String> {
    let wrestler = Wrestler {
        name: "New Wrestler".to_string(),
        ..Default::default()
    };
    serde_yaml::to_string(&wrestler).map_err(|e| RingsideError::Encode {
        what: "wrestler template",
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FileFormat;
    use crate::validation::validate_wrestler;

    #[test]
    fn test_swatches_list_every_preset() {
        let out = swatches();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3 + SKIN_TONES.len() + HAIR_COLOURS.len() + COSTUME_COLOURS.len());
        assert_eq!(lines[1], "  #f5c5a3 shadow #e8a882");
        assert!(out.contains("costume:\n  #ff2d55\n"));
    }

    #[test]
    fn test_template_loads_back_clean() {
        let yaml = template().unwrap();
        let wrestler = Wrestler::parse(&yaml, FileFormat::Yaml).unwrap();
        assert_eq!(wrestler.name, "New Wrestler");
        assert!(validate_wrestler(&wrestler).is_ok());
    }
}
