//! Plan command implementation.
//!
//! Prints the paint plan for one wrestler as JSON, so tools outside
//! Rust can draw the same avatar.

use std::path::PathBuf;

use clap::Args;
use serde::Serialize;

use crate::error::{RingsideError, Result};
use crate::render::{paint_plan, Layer, PaintCommand, PaintKind, Rect};
use crate::types::Wrestler;

/// Print the paint plan for one wrestler as JSON
#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Wrestler file to plan
    pub file: PathBuf,

    /// Emit compact JSON on a single line
    #[arg(long)]
    pub compact: bool,
}

/// A paint command with its colour in CSS form.
#[derive(Debug, Serialize)]
pub struct PlanEntry {
    pub layer: Layer,
    pub kind: PaintKind,
    #[serde(flatten)]
    pub rect: Rect,
    pub colour: String,
}

impl From<&PaintCommand> for PlanEntry {
    fn from(command: &PaintCommand) -> Self {
        Self {
            layer: command.layer,
            kind: command.kind,
            rect: command.rect,
            colour: command.colour.to_css(),
        }
    }
}

pub fn run(args: PlanArgs) -> Result<()> {
    let wrestler = Wrestler::load(&args.file)?;
    println!("{}", plan_json(&wrestler, args.compact)?);
    Ok(())
}

/// Serialize a wrestler's paint plan.
pub fn plan_json(wrestler: &Wrestler, compact: bool) -> Result<String> {
    let entries: Vec<PlanEntry> = paint_plan(&wrestler.appearance)
        .iter()
        .map(PlanEntry::from)
        .collect();

    let json = if compact {
        serde_json::to_string(&entries)
    } else {
        serde_json::to_string_pretty(&entries)
    };

    json.map_err(|e| RingsideError::Encode {
        what: "paint plan",
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Accessory, HairStyle};

    #[test]
    fn test_plan_json_shape() {
        let w = Wrestler::default();
        let json = plan_json(&w, true).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();

        assert_eq!(entries.len(), paint_plan(&w.appearance).len());
        let first = &entries[0];
        assert_eq!(first["layer"], "boots");
        assert_eq!(first["kind"], "fill");
        assert!(first["x"].is_i64());
        assert!(first["colour"].as_str().unwrap().starts_with("rgb("));
    }

    #[test]
    fn test_plan_json_mohawk_keeps_negative_y() {
        let mut w = Wrestler::default();
        w.appearance.hair_style = HairStyle::Mohawk;
        let json = plan_json(&w, false).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        assert!(entries.iter().any(|e| e["layer"] == "hair" && e["y"] == -2));
    }

    #[test]
    fn test_plan_json_glasses_are_strokes() {
        let mut w = Wrestler::default();
        w.appearance.accessory = Accessory::Glasses;
        let json = plan_json(&w, true).unwrap();
        let entries: Vec<serde_json::Value> = serde_json::from_str(&json).unwrap();
        let strokes = entries.iter().filter(|e| e["kind"] == "stroke").count();
        assert_eq!(strokes, 2);
    }
}
