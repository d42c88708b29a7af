//! Paint plan - the ordered list of sprite fragments for one avatar.
//!
//! Later commands overwrite earlier ones where they overlap. Every command is
//! fully opaque, so the plan is a plain back-to-front stack with no blending.

use serde::Serialize;

use crate::types::{Accessory, AppearanceDescriptor, Colour, Gender, HairStyle};

/// Dark fill for the open eyes.
const EYE: Colour = Colour::rgb(0x1a, 0x1a, 0x1a);

/// Frame colour for glasses.
const GLASSES: Colour = Colour::rgb(0x33, 0x33, 0x33);

/// An axis-aligned pixel rectangle. May extend past the canvas edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Whether the pixel at (`px`, `py`) lies inside the filled area.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px < self.x + self.w && py >= self.y && py < self.y + self.h
    }
}

/// Body region a command belongs to, in paint order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layer {
    Boots,
    Legs,
    Trunks,
    Torso,
    Arms,
    Head,
    Hair,
    Accessory,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaintKind {
    /// Solid rectangle.
    Fill,
    /// One-pixel outline from (x, y) to (x + w, y + h) inclusive.
    Stroke,
}

/// One sprite fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaintCommand {
    pub layer: Layer,
    pub kind: PaintKind,
    pub rect: Rect,
    pub colour: Colour,
}

/// Collects commands, tagging each with the current layer.
struct Plan {
    commands: Vec<PaintCommand>,
    layer: Layer,
}

impl Plan {
    fn new() -> Self {
        Self {
            commands: Vec::with_capacity(48),
            layer: Layer::Boots,
        }
    }

    fn layer(&mut self, layer: Layer) -> &mut Self {
        self.layer = layer;
        self
    }

    fn fill(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Colour) -> &mut Self {
        self.push(PaintKind::Fill, Rect::new(x, y, w, h), colour)
    }

    fn stroke(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Colour) -> &mut Self {
        self.push(PaintKind::Stroke, Rect::new(x, y, w, h), colour)
    }

    fn push(&mut self, kind: PaintKind, rect: Rect, colour: Colour) -> &mut Self {
        self.commands.push(PaintCommand {
            layer: self.layer,
            kind,
            rect,
            colour,
        });
        self
    }
}

/// Build the paint plan for a descriptor.
///
/// Paired parts are mirrored around x = 32: the build offset is added on the
/// left and subtracted on the right, and centred spans shrink or grow by
/// twice the offset.
pub fn paint_plan(d: &AppearanceDescriptor) -> Vec<PaintCommand> {
    let s = d.skin_color;
    let sd = d.skin_shadow;
    let cc = d.costume_color;
    let bw = d.build.offset();

    let mut plan = Plan::new();

    // Boots
    let boot = cc.darken(60);
    let boot_h = d.boots_type.shaft_height();
    plan.layer(Layer::Boots);
    if !d.boots_type.is_bare() {
        plan.fill(20 + bw, 53 - boot_h, 8, boot_h, boot)
            .fill(34 - bw, 53 - boot_h, 8, boot_h, boot);
    }
    let foot = if d.boots_type.is_bare() { sd } else { boot };
    plan.fill(19 + bw, 52, 10, 4, foot).fill(33 - bw, 52, 10, 4, foot);

    // Legs
    let legs = if d.costume_type.covers_legs() { cc } else { s };
    plan.layer(Layer::Legs)
        .fill(20 + bw, 38, 8, 14, legs)
        .fill(34 - bw, 38, 8, 14, legs);

    // Trunks / shorts
    if let Some(trunk_h) = d.costume_type.trunk_height() {
        plan.layer(Layer::Trunks)
            .fill(18 + bw, 34, 26 - bw * 2, trunk_h, cc)
            .fill(18 + bw, 34, 26 - bw * 2, 2, cc.lighten(20));
    }

    // Torso
    let torso = if d.costume_type.covers_torso() { cc } else { s };
    plan.layer(Layer::Torso).fill(18 + bw, 18, 26 - bw * 2, 16, torso);
    if d.gender == Gender::Male {
        plan.fill(20 + bw, 20, 10, 6, s.lighten(10))
            .fill(32 - bw, 20, 10, 6, s.lighten(10))
            .fill(20 + bw, 26, 22 - bw * 2, 2, sd);
    }

    // Arms: upper arm, elbow, hand
    plan.layer(Layer::Arms)
        .fill(10 + bw, 19, 8, 16, s)
        .fill(44 - bw, 19, 8, 16, s)
        .fill(11 + bw, 27, 6, 4, sd)
        .fill(45 - bw, 27, 6, 4, sd)
        .fill(10 + bw, 35, 8, 6, sd)
        .fill(44 - bw, 35, 8, 6, sd);

    // Head and face
    plan.layer(Layer::Head)
        .fill(22, 4, 20, 22, s)
        .fill(20, 6, 3, 6, sd)
        .fill(41, 6, 3, 6, sd)
        .fill(25, 10, 4, 3, EYE)
        .fill(35, 10, 4, 3, EYE)
        .fill(26, 10, 2, 2, Colour::WHITE)
        .fill(36, 10, 2, 2, Colour::WHITE)
        .fill(31, 16, 2, 3, sd)
        .fill(27, 21, 10, 2, sd)
        .fill(27, 20, 2, 2, sd)
        .fill(35, 20, 2, 2, sd)
        .fill(24, 23, 16, 2, sd)
        .fill(24, 5, 6, 3, s.lighten(25));

    // Hair
    let hc = d.hair_color;
    plan.layer(Layer::Hair);
    match d.hair_style {
        HairStyle::Bald => {}
        HairStyle::Short => {
            plan.fill(22, 4, 20, 7, hc)
                .fill(20, 6, 3, 4, hc)
                .fill(41, 6, 3, 4, hc);
        }
        HairStyle::Long => {
            plan.fill(22, 4, 20, 7, hc)
                .fill(19, 6, 3, 16, hc)
                .fill(42, 6, 3, 16, hc);
        }
        HairStyle::Mohawk => {
            plan.fill(29, 0, 6, 8, hc).fill(30, -2, 4, 4, hc);
        }
        HairStyle::Ponytail => {
            plan.fill(22, 4, 20, 7, hc).fill(42, 4, 4, 20, hc);
        }
    }

    // Accessory
    plan.layer(Layer::Accessory);
    match d.accessory {
        Accessory::None => {}
        Accessory::Mask => {
            plan.fill(22, 4, 20, 22, cc)
                .fill(25, 10, 4, 3, Colour::BLACK)
                .fill(35, 10, 4, 3, Colour::BLACK)
                .fill(26, 9, 4, 5, cc.lighten(40))
                .fill(34, 9, 4, 5, cc.lighten(40))
                .fill(29, 18, 6, 4, cc.lighten(30))
                .fill(31, 4, 2, 22, cc.darken(30));
        }
        Accessory::Bandana => {
            plan.fill(22, 4, 20, 5, cc).fill(42, 5, 4, 3, cc);
        }
        Accessory::Glasses => {
            plan.stroke(25, 9, 6, 5, GLASSES)
                .stroke(33, 9, 6, 5, GLASSES)
                .fill(31, 11, 2, 1, GLASSES);
        }
    }

    plan.commands
}
