//! Avatar canvas - applies a paint plan to an owned 64×64 pixel grid.

use crate::types::{AppearanceDescriptor, Colour};

use super::paint::{paint_plan, PaintCommand, PaintKind};

/// Width and height of every avatar, in logical pixels.
pub const AVATAR_SIZE: usize = 64;

/// A rendered avatar - a fixed 64×64 grid of colours.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Avatar {
    /// Name used for output files and sheet frames.
    pub name: String,

    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,
}

impl Default for Avatar {
    fn default() -> Self {
        Self::new("avatar")
    }
}

impl Avatar {
    /// Create a fully transparent avatar.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pixels: vec![vec![Colour::TRANSPARENT; AVATAR_SIZE]; AVATAR_SIZE],
        }
    }

    /// Rename, keeping the pixels.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn width(&self) -> usize {
        AVATAR_SIZE
    }

    pub fn height(&self) -> usize {
        AVATAR_SIZE
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        for row in &mut self.pixels {
            row.fill(Colour::TRANSPARENT);
        }
    }

    /// Paint one command, clipping anything outside the canvas.
    pub fn apply(&mut self, command: &PaintCommand) {
        let r = command.rect;
        match command.kind {
            PaintKind::Fill => {
                let x0 = clamp_axis(r.x);
                let x1 = clamp_axis(r.x.saturating_add(r.w));
                let y0 = clamp_axis(r.y);
                let y1 = clamp_axis(r.y.saturating_add(r.h));
                for row in &mut self.pixels[y0..y1.max(y0)] {
                    if x1 > x0 {
                        row[x0..x1].fill(command.colour);
                    }
                }
            }
            PaintKind::Stroke => {
                for x in r.x..=r.x + r.w {
                    self.set(x, r.y, command.colour);
                    self.set(x, r.y + r.h, command.colour);
                }
                for y in r.y..=r.y + r.h {
                    self.set(r.x, y, command.colour);
                    self.set(r.x + r.w, y, command.colour);
                }
            }
        }
    }

    fn set(&mut self, x: i32, y: i32, colour: Colour) {
        if (0..AVATAR_SIZE as i32).contains(&x) && (0..AVATAR_SIZE as i32).contains(&y) {
            self.pixels[y as usize][x as usize] = colour;
        }
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(AVATAR_SIZE * AVATAR_SIZE * 4);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgba());
            }
        }
        buffer
    }
}

fn clamp_axis(v: i32) -> usize {
    v.clamp(0, AVATAR_SIZE as i32) as usize
}

/// Render a descriptor to a new avatar.
pub fn render(descriptor: &AppearanceDescriptor) -> Avatar {
    let mut avatar = Avatar::default();
    render_into(descriptor, &mut avatar);
    avatar
}

/// Render a descriptor into a caller-owned avatar, replacing its pixels.
pub fn render_into(descriptor: &AppearanceDescriptor, avatar: &mut Avatar) {
    avatar.clear();
    for command in paint_plan(descriptor) {
        avatar.apply(&command);
    }
}
