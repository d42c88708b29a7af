//! Roster sheet packer.
//!
//! Lays avatars out on a near-square grid in input order. Outputs a
//! TexturePacker-compatible JSON Hash format for game engine interop.

use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{RingsideError, Result};
use crate::types::Colour;

use super::canvas::{Avatar, AVATAR_SIZE};

/// A frame in the roster sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub name: String,
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Roster sheet metadata.
#[derive(Debug, Clone)]
pub struct SheetMeta {
    pub frames: Vec<Frame>,
    pub image: String,
    pub size: (u32, u32),
    pub scale: u32,
}

/// Packed sheet pixels (row-major).
pub type SheetPixels = Vec<Vec<Colour>>;

/// Claim `name` in `taken`, suffixing `-2`, `-3`, ... until it is free.
///
/// A suffixed candidate may itself collide with a later literal name
/// ("venom", "venom", "venom-2"), so every emitted name is recorded.
pub fn unique_name(taken: &mut HashSet<String>, name: &str) -> String {
    let mut candidate = name.to_string();
    let mut n = 1;
    while taken.contains(&candidate) {
        n += 1;
        candidate = format!("{}-{}", name, n);
    }
    taken.insert(candidate.clone());
    candidate
}

/// Grid packer for avatars.
pub struct SheetPacker {
    pub padding: u32,
}

impl SheetPacker {
    pub fn new(padding: u32) -> Self {
        Self { padding }
    }

    /// Pack avatars into a roster sheet.
    ///
    /// Returns the composited pixels and frame metadata. Frame names are made
    /// unique by suffixing repeats with `-2`, `-3`, ...
    pub fn pack(&self, avatars: &[Avatar]) -> (SheetPixels, SheetMeta) {
        let count = avatars.len() as u32;
        let columns = (count as f64).sqrt().ceil() as u32;
        let rows = if columns == 0 { 0 } else { count.div_ceil(columns) };

        let cell = AVATAR_SIZE as u32;
        let span = |n: u32| if n == 0 { 0 } else { n * cell + (n - 1) * self.padding };
        let (width, height) = (span(columns), span(rows));

        let mut pixels = vec![vec![Colour::TRANSPARENT; width as usize]; height as usize];
        let mut frames = Vec::with_capacity(avatars.len());
        let mut taken = HashSet::new();

        for (i, avatar) in avatars.iter().enumerate() {
            let i = i as u32;
            let x = (i % columns) * (cell + self.padding);
            let y = (i / columns) * (cell + self.padding);

            for (sy, row) in avatar.pixels().iter().enumerate() {
                let dst = &mut pixels[y as usize + sy][x as usize..x as usize + AVATAR_SIZE];
                dst.copy_from_slice(row);
            }

            let name = unique_name(&mut taken, &avatar.name);

            frames.push(Frame {
                name,
                x,
                y,
                w: cell,
                h: cell,
            });
        }

        let meta = SheetMeta {
            frames,
            image: "roster.png".to_string(),
            size: (width, height),
            scale: 1,
        };

        (pixels, meta)
    }
}

/// Write sheet metadata as TexturePacker-compatible JSON Hash format.
pub fn write_sheet_json(meta: &SheetMeta, path: &Path) -> Result<()> {
    let output = TexturePackerJson::from_meta(meta);
    let json = serde_json::to_string_pretty(&output).map_err(|e| RingsideError::Encode {
        what: "sheet metadata",
        message: e.to_string(),
    })?;
    fs::write(path, json).map_err(|e| RingsideError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write sheet metadata: {}", e),
    })?;
    Ok(())
}

// --- TexturePacker JSON serialization types ---

#[derive(Serialize)]
struct TexturePackerJson {
    frames: BTreeMap<String, TPFrame>,
    meta: TPMeta,
}

#[derive(Serialize)]
struct TPFrame {
    frame: TPRect,
    rotated: bool,
    trimmed: bool,
    #[serde(rename = "spriteSourceSize")]
    sprite_source_size: TPRect,
    #[serde(rename = "sourceSize")]
    source_size: TPSize,
}

#[derive(Serialize)]
struct TPRect {
    x: u32,
    y: u32,
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPSize {
    w: u32,
    h: u32,
}

#[derive(Serialize)]
struct TPMeta {
    app: String,
    version: String,
    image: String,
    size: TPSize,
    scale: String,
}

impl TexturePackerJson {
    fn from_meta(meta: &SheetMeta) -> Self {
        let s = meta.scale;
        let frames = meta
            .frames
            .iter()
            .map(|f| {
                let frame = TPFrame {
                    frame: TPRect {
                        x: f.x * s,
                        y: f.y * s,
                        w: f.w * s,
                        h: f.h * s,
                    },
                    rotated: false,
                    trimmed: false,
                    sprite_source_size: TPRect {
                        x: 0,
                        y: 0,
                        w: f.w * s,
                        h: f.h * s,
                    },
                    source_size: TPSize { w: f.w * s, h: f.h * s },
                };
                (f.name.clone(), frame)
            })
            .collect();

        TexturePackerJson {
            frames,
            meta: TPMeta {
                app: "ringside".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                image: meta.image.clone(),
                size: TPSize {
                    w: meta.size.0 * s,
                    h: meta.size.1 * s,
                },
                scale: meta.scale.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render;
    use crate::types::{AppearanceDescriptor, HairStyle};

    fn avatars(names: &[&str]) -> Vec<Avatar> {
        names
            .iter()
            .map(|n| render(&AppearanceDescriptor::default()).with_name(*n))
            .collect()
    }

    #[test]
    fn test_pack_empty() {
        let (pixels, meta) = SheetPacker::new(0).pack(&[]);
        assert!(pixels.is_empty());
        assert_eq!(meta.size, (0, 0));
        assert!(meta.frames.is_empty());
    }

    #[test]
    fn test_pack_single() {
        let (pixels, meta) = SheetPacker::new(4).pack(&avatars(&["a"]));
        assert_eq!(meta.size, (64, 64));
        assert_eq!(pixels.len(), 64);
        assert_eq!(meta.frames[0], Frame { name: "a".into(), x: 0, y: 0, w: 64, h: 64 });
    }

    #[test]
    fn test_pack_grid_with_padding() {
        let (pixels, meta) = SheetPacker::new(2).pack(&avatars(&["a", "b", "c"]));

        // 3 avatars -> 2 columns, 2 rows
        assert_eq!(meta.size, (130, 130));
        assert_eq!(pixels.len(), 130);
        assert_eq!(pixels[0].len(), 130);

        let origins: Vec<(u32, u32)> = meta.frames.iter().map(|f| (f.x, f.y)).collect();
        assert_eq!(origins, vec![(0, 0), (66, 0), (0, 66)]);

        // Padding gutter stays transparent
        assert!(pixels[10][64].is_transparent());
        assert!(pixels[10][65].is_transparent());
    }

    #[test]
    fn test_pack_preserves_pixels() {
        let mut bald = AppearanceDescriptor::default();
        bald.hair_style = HairStyle::Bald;
        let list = vec![
            render(&AppearanceDescriptor::default()).with_name("haired"),
            render(&bald).with_name("bald"),
        ];

        let (pixels, meta) = SheetPacker::new(0).pack(&list);
        for (frame, avatar) in meta.frames.iter().zip(&list) {
            for (x, y) in [(22usize, 4usize), (30, 20), (20, 54)] {
                assert_eq!(
                    pixels[frame.y as usize + y][frame.x as usize + x],
                    avatar.get(x, y).unwrap()
                );
            }
        }
    }

    #[test]
    fn test_duplicate_names_are_suffixed() {
        let (_, meta) = SheetPacker::new(0).pack(&avatars(&["rookie", "rookie", "rookie"]));
        let names: Vec<&str> = meta.frames.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["rookie", "rookie-2", "rookie-3"]);
    }

    #[test]
    fn test_suffixed_name_does_not_collide_with_literal() {
        let (_, meta) = SheetPacker::new(0).pack(&avatars(&["venom", "venom", "venom-2"]));
        let names: Vec<&str> = meta.frames.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["venom", "venom-2", "venom-2-2"]);

        let unique: HashSet<&str> = names.iter().copied().collect();
        assert_eq!(unique.len(), names.len());
    }

    #[test]
    fn test_write_sheet_json() {
        let (_, mut meta) = SheetPacker::new(0).pack(&avatars(&["a", "b"]));
        meta.scale = 3;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.json");
        write_sheet_json(&meta, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();

        assert_eq!(parsed["frames"]["b"]["frame"]["x"], 192);
        assert_eq!(parsed["frames"]["b"]["frame"]["w"], 192);
        assert_eq!(parsed["frames"]["a"]["rotated"], false);
        assert_eq!(parsed["meta"]["app"], "ringside");
        assert_eq!(parsed["meta"]["image"], "roster.png");
        assert_eq!(parsed["meta"]["size"]["w"], 384);
        assert_eq!(parsed["meta"]["scale"], "3");
    }
}
