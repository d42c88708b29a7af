//! PNG output for rendered avatars.
//!
//! Avatars are tiny, so they are written with integer nearest-neighbour
//! upscaling to keep pixel edges crisp.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{RingsideError, Result};
use crate::types::Colour;

/// Largest integer upscale. A 64×64 avatar becomes 4096×4096.
pub const MAX_SCALE: u32 = 64;

/// Write a pixel grid to a PNG file.
///
/// # Arguments
///
/// * `pixels` - Row-major pixel grid (an avatar's or a sheet's)
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling, capped at [`MAX_SCALE`])
pub fn write_png(pixels: &[Vec<Colour>], path: &Path, scale: u32) -> Result<()> {
    let img = to_image(pixels, scale);

    img.save(path).map_err(|e| RingsideError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Build an RGBA image from a pixel grid, upscaled by `scale`.
pub fn to_image(pixels: &[Vec<Colour>], scale: u32) -> RgbaImage {
    let scaled = scale_pixels(pixels, scale);

    let height = scaled.len() as u32;
    let width = scaled.first().map_or(0, |r| r.len()) as u32;

    let mut img: RgbaImage = ImageBuffer::new(width, height);
    for (y, row) in scaled.iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgba(colour.to_rgba()));
        }
    }

    img
}

/// Scale a pixel grid by an integer factor, nearest-neighbour.
pub fn scale_pixels(pixels: &[Vec<Colour>], scale: u32) -> Vec<Vec<Colour>> {
    if scale <= 1 {
        return pixels.to_vec();
    }

    let scale = scale.min(MAX_SCALE) as usize;
    pixels
        .iter()
        .flat_map(|row| {
            let scaled: Vec<Colour> = row
                .iter()
                .flat_map(|&c| std::iter::repeat(c).take(scale))
                .collect();
            std::iter::repeat(scaled).take(scale)
        })
        .collect()
}
