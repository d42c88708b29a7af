//! Rendering module for ringside.
//!
//! Turns an appearance descriptor into a paint plan, applies the plan to a
//! 64×64 avatar, and writes avatars (or a packed roster sheet) to PNG.

mod canvas;
mod paint;
mod png;
mod sheet;

pub use canvas::{render, render_into, Avatar, AVATAR_SIZE};
pub use paint::{paint_plan, Layer, PaintCommand, PaintKind, Rect};
pub use png::{scale_pixels, to_image, write_png, MAX_SCALE};
pub use sheet::{unique_name, write_sheet_json, Frame, SheetMeta, SheetPacker, SheetPixels};
