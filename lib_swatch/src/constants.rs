use crate::color::Color;

/// Color used for grid cells that have no palette entry.
pub const FALLBACK_COLOR: Color = Color::new(240, 240, 240);

pub const PREVIEW_BLOCK_SIZE: u32 = 16;
pub const PALETTE_BLOCK_SIZE: u32 = 64;
pub const WRAP_THRESHOLD: usize = 6;

/// Largest block size accepted from a request.
pub const MAX_BLOCK_SIZE: u32 = 256;

/// Upper bound on rendered pixels per image.
pub const MAX_CANVAS_PIXELS: u64 = 512 * 512;

pub const STATUS_IMAGE_WIDTH: u32 = 200;
pub const STATUS_IMAGE_HEIGHT: u32 = 120;
pub const STATUS_BACKGROUND: Color = Color::new(32, 32, 32);
pub const STATUS_FOREGROUND: Color = Color::new(240, 240, 240);

pub const PALETTE_SEPARATOR: char = ',';
