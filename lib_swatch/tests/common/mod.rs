#![allow(dead_code)]

use lib_swatch::Color;

pub const RED: Color = Color::new(255, 0, 0);
pub const GREEN: Color = Color::new(0, 255, 0);
pub const BLUE: Color = Color::new(0, 0, 255);

pub const PRIMARIES: &str = "FF0000,00FF00,0000FF";

pub const EIGHT_COLORS: &str = "#000000,#111111,#222222,#333333,#444444,#555555,#666666,#777777";

pub fn gray(level: u8) -> Color {
    Color::new(level, level, level)
}

/// Decodes PNG bytes produced by the encoder back into pixels.
pub fn decode_png(bytes: &[u8]) -> image::RgbImage {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .unwrap()
        .to_rgb8()
}
