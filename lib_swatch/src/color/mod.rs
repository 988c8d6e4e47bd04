pub mod parse;

use std::fmt;
use std::str::FromStr;

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

pub use parse::{parse_color, parse_palette, MalformedColorError};

/// An opaque 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl FromStr for Color {
    type Err = MalformedColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(0, s)
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl From<Color> for image::Rgb<u8> {
    fn from(color: Color) -> Self {
        image::Rgb(color.to_array())
    }
}

impl From<Color> for Rgb888 {
    fn from(color: Color) -> Self {
        Rgb888::new(color.r, color.g, color.b)
    }
}

impl From<Rgb888> for Color {
    fn from(color: Rgb888) -> Self {
        Self::new(color.r(), color.g(), color.b())
    }
}

/// An ordered list of colors. Order decides placement: left to right, then
/// top to bottom.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Color> {
        self.colors.iter()
    }

    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }
}

impl FromStr for Palette {
    type Err = MalformedColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_palette(s)
    }
}

impl FromIterator<Color> for Palette {
    fn from_iter<I: IntoIterator<Item = Color>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_display_is_upper_hex() {
        assert_eq!(Color::new(255, 8, 171).to_string(), "#FF08AB");
    }

    #[test]
    fn test_color_from_str() {
        let color: Color = "#0a0B0c".parse().unwrap();
        assert_eq!(color, Color::new(10, 11, 12));
    }

    #[test]
    fn test_color_rgb888_conversion() {
        let color = Color::new(1, 2, 3);
        let converted: Rgb888 = color.into();
        assert_eq!(Color::from(converted), color);
    }

    #[test]
    fn test_palette_get_out_of_range() {
        let palette: Palette = [Color::BLACK, Color::WHITE].into_iter().collect();
        assert_eq!(palette.len(), 2);
        assert_eq!(palette.get(1), Some(Color::WHITE));
        assert_eq!(palette.get(2), None);
    }
}
