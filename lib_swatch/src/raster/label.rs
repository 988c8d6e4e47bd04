use embedded_graphics::mono_font::{ascii::FONT_10X20, MonoFont, MonoTextStyle};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{Point, Size};
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text};
use embedded_graphics::Drawable;
use log::debug;

use super::canvas::Canvas;
use crate::color::Color;

/// The one font labels are set in. Monospace, so every glyph shares the
/// same cell size.
pub const LABEL_FONT: &MonoFont<'static> = &FONT_10X20;

/// A short single-line string centered on a pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label<'a> {
    pub text: &'a str,
    pub center: Point,
}

impl<'a> Label<'a> {
    pub fn new(text: &'a str, center: Point) -> Self {
        Self { text, center }
    }

    /// Pixel size of the rendered text.
    pub fn size(&self) -> Size {
        let glyphs = self.text.chars().count() as u32;
        let glyph = LABEL_FONT.character_size;
        let width = glyphs * glyph.width + glyphs.saturating_sub(1) * LABEL_FONT.character_spacing;
        Size::new(width, glyph.height)
    }

    pub fn bounding_box(&self) -> Rectangle {
        let size = self.size();
        let top_left = self.center - Point::new(size.width as i32 / 2, size.height as i32 / 2);
        Rectangle::new(top_left, size)
    }

    /// Draws the label onto `canvas` and returns the area it covers. Glyph
    /// pixels past the canvas edge are clipped.
    pub fn draw(&self, canvas: &mut Canvas, color: Color) -> Rectangle {
        let area = self.bounding_box();
        let style = MonoTextStyle::new(LABEL_FONT, Rgb888::from(color));

        debug!("Drawing label {:?} at {:?}", self.text, area.top_left);
        match Text::with_baseline(self.text, area.top_left, style, Baseline::Top).draw(canvas) {
            Ok(_) => {}
            Err(never) => match never {},
        }
        area
    }
}
