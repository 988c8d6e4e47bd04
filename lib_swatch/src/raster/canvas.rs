use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::{DrawTarget, OriginDimensions, Pixel, Size};
use thiserror::Error;

use crate::color::Color;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CanvasError {
    #[error("coordinates ({x}, {y}) are out of bounds for a {width}x{height} canvas")]
    OutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
}

/// A row-major RGB pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Canvas {
    pub fn new(width: u32, height: u32, fill: Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width as usize * height as usize],
        }
    }

    pub(crate) fn from_pixels(width: u32, height: u32, pixels: Vec<Color>) -> Self {
        debug_assert_eq!(pixels.len(), width as usize * height as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        (x < self.width && y < self.height).then(|| y as usize * self.width as usize + x as usize)
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) -> Result<(), CanvasError> {
        let index = self.index(x, y).ok_or(CanvasError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })?;
        self.pixels[index] = color;
        Ok(())
    }

    /// Flattens the canvas into an `image` buffer for encoding.
    pub fn into_rgb_image(self) -> Option<image::RgbImage> {
        let raw = self.pixels.iter().flat_map(|c| c.to_array()).collect();
        image::RgbImage::from_raw(self.width, self.height, raw)
    }
}

impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

// Pixels outside the canvas are dropped.
impl DrawTarget for Canvas {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            let (Ok(x), Ok(y)) = (u32::try_from(point.x), u32::try_from(point.y)) else {
                continue;
            };
            if let Some(index) = self.index(x, y) {
                self.pixels[index] = color.into();
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::prelude::Point;

    #[test]
    fn test_canvas_new_fills() {
        let canvas = Canvas::new(3, 2, Color::WHITE);
        assert_eq!(canvas.pixels().len(), 6);
        assert!(canvas.pixels().iter().all(|&c| c == Color::WHITE));
    }

    #[test]
    fn test_canvas_set_and_get() {
        let mut canvas = Canvas::new(4, 4, Color::BLACK);
        canvas.set_pixel(3, 1, Color::WHITE).unwrap();
        assert_eq!(canvas.pixel(3, 1), Some(Color::WHITE));
        assert_eq!(canvas.pixels()[7], Color::WHITE);
        assert_eq!(canvas.pixel(4, 1), None);
    }

    #[test]
    fn test_canvas_set_out_of_bounds() {
        let mut canvas = Canvas::new(2, 2, Color::BLACK);
        assert_eq!(
            canvas.set_pixel(2, 0, Color::WHITE),
            Err(CanvasError::OutOfBounds {
                x: 2,
                y: 0,
                width: 2,
                height: 2
            })
        );
    }

    #[test]
    fn test_draw_target_clips() {
        let mut canvas = Canvas::new(2, 2, Color::BLACK);
        canvas
            .draw_iter([
                Pixel(Point::new(-1, 0), Rgb888::new(255, 255, 255)),
                Pixel(Point::new(1, 1), Rgb888::new(255, 255, 255)),
                Pixel(Point::new(2, 1), Rgb888::new(255, 255, 255)),
            ])
            .unwrap();
        assert_eq!(
            canvas.pixels(),
            &[Color::BLACK, Color::BLACK, Color::BLACK, Color::WHITE]
        );
    }

    #[test]
    fn test_into_rgb_image() {
        let mut canvas = Canvas::new(2, 1, Color::BLACK);
        canvas.set_pixel(1, 0, Color::new(1, 2, 3)).unwrap();
        let image = canvas.into_rgb_image().unwrap();
        assert_eq!(image.dimensions(), (2, 1));
        assert_eq!(image.get_pixel(1, 0).0, [1, 2, 3]);
    }
}
