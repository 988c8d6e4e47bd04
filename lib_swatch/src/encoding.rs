use std::io::Cursor;

use image::{ImageError, ImageFormat};
use log::{debug, error, info};
use thiserror::Error;

use crate::raster::Canvas;

#[derive(Error, Debug)]
pub enum EncodingError {
    #[error("Cannot encode an empty {0}x{1} canvas")]
    EmptyCanvas(u32, u32),
    #[error("Canvas buffer does not match its dimensions")]
    BufferMismatch,
    #[error("PNG encoding failed: {0}")]
    Image(#[from] ImageError),
}

/// Encodes `canvas` as PNG. The canvas is consumed.
pub fn encode_png(canvas: Canvas) -> Result<Vec<u8>, EncodingError> {
    info!("Starting PNG encoding");

    let (width, height) = canvas.dimensions();
    if canvas.is_empty() {
        error!("Refusing to encode a {}x{} canvas", width, height);
        return Err(EncodingError::EmptyCanvas(width, height));
    }

    let image = canvas.into_rgb_image().ok_or_else(|| {
        error!("Pixel buffer does not fit {}x{}", width, height);
        EncodingError::BufferMismatch
    })?;

    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, ImageFormat::Png)?;
    let png = buf.into_inner();
    debug!("Encoded {}x{} canvas into {} bytes", width, height, png.len());

    info!("PNG encoding completed successfully");
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    #[test]
    fn test_encode_png_signature() {
        let png = encode_png(Canvas::new(4, 4, Color::WHITE)).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn test_encode_empty_canvas() {
        let result = encode_png(Canvas::new(0, 0, Color::WHITE));
        assert!(matches!(result, Err(EncodingError::EmptyCanvas(0, 0))));

        let result = encode_png(Canvas::new(5, 0, Color::WHITE));
        assert!(matches!(result, Err(EncodingError::EmptyCanvas(5, 0))));
    }
}
