use log::{debug, error, info};
use thiserror::Error;

use super::canvas::Canvas;
use crate::color::{Color, Palette};
use crate::constants::{FALLBACK_COLOR, MAX_CANVAS_PIXELS};
use crate::layout::Layout;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CompositeError {
    #[error("Layout has {cells} cells but the palette has {colors} colors")]
    LayoutMismatch { cells: u64, colors: usize },
    #[error("Canvas of {width}x{height} exceeds the limit of {limit} pixels")]
    CanvasTooLarge { width: u32, height: u32, limit: u64 },
}

pub(crate) fn check_canvas_size(width: u32, height: u32) -> Result<(), CompositeError> {
    if width as u64 * height as u64 > MAX_CANVAS_PIXELS {
        error!(
            "Refusing {}x{} canvas, limit is {} pixels",
            width, height, MAX_CANVAS_PIXELS
        );
        return Err(CompositeError::CanvasTooLarge {
            width,
            height,
            limit: MAX_CANVAS_PIXELS,
        });
    }
    Ok(())
}

/// Fills a canvas sized by `layout` with one solid block per palette color.
///
/// Pixel `(x, y)` takes the color of cell `(x / block, y / block)` in
/// row-major order. Cells past the end of the palette get [`FALLBACK_COLOR`].
///
/// # Errors
/// - `CompositeError::LayoutMismatch` if the layout has fewer cells than colors
/// - `CompositeError::CanvasTooLarge` if the canvas exceeds `MAX_CANVAS_PIXELS`
pub fn composite(palette: &Palette, layout: &Layout) -> Result<Canvas, CompositeError> {
    if layout.cells() < palette.len() as u64 {
        error!(
            "Layout with {} cells cannot hold {} colors",
            layout.cells(),
            palette.len()
        );
        return Err(CompositeError::LayoutMismatch {
            cells: layout.cells(),
            colors: palette.len(),
        });
    }
    check_canvas_size(layout.width(), layout.height())?;

    let (width, height) = (layout.width(), layout.height());
    let mut pixels: Vec<Color> = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height {
        for x in 0..width {
            let color = layout
                .cell_index(x, y)
                .and_then(|cell| palette.get(cell))
                .unwrap_or(FALLBACK_COLOR);
            pixels.push(color);
        }
    }
    debug!("Filled {} pixels", pixels.len());

    info!(
        "Composited {} colors into a {}x{} canvas",
        palette.len(),
        width,
        height
    );
    Ok(Canvas::from_pixels(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{plan, LayoutConfig};

    const RED: Color = Color::new(255, 0, 0);
    const GREEN: Color = Color::new(0, 255, 0);

    #[test]
    fn test_composite_two_blocks() {
        let palette = Palette::new(vec![RED, GREEN]);
        let layout = plan(2, &LayoutConfig::PALETTE.with_block_size(2));
        let canvas = composite(&palette, &layout).unwrap();

        assert_eq!(canvas.dimensions(), (4, 2));
        assert_eq!(
            canvas.pixels(),
            &[RED, RED, GREEN, GREEN, RED, RED, GREEN, GREEN]
        );
    }

    #[test]
    fn test_composite_fallback_for_missing_cells() {
        let palette = Palette::new(vec![RED, GREEN, RED]);
        let layout = plan(3, &LayoutConfig::PALETTE.with_block_size(1).with_wrap_threshold(2));
        let canvas = composite(&palette, &layout).unwrap();

        assert_eq!(canvas.dimensions(), (2, 2));
        assert_eq!(canvas.pixel(0, 1), Some(RED));
        assert_eq!(canvas.pixel(1, 1), Some(FALLBACK_COLOR));
    }

    #[test]
    fn test_composite_empty_palette() {
        let palette = Palette::default();
        let layout = plan(0, &LayoutConfig::PALETTE);
        let canvas = composite(&palette, &layout).unwrap();
        assert!(canvas.is_empty());
        assert_eq!(canvas.dimensions(), (0, 0));
    }

    #[test]
    fn test_composite_rejects_small_layout() {
        let palette = Palette::new(vec![RED, GREEN, RED]);
        let layout = plan(2, &LayoutConfig::PALETTE);
        assert_eq!(
            composite(&palette, &layout),
            Err(CompositeError::LayoutMismatch {
                cells: 2,
                colors: 3
            })
        );
    }

    #[test]
    fn test_composite_rejects_huge_canvas() {
        let palette = Palette::new(vec![RED; 100]);
        let layout = plan(100, &LayoutConfig::PREVIEW.with_block_size(256));
        assert!(matches!(
            composite(&palette, &layout),
            Err(CompositeError::CanvasTooLarge { .. })
        ));
    }

    #[test]
    fn test_canvas_size_limit_boundary() {
        assert_eq!(check_canvas_size(512, 512), Ok(()));
        assert_eq!(
            check_canvas_size(513, 512),
            Err(CompositeError::CanvasTooLarge {
                width: 513,
                height: 512,
                limit: MAX_CANVAS_PIXELS
            })
        );
    }

    #[test]
    fn test_composite_is_deterministic() {
        let palette = Palette::new(vec![RED, GREEN, RED, GREEN, GREEN]);
        let layout = plan(5, &LayoutConfig::GRID.with_block_size(3));
        let first = composite(&palette, &layout).unwrap();
        let second = composite(&palette, &layout).unwrap();
        assert_eq!(first, second);
    }
}
