use log::info;
use rand::Rng;

use super::canvas::Canvas;
use super::compositor::{check_canvas_size, CompositeError};
use crate::color::{Color, Palette};

/// Fills a `width` x `height` canvas with random pixels. Each pixel is drawn
/// uniformly from `palette`, or is a uniformly random RGB color when the
/// palette is empty.
pub fn noise<R: Rng + ?Sized>(
    width: u32,
    height: u32,
    palette: &Palette,
    rng: &mut R,
) -> Result<Canvas, CompositeError> {
    check_canvas_size(width, height)?;

    let count = width as usize * height as usize;
    let colors = palette.as_slice();
    let pixels = (0..count)
        .map(|_| {
            if colors.is_empty() {
                Color::from(rng.gen::<[u8; 3]>())
            } else {
                colors[rng.gen_range(0..colors.len())]
            }
        })
        .collect();

    info!(
        "Generated {}x{} noise from {} colors",
        width,
        height,
        palette.len()
    );
    Ok(Canvas::from_pixels(width, height, pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_noise_uses_only_palette_colors() {
        let palette = Palette::new(vec![Color::BLACK, Color::WHITE]);
        let mut rng = StdRng::seed_from_u64(7);
        let canvas = noise(16, 16, &palette, &mut rng).unwrap();

        assert_eq!(canvas.dimensions(), (16, 16));
        assert!(canvas
            .pixels()
            .iter()
            .all(|c| *c == Color::BLACK || *c == Color::WHITE));
    }

    #[test]
    fn test_noise_is_reproducible_with_seed() {
        let palette = Palette::default();
        let first = noise(8, 8, &palette, &mut StdRng::seed_from_u64(42)).unwrap();
        let second = noise(8, 8, &palette, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_noise_rejects_huge_canvas() {
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            noise(4096, 4096, &Palette::default(), &mut rng),
            Err(CompositeError::CanvasTooLarge { .. })
        ));
    }
}
