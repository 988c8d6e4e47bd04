mod common;

use common::{decode_png, BLUE, GREEN, PRIMARIES, RED};
use lib_swatch::{encode_png, render_palette, render_status, LayoutConfig};

#[test]
fn test_encode_palette_png() {
    let canvas = render_palette(PRIMARIES, &LayoutConfig::PALETTE).unwrap();
    let png = encode_png(canvas).unwrap();
    assert!(!png.is_empty());

    let decoded = decode_png(&png);
    assert_eq!(decoded.dimensions(), (192, 64));
    assert_eq!(decoded.get_pixel(0, 0).0, RED.to_array());
    assert_eq!(decoded.get_pixel(65, 0).0, GREEN.to_array());
    assert_eq!(decoded.get_pixel(129, 63).0, BLUE.to_array());
}

#[test]
fn test_encode_status_png() {
    let canvas = render_status(404);
    let expected = canvas.clone();
    let decoded = decode_png(&encode_png(canvas).unwrap());

    assert_eq!(decoded.dimensions(), (200, 120));
    for (x, y, pixel) in decoded.enumerate_pixels() {
        assert_eq!(Some(pixel.0), expected.pixel(x, y).map(|c| c.to_array()));
    }
}
