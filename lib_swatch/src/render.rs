use embedded_graphics::prelude::Point;
use log::info;
use thiserror::Error;

use crate::color::{parse_palette, MalformedColorError};
use crate::constants::{
    STATUS_BACKGROUND, STATUS_FOREGROUND, STATUS_IMAGE_HEIGHT, STATUS_IMAGE_WIDTH,
};
use crate::layout::{plan, LayoutConfig};
use crate::raster::{composite, Canvas, CompositeError, Label};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RenderError {
    #[error("Malformed color list: {0}")]
    MalformedColor(#[from] MalformedColorError),
    #[error("Compositing failed: {0}")]
    Composite(#[from] CompositeError),
}

/// Parses `colors`, lays them out with `config` and paints the swatches.
pub fn render_palette(colors: &str, config: &LayoutConfig) -> Result<Canvas, RenderError> {
    let palette = parse_palette(colors)?;
    let layout = plan(palette.len(), config);
    Ok(composite(&palette, &layout)?)
}

/// A small image showing `code` in the middle, used as the body of error
/// responses.
pub fn render_status(code: u16) -> Canvas {
    let mut canvas = Canvas::new(STATUS_IMAGE_WIDTH, STATUS_IMAGE_HEIGHT, STATUS_BACKGROUND);
    let text = code.to_string();
    let center = Point::new(
        STATUS_IMAGE_WIDTH as i32 / 2,
        STATUS_IMAGE_HEIGHT as i32 / 2,
    );

    Label::new(&text, center).draw(&mut canvas, STATUS_FOREGROUND);
    info!("Rendered status image for {}", code);
    canvas
}
