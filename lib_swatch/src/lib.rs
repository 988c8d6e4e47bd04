pub mod color;
pub mod constants;
pub mod encoding;
pub mod layout;
pub mod raster;
pub mod render;

use log::*;
use std::io::Write;

pub use crate::color::{parse_palette, Color, MalformedColorError, Palette};
pub use crate::encoding::{encode_png, EncodingError};
pub use crate::layout::{plan, Layout, LayoutConfig, Profile, Wrapping};
pub use crate::raster::{composite, Canvas, CompositeError, Label};
pub use crate::render::{render_palette, render_status, RenderError};

/// Installs the global logger. Library and server records are emitted at
/// `level`, everything else (actix internals) at `Info`.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .target(env_logger::Target::Stderr)
        .filter(None, LevelFilter::Info)
        .filter(Some("lib_swatch"), level)
        .filter(Some("swatch_server"), level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}:{}] {}",
                record.level(),
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}
