use lib_swatch::constants::MAX_BLOCK_SIZE;
use lib_swatch::{LayoutConfig, Profile};
use serde::Deserialize;

use crate::error::ServerError;

pub const DEFAULT_NOISE_SIZE: u32 = 256;
pub const MAX_NOISE_SIZE: u32 = 2048;

#[derive(Debug, Deserialize)]
pub struct PaletteQuery {
    /// Comma-separated hex colors
    pub colors: String,
    /// Block size override
    pub bs: Option<u32>,
    pub layout: Option<Profile>,
    /// Column limit override for wrapping layouts
    pub wrap: Option<usize>,
}

impl PaletteQuery {
    pub fn layout_config(&self) -> Result<LayoutConfig, ServerError> {
        let mut config = self.layout.unwrap_or_default().config();

        if let Some(bs) = self.bs {
            if bs == 0 || bs > MAX_BLOCK_SIZE {
                return Err(ServerError::InvalidQuery(format!(
                    "bs must be between 1 and {}, got {}",
                    MAX_BLOCK_SIZE, bs
                )));
            }
            config = config.with_block_size(bs);
        }

        if let Some(wrap) = self.wrap {
            if wrap == 0 {
                return Err(ServerError::InvalidQuery("wrap must be at least 1".into()));
            }
            config = config.with_wrap_threshold(wrap);
        }

        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
pub struct NoiseQuery {
    pub colors: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl NoiseQuery {
    pub fn dimensions(&self) -> Result<(u32, u32), ServerError> {
        let check = |name: &str, value: Option<u32>| {
            let value = value.unwrap_or(DEFAULT_NOISE_SIZE);
            if value == 0 || value > MAX_NOISE_SIZE {
                return Err(ServerError::InvalidQuery(format!(
                    "{} must be between 1 and {}, got {}",
                    name, MAX_NOISE_SIZE, value
                )));
            }
            Ok(value)
        };
        Ok((check("width", self.width)?, check("height", self.height)?))
    }
}
