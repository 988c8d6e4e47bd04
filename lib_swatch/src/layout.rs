use log::debug;
use serde::{Deserialize, Serialize};

use crate::constants::{PALETTE_BLOCK_SIZE, PREVIEW_BLOCK_SIZE, WRAP_THRESHOLD};

/// How colors continue once a row is "full".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wrapping {
    /// Every color on one row.
    None,
    /// At most this many columns; extra colors continue on new rows.
    Threshold(usize),
    /// Roughly as many columns as rows.
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub block_size: u32,
    pub wrapping: Wrapping,
}

impl LayoutConfig {
    pub const PREVIEW: LayoutConfig = LayoutConfig {
        block_size: PREVIEW_BLOCK_SIZE,
        wrapping: Wrapping::None,
    };

    pub const PALETTE: LayoutConfig = LayoutConfig {
        block_size: PALETTE_BLOCK_SIZE,
        wrapping: Wrapping::Threshold(WRAP_THRESHOLD),
    };

    pub const GRID: LayoutConfig = LayoutConfig {
        block_size: PALETTE_BLOCK_SIZE,
        wrapping: Wrapping::Square,
    };

    pub fn with_block_size(self, block_size: u32) -> Self {
        Self { block_size, ..self }
    }

    /// Replaces the column limit. Has no effect on non-threshold wrapping.
    pub fn with_wrap_threshold(self, threshold: usize) -> Self {
        match self.wrapping {
            Wrapping::Threshold(_) => Self {
                wrapping: Wrapping::Threshold(threshold),
                ..self
            },
            _ => self,
        }
    }
}

/// Named layout presets selectable from a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Profile {
    Preview,
    #[default]
    Palette,
    Grid,
}

impl Profile {
    pub fn config(self) -> LayoutConfig {
        match self {
            Profile::Preview => LayoutConfig::PREVIEW,
            Profile::Palette => LayoutConfig::PALETTE,
            Profile::Grid => LayoutConfig::GRID,
        }
    }
}

/// Grid geometry for a palette. Only [`plan`] builds one, so
/// `width == columns * block_size` and `height == rows * block_size` always hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    columns: u32,
    rows: u32,
    block_size: u32,
    width: u32,
    height: u32,
}

impl Layout {
    pub fn columns(&self) -> u32 {
        self.columns
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn block_size(&self) -> u32 {
        self.block_size
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cells(&self) -> u64 {
        self.columns as u64 * self.rows as u64
    }

    /// Row-major index of the cell owning pixel `(x, y)`, or `None` if the
    /// pixel lies outside the canvas.
    pub fn cell_index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let column = (x / self.block_size) as usize;
        let row = (y / self.block_size) as usize;
        Some(row * self.columns as usize + column)
    }
}

// Smallest c with c * c >= n.
fn ceil_sqrt(n: usize) -> usize {
    let mut c = (n as f64).sqrt() as usize;
    while c * c < n {
        c += 1;
    }
    while c > 0 && (c - 1) * (c - 1) >= n {
        c -= 1;
    }
    c
}

pub fn plan(palette_len: usize, config: &LayoutConfig) -> Layout {
    let (columns, rows) = if palette_len == 0 {
        (0, 0)
    } else {
        match config.wrapping {
            Wrapping::None => (palette_len, 1),
            Wrapping::Threshold(threshold) => {
                let threshold = threshold.max(1);
                if palette_len <= threshold {
                    (palette_len, 1)
                } else {
                    (threshold, palette_len.div_ceil(threshold))
                }
            }
            Wrapping::Square => {
                let columns = ceil_sqrt(palette_len);
                (columns, palette_len.div_ceil(columns))
            }
        }
    };

    let columns = u32::try_from(columns).unwrap_or(u32::MAX);
    let rows = u32::try_from(rows).unwrap_or(u32::MAX);
    let layout = Layout {
        columns,
        rows,
        block_size: config.block_size,
        width: columns.saturating_mul(config.block_size),
        height: rows.saturating_mul(config.block_size),
    };

    debug!(
        "Planned {} colors as {}x{} cells of {}px ({}x{})",
        palette_len, layout.columns, layout.rows, layout.block_size, layout.width, layout.height
    );
    layout
}
