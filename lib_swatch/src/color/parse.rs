use log::{debug, warn};
use thiserror::Error;

use super::{Color, Palette};
use crate::constants::PALETTE_SEPARATOR;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MalformedColorError {
    #[error("Color list is empty")]
    Empty,
    #[error("Color #{index} is empty")]
    EmptyToken { index: usize },
    #[error("Color #{index} ({token:?}) contains non-hex characters")]
    InvalidHex { index: usize, token: String },
    #[error("Color #{index} ({token:?}) has {digits} hex digits, expected 6")]
    InvalidLength {
        index: usize,
        token: String,
        digits: usize,
    },
}

fn nibble(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// Parses one `RRGGBB` token, with an optional leading `#`.
///
/// `index` is the token's position in its list and is only used for error
/// reporting.
pub fn parse_color(index: usize, token: &str) -> Result<Color, MalformedColorError> {
    let token = token.trim();
    let digits = token.strip_prefix('#').unwrap_or(token);

    if digits.is_empty() {
        return Err(MalformedColorError::EmptyToken { index });
    }

    let nibbles = digits
        .bytes()
        .map(nibble)
        .collect::<Option<Vec<u8>>>()
        .ok_or_else(|| MalformedColorError::InvalidHex {
            index,
            token: token.to_owned(),
        })?;

    if nibbles.len() != 6 {
        return Err(MalformedColorError::InvalidLength {
            index,
            token: token.to_owned(),
            digits: nibbles.len(),
        });
    }

    let channel = |i: usize| nibbles[i] << 4 | nibbles[i + 1];
    Ok(Color::new(channel(0), channel(2), channel(4)))
}

/// Parses a comma-separated list of hex colors into a [`Palette`].
///
/// Blank input is rejected with [`MalformedColorError::Empty`]; an empty
/// palette can still be built directly with [`Palette::new`].
pub fn parse_palette(input: &str) -> Result<Palette, MalformedColorError> {
    if input.trim().is_empty() {
        warn!("Rejecting blank color list");
        return Err(MalformedColorError::Empty);
    }

    let palette = input
        .split(PALETTE_SEPARATOR)
        .enumerate()
        .map(|(index, token)| parse_color(index, token))
        .collect::<Result<Palette, _>>()
        .inspect_err(|e| warn!("Malformed color list: {}", e))?;

    debug!("Parsed {} colors", palette.len());
    Ok(palette)
}
