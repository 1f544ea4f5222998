//! The glitch transform library.
//!
//! Every effect is a pure function: it borrows an input [`PixelBuffer`],
//! validates its parameters, and returns a new buffer. Effects that draw
//! randomness take a [`DeterministicRng`](crate::rng::DeterministicRng)
//! so that the same seed reproduces the same pixels.

use serde::{Deserialize, Serialize};
use thiserror::Error;

mod channel_swap;
mod data_mosh;
mod jpeg_artifacts;
mod overlay;
mod pixel_sort;
mod rgb_shift;
mod scan_lines;
mod slice_shift;
mod wave;

pub use channel_swap::channel_swap;
pub use data_mosh::data_mosh;
pub use jpeg_artifacts::jpeg_artifacts;
pub use overlay::{channel_emphasis, color_overlay};
pub use pixel_sort::pixel_sort;
pub use rgb_shift::rgb_shift;
pub use scan_lines::scan_lines;
pub use slice_shift::slice_shift;
pub use wave::wave_distortion;

/// Errors from applying a glitch effect.
#[derive(Debug, Error)]
pub enum EffectError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Region out of bounds: {0}")]
    RegionOutOfBounds(String),

    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),
}

/// Axis along which a lane-oriented effect walks the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Operate on rows.
    Horizontal,
    /// Operate on columns.
    Vertical,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// Channel permutation applied by [`channel_swap`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwapKind {
    /// Draw a fresh permutation of the three channels.
    Random,
    /// Reverse red and blue.
    RgbToBgr,
    /// Rotate channels left: output R,G,B reads input G,B,R.
    RgbToGbr,
    /// Rotate channels right: output R,G,B reads input B,R,G.
    RgbToBrg,
}

impl SwapKind {
    /// The channel permutation, or `None` for [`SwapKind::Random`].
    ///
    /// Output channel `c` is read from input channel `perm[c]`.
    pub fn permutation(&self) -> Option<[usize; 3]> {
        match self {
            SwapKind::Random => None,
            SwapKind::RgbToBgr => Some([2, 1, 0]),
            SwapKind::RgbToGbr => Some([1, 2, 0]),
            SwapKind::RgbToBrg => Some([2, 0, 1]),
        }
    }
}

impl std::fmt::Display for SwapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapKind::Random => write!(f, "random"),
            SwapKind::RgbToBgr => write!(f, "rgb_to_bgr"),
            SwapKind::RgbToGbr => write!(f, "rgb_to_gbr"),
            SwapKind::RgbToBrg => write!(f, "rgb_to_brg"),
        }
    }
}

/// A single color channel, used by [`channel_emphasis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelId {
    R,
    G,
    B,
}

impl ChannelId {
    /// Index of this channel within an interleaved pixel.
    #[inline]
    pub fn index(&self) -> usize {
        match self {
            ChannelId::R => 0,
            ChannelId::G => 1,
            ChannelId::B => 2,
        }
    }
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelId::R => write!(f, "r"),
            ChannelId::G => write!(f, "g"),
            ChannelId::B => write!(f, "b"),
        }
    }
}

pub(crate) fn validate_unit_interval(name: &str, value: f64) -> Result<(), EffectError> {
    if !value.is_finite() {
        return Err(EffectError::InvalidParameter(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(EffectError::InvalidParameter(format!(
            "{} must be in [0, 1], got {}",
            name, value
        )));
    }
    Ok(())
}

pub(crate) fn validate_nonzero(name: &str, value: u32) -> Result<(), EffectError> {
    if value == 0 {
        return Err(EffectError::InvalidParameter(format!(
            "{} must be at least 1",
            name
        )));
    }
    Ok(())
}
