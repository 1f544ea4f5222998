//! Random effect combinator.
//!
//! [`EffectOp`] is the serializable description of one configured glitch
//! pass; [`random_glitch_combo`] samples a small pipeline of them at a
//! chosen intensity and applies it, returning the ops alongside the result
//! so callers can persist what actually ran.

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;
use crate::effects::{self, ChannelId, Direction, EffectError, SwapKind};
use crate::rng::DeterministicRng;

// ===== Intensity tiers =====

/// How hard a random combo hits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// One or two passes.
    Low,
    /// Two to four passes.
    Medium,
    /// Four to six passes.
    High,
}

impl Intensity {
    /// Inclusive bounds on the number of passes for this tier.
    pub fn count_range(&self) -> [u32; 2] {
        match self {
            Intensity::Low => [1, 2],
            Intensity::Medium => [2, 4],
            Intensity::High => [4, 6],
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Low => write!(f, "low"),
            Intensity::Medium => write!(f, "medium"),
            Intensity::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Intensity {
    type Err = EffectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            other => Err(EffectError::InvalidParameter(format!(
                "unknown intensity '{}', expected low, medium, or high",
                other
            ))),
        }
    }
}

// ===== Combo-eligible kinds =====

/// The effects a random combo may draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    RgbShift,
    PixelSort,
    ScanLines,
    DataMosh,
    WaveDistortion,
    SliceShift,
}

impl EffectKind {
    /// Every combo-eligible effect, in selection order.
    pub const ALL: [EffectKind; 6] = [
        EffectKind::RgbShift,
        EffectKind::PixelSort,
        EffectKind::ScanLines,
        EffectKind::DataMosh,
        EffectKind::WaveDistortion,
        EffectKind::SliceShift,
    ];

    /// Draw a configured op of this kind from the combinator's ranges.
    ///
    /// The ranges are tuned to stay legible rather than destructive:
    /// single-digit plane offsets, light scan lines, sparse moshing.
    pub fn sample_params(&self, rng: &mut DeterministicRng) -> EffectOp {
        match self {
            EffectKind::RgbShift => EffectOp::RgbShift {
                r_shift: [rng.gen_range(-10..=10), 0],
                g_shift: [rng.gen_range(-10..=10), 0],
                b_shift: [rng.gen_range(-10..=10), 0],
            },
            EffectKind::PixelSort => EffectOp::PixelSort {
                threshold: rng.gen_range(50..=200u8),
                direction: sample_direction(rng),
                reverse: false,
            },
            EffectKind::ScanLines => EffectOp::ScanLines {
                line_height: rng.gen_range(2..=5),
                intensity: 0.2 + rng.gen_f64() * 0.3,
            },
            EffectKind::DataMosh => EffectOp::DataMosh {
                corruption_rate: 0.005 + rng.gen_f64() * 0.015,
                block_size: rng.gen_range(5..=20),
            },
            EffectKind::WaveDistortion => EffectOp::WaveDistortion {
                amplitude: rng.gen_range(5..=20),
                frequency: 0.01 + rng.gen_f64() * 0.09,
                direction: sample_direction(rng),
            },
            EffectKind::SliceShift => EffectOp::SliceShift {
                num_slices: rng.gen_range(5..=15),
                max_shift: rng.gen_range(20..=100),
            },
        }
    }
}

fn sample_direction(rng: &mut DeterministicRng) -> Direction {
    if rng.gen_range(0..2u32) == 0 {
        Direction::Horizontal
    } else {
        Direction::Vertical
    }
}

// ===== Configured ops =====

/// A single configured glitch pass.
///
/// Ops serialize with an `effect` tag, so a pipeline reads as a JSON list
/// of `{"effect": "...", ...}` objects that can be stored next to the
/// rendered image and replayed later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "effect", rename_all = "snake_case", deny_unknown_fields)]
pub enum EffectOp {
    /// Sort dark pixel runs by brightness.
    PixelSort {
        threshold: u8,
        direction: Direction,
        #[serde(default)]
        reverse: bool,
    },
    /// Displace the R, G, and B planes independently.
    RgbShift {
        r_shift: [i32; 2],
        g_shift: [i32; 2],
        b_shift: [i32; 2],
    },
    /// Darken alternating horizontal bands.
    ScanLines { line_height: u32, intensity: f64 },
    /// Corrupt random square blocks.
    DataMosh { corruption_rate: f64, block_size: u32 },
    /// Re-compress through lossy JPEG cycles.
    JpegArtifacts { quality: u8, iterations: u32 },
    /// Push rows or columns along a sine wave.
    WaveDistortion {
        amplitude: u32,
        frequency: f64,
        direction: Direction,
    },
    /// Permute the color channels.
    ChannelSwap { swap: SwapKind },
    /// Shove horizontal bands sideways.
    SliceShift { num_slices: u32, max_shift: u32 },
    /// Blend a flat color over the frame.
    ColorOverlay { color: [u8; 3], opacity: f64 },
    /// Boost one channel, pull the others back.
    ChannelEmphasis { channel: ChannelId, strength: f64 },
}

impl EffectOp {
    /// Apply this op to a buffer.
    ///
    /// `rng` feeds the stochastic ops (data mosh, random channel swap);
    /// the deterministic ops never touch it.
    pub fn apply(
        &self,
        buffer: &PixelBuffer,
        rng: &mut DeterministicRng,
    ) -> Result<PixelBuffer, EffectError> {
        match *self {
            EffectOp::PixelSort {
                threshold,
                direction,
                reverse,
            } => Ok(effects::pixel_sort(buffer, threshold, direction, reverse)),
            EffectOp::RgbShift {
                r_shift,
                g_shift,
                b_shift,
            } => Ok(effects::rgb_shift(buffer, r_shift, g_shift, b_shift)),
            EffectOp::ScanLines {
                line_height,
                intensity,
            } => effects::scan_lines(buffer, line_height, intensity),
            EffectOp::DataMosh {
                corruption_rate,
                block_size,
            } => effects::data_mosh(buffer, corruption_rate, block_size, rng),
            EffectOp::JpegArtifacts {
                quality,
                iterations,
            } => effects::jpeg_artifacts(buffer, quality, iterations),
            EffectOp::WaveDistortion {
                amplitude,
                frequency,
                direction,
            } => effects::wave_distortion(buffer, amplitude, frequency, direction),
            EffectOp::ChannelSwap { swap } => Ok(effects::channel_swap(buffer, swap, rng)),
            EffectOp::SliceShift {
                num_slices,
                max_shift,
            } => effects::slice_shift(buffer, num_slices, max_shift, rng),
            EffectOp::ColorOverlay { color, opacity } => {
                effects::color_overlay(buffer, color, opacity)
            }
            EffectOp::ChannelEmphasis { channel, strength } => {
                effects::channel_emphasis(buffer, channel, strength)
            }
        }
    }

    /// The combo kind this op belongs to, if it is combo-eligible.
    pub fn kind(&self) -> Option<EffectKind> {
        match self {
            EffectOp::RgbShift { .. } => Some(EffectKind::RgbShift),
            EffectOp::PixelSort { .. } => Some(EffectKind::PixelSort),
            EffectOp::ScanLines { .. } => Some(EffectKind::ScanLines),
            EffectOp::DataMosh { .. } => Some(EffectKind::DataMosh),
            EffectOp::WaveDistortion { .. } => Some(EffectKind::WaveDistortion),
            EffectOp::SliceShift { .. } => Some(EffectKind::SliceShift),
            EffectOp::JpegArtifacts { .. }
            | EffectOp::ChannelSwap { .. }
            | EffectOp::ColorOverlay { .. }
            | EffectOp::ChannelEmphasis { .. } => None,
        }
    }
}

// ===== Sampling =====

/// Draw a pipeline of distinct effect kinds for the given intensity.
///
/// The pass count is uniform within the tier's bounds; kinds are then
/// chosen without replacement by a partial Fisher-Yates pass over
/// [`EffectKind::ALL`], and each kind's parameters are sampled in draw
/// order.
pub fn sample_combo(intensity: Intensity, rng: &mut DeterministicRng) -> Vec<EffectOp> {
    let [lo, hi] = intensity.count_range();
    let count = rng.gen_range(lo..=hi) as usize;

    let mut kinds = EffectKind::ALL;
    for i in 0..count {
        let j = rng.gen_range(i..kinds.len());
        kinds.swap(i, j);
    }

    kinds[..count]
        .iter()
        .map(|kind| kind.sample_params(rng))
        .collect()
}

/// Sample a combo, apply it in order, and report what ran.
///
/// Returns the glitched buffer together with the ops that produced it, in
/// application order. The same seed over the same input reproduces both
/// exactly.
pub fn random_glitch_combo(
    buffer: &PixelBuffer,
    intensity: Intensity,
    rng: &mut DeterministicRng,
) -> Result<(PixelBuffer, Vec<EffectOp>), EffectError> {
    let ops = sample_combo(intensity, rng);
    let mut current = buffer.clone();
    for op in &ops {
        current = op.apply(&current, rng)?;
    }
    Ok((current, ops))
}
