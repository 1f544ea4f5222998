//! Procedural base-image generation.
//!
//! When there is no photograph to glitch, these generators synthesize one:
//! gradients, geometric scatter, noise fields, and two fixed-palette
//! styles. Everything is seeded; [`generate_unique`] maps a `(spec, seed)`
//! pair to one byte-exact image.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::buffer::PixelBuffer;
use crate::rng::DeterministicRng;

mod draw;
mod geometric;
mod gradient;
mod noise;
mod styled;

pub use geometric::geometric;
pub use gradient::gradient;
pub use noise::noise;
pub use styled::{cyberpunk, vaporwave};

/// Errors from base-image generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Visual family of a generated base image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BaseStyle {
    /// Smooth vertical blend through random color stops.
    Gradient,
    /// Random shapes scattered over black.
    Geometric,
    /// Per-pixel or upsampled noise.
    Noise,
    /// Pastel gradient under a white grid.
    Vaporwave,
    /// Neon outlines on a near-black purple canvas.
    Cyberpunk,
    /// Let the seed pick one of the concrete styles.
    Random,
}

impl BaseStyle {
    /// The concrete styles [`BaseStyle::Random`] resolves among.
    pub const CONCRETE: [BaseStyle; 5] = [
        BaseStyle::Vaporwave,
        BaseStyle::Cyberpunk,
        BaseStyle::Geometric,
        BaseStyle::Gradient,
        BaseStyle::Noise,
    ];

    /// Stable name, also used to derive the style's seed stream.
    pub fn as_str(&self) -> &'static str {
        match self {
            BaseStyle::Gradient => "gradient",
            BaseStyle::Geometric => "geometric",
            BaseStyle::Noise => "noise",
            BaseStyle::Vaporwave => "vaporwave",
            BaseStyle::Cyberpunk => "cyberpunk",
            BaseStyle::Random => "random",
        }
    }
}

impl std::fmt::Display for BaseStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Texture of a [`BaseStyle::Noise`] image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// Independent random samples for every channel.
    Color,
    /// One random value per pixel, replicated across channels.
    Grayscale,
    /// Low-resolution color noise blown up with bilinear sampling.
    Upsampled,
}

/// What to generate: canvas size plus style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BaseSpec {
    /// Canvas width in pixels.
    pub width: u32,
    /// Canvas height in pixels.
    pub height: u32,
    /// Style to render, or [`BaseStyle::Random`].
    pub style: BaseStyle,
}

impl BaseSpec {
    /// Creates a new base-image spec.
    pub fn new(width: u32, height: u32, style: BaseStyle) -> Self {
        Self {
            width,
            height,
            style,
        }
    }
}

pub(crate) fn validate_resolution(width: u32, height: u32) -> Result<(), GenerateError> {
    if width == 0 || height == 0 {
        return Err(GenerateError::InvalidParameter(format!(
            "resolution must be at least 1x1, got [{}, {}]",
            width, height
        )));
    }

    (width as usize)
        .checked_mul(height as usize)
        .ok_or_else(|| GenerateError::InvalidParameter("resolution is too large".to_string()))?;

    Ok(())
}

/// Render the base image for a `(spec, seed)` pair.
///
/// The same pair always produces byte-identical pixels. Each concrete
/// style draws from its own BLAKE3-derived stream, so adding draws to one
/// style never disturbs the output of another.
pub fn generate_unique(spec: &BaseSpec, seed: u32) -> Result<PixelBuffer, GenerateError> {
    validate_resolution(spec.width, spec.height)?;

    let mut rng = DeterministicRng::new(seed);
    let style = match spec.style {
        BaseStyle::Random => *rng.choose(&BaseStyle::CONCRETE),
        concrete => concrete,
    };

    let style_seed = DeterministicRng::derive_variant_seed(seed, style.as_str());
    let mut style_rng = DeterministicRng::new(style_seed);

    match style {
        BaseStyle::Gradient => gradient(spec.width, spec.height, None, &mut style_rng),
        BaseStyle::Geometric => {
            let num_shapes = style_rng.gen_range(30..=100);
            geometric(spec.width, spec.height, num_shapes, &mut style_rng)
        }
        BaseStyle::Noise => {
            let kind = if style_rng.gen_range(0..2u32) == 0 {
                NoiseKind::Color
            } else {
                NoiseKind::Upsampled
            };
            noise(spec.width, spec.height, kind, &mut style_rng)
        }
        BaseStyle::Vaporwave => vaporwave(spec.width, spec.height),
        BaseStyle::Cyberpunk => cyberpunk(spec.width, spec.height, &mut style_rng),
        BaseStyle::Random => unreachable!("random style resolved above"),
    }
}
