//! Chainable glitch sessions.
//!
//! [`GlitchSession`] owns a working buffer plus the pristine original it
//! started from. Effect methods replace the working buffer, record the op
//! they ran, and hand the session back for chaining; [`reset`] rewinds
//! everything. The session also carries the image load/save entry points,
//! which is the only place the engine touches the filesystem.
//!
//! [`reset`]: GlitchSession::reset

use std::path::Path;

use thiserror::Error;

use crate::base::{self, BaseSpec, GenerateError};
use crate::buffer::{Channels, PixelBuffer};
use crate::combo::{self, EffectOp, Intensity};
use crate::effects::{self, ChannelId, Direction, EffectError, SwapKind};
use crate::palette;
use crate::png::{self, PngError};
use crate::rng::DeterministicRng;

/// Errors from session construction, transformation, and saving.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Image codec error: {0}")]
    Codec(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Effect(#[from] EffectError),

    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Png(#[from] PngError),

    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// A glitch pipeline over one image.
///
/// Construction fixes the original; every effect method consumes the
/// current buffer and installs its output, so calls chain left to right.
/// The ops that ran are recorded and can be serialized for provenance.
#[derive(Debug, Clone)]
pub struct GlitchSession {
    current: PixelBuffer,
    original: PixelBuffer,
    applied: Vec<EffectOp>,
}

impl GlitchSession {
    /// Decode an image file into a session.
    ///
    /// Sources with an alpha channel become RGBA buffers, everything else
    /// RGB.
    pub fn open(path: &Path) -> Result<Self, SessionError> {
        let decoded = image::open(path)?;
        let buffer = if decoded.color().has_alpha() {
            let rgba = decoded.into_rgba8();
            let (w, h) = rgba.dimensions();
            PixelBuffer::from_vec(w, h, Channels::Rgba, rgba.into_raw())
        } else {
            let rgb = decoded.into_rgb8();
            let (w, h) = rgb.dimensions();
            PixelBuffer::from_vec(w, h, Channels::Rgb, rgb.into_raw())
        };
        Ok(Self::from_buffer(buffer))
    }

    /// Wrap an existing buffer in a session.
    pub fn from_buffer(buffer: PixelBuffer) -> Self {
        Self {
            original: buffer.clone(),
            current: buffer,
            applied: Vec::new(),
        }
    }

    /// Generate a procedural base image and wrap it in a session.
    pub fn from_base(spec: &BaseSpec, seed: u32) -> Result<Self, SessionError> {
        Ok(Self::from_buffer(base::generate_unique(spec, seed)?))
    }

    /// The working buffer.
    pub fn buffer(&self) -> &PixelBuffer {
        &self.current
    }

    /// The untouched buffer the session started from.
    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    /// Ops applied since construction or the last [`reset`](Self::reset),
    /// in application order.
    pub fn applied_ops(&self) -> &[EffectOp] {
        &self.applied
    }

    /// Width of the working buffer.
    pub fn width(&self) -> u32 {
        self.current.width()
    }

    /// Height of the working buffer.
    pub fn height(&self) -> u32 {
        self.current.height()
    }

    /// Consume the session, keeping only the final buffer.
    pub fn into_buffer(self) -> PixelBuffer {
        self.current
    }

    /// Restore the original buffer and forget the applied ops.
    pub fn reset(&mut self) -> &mut Self {
        self.current = self.original.clone();
        self.applied.clear();
        self
    }

    fn record(&mut self, next: PixelBuffer, op: EffectOp) -> &mut Self {
        self.current = next;
        self.applied.push(op);
        self
    }

    /// Sort dark pixel runs by brightness.
    pub fn pixel_sort(
        &mut self,
        threshold: u8,
        direction: Direction,
        reverse: bool,
    ) -> &mut Self {
        let next = effects::pixel_sort(&self.current, threshold, direction, reverse);
        self.record(
            next,
            EffectOp::PixelSort {
                threshold,
                direction,
                reverse,
            },
        )
    }

    /// Displace the R, G, and B planes independently.
    pub fn rgb_shift(
        &mut self,
        r_shift: [i32; 2],
        g_shift: [i32; 2],
        b_shift: [i32; 2],
    ) -> &mut Self {
        let next = effects::rgb_shift(&self.current, r_shift, g_shift, b_shift);
        self.record(
            next,
            EffectOp::RgbShift {
                r_shift,
                g_shift,
                b_shift,
            },
        )
    }

    /// Darken alternating horizontal bands.
    pub fn scan_lines(
        &mut self,
        line_height: u32,
        intensity: f64,
    ) -> Result<&mut Self, EffectError> {
        let next = effects::scan_lines(&self.current, line_height, intensity)?;
        Ok(self.record(
            next,
            EffectOp::ScanLines {
                line_height,
                intensity,
            },
        ))
    }

    /// Corrupt random square blocks.
    pub fn data_mosh(
        &mut self,
        corruption_rate: f64,
        block_size: u32,
        rng: &mut DeterministicRng,
    ) -> Result<&mut Self, EffectError> {
        let next = effects::data_mosh(&self.current, corruption_rate, block_size, rng)?;
        Ok(self.record(
            next,
            EffectOp::DataMosh {
                corruption_rate,
                block_size,
            },
        ))
    }

    /// Re-compress through lossy JPEG cycles.
    pub fn jpeg_artifacts(
        &mut self,
        quality: u8,
        iterations: u32,
    ) -> Result<&mut Self, EffectError> {
        let next = effects::jpeg_artifacts(&self.current, quality, iterations)?;
        Ok(self.record(
            next,
            EffectOp::JpegArtifacts {
                quality,
                iterations,
            },
        ))
    }

    /// Push rows or columns along a sine wave.
    pub fn wave_distortion(
        &mut self,
        amplitude: u32,
        frequency: f64,
        direction: Direction,
    ) -> Result<&mut Self, EffectError> {
        let next = effects::wave_distortion(&self.current, amplitude, frequency, direction)?;
        Ok(self.record(
            next,
            EffectOp::WaveDistortion {
                amplitude,
                frequency,
                direction,
            },
        ))
    }

    /// Permute the color channels.
    pub fn channel_swap(&mut self, swap: SwapKind, rng: &mut DeterministicRng) -> &mut Self {
        let next = effects::channel_swap(&self.current, swap, rng);
        self.record(next, EffectOp::ChannelSwap { swap })
    }

    /// Shove horizontal bands sideways.
    pub fn slice_shift(
        &mut self,
        num_slices: u32,
        max_shift: u32,
        rng: &mut DeterministicRng,
    ) -> Result<&mut Self, EffectError> {
        let next = effects::slice_shift(&self.current, num_slices, max_shift, rng)?;
        Ok(self.record(
            next,
            EffectOp::SliceShift {
                num_slices,
                max_shift,
            },
        ))
    }

    /// Blend a flat color over the frame.
    pub fn color_overlay(
        &mut self,
        color: [u8; 3],
        opacity: f64,
    ) -> Result<&mut Self, EffectError> {
        let next = effects::color_overlay(&self.current, color, opacity)?;
        Ok(self.record(next, EffectOp::ColorOverlay { color, opacity }))
    }

    /// Boost one channel, pull the others back.
    pub fn channel_emphasis(
        &mut self,
        channel: ChannelId,
        strength: f64,
    ) -> Result<&mut Self, EffectError> {
        let next = effects::channel_emphasis(&self.current, channel, strength)?;
        Ok(self.record(next, EffectOp::ChannelEmphasis { channel, strength }))
    }

    /// Apply a persisted descriptor, e.g. one replayed from JSON.
    pub fn apply_op(
        &mut self,
        op: &EffectOp,
        rng: &mut DeterministicRng,
    ) -> Result<&mut Self, EffectError> {
        let next = op.apply(&self.current, rng)?;
        Ok(self.record(next, op.clone()))
    }

    /// Sample a random combo at the given intensity and apply it.
    ///
    /// The sampled ops are appended to [`applied_ops`](Self::applied_ops).
    pub fn random_glitch_combo(
        &mut self,
        intensity: Intensity,
        rng: &mut DeterministicRng,
    ) -> Result<&mut Self, EffectError> {
        let (next, ops) = combo::random_glitch_combo(&self.current, intensity, rng)?;
        self.current = next;
        self.applied.extend(ops);
        Ok(self)
    }

    /// Write the working buffer to `path`, picking the codec from the file
    /// extension (case-insensitive).
    ///
    /// PNG output is byte-deterministic and ignores `quality`; JPEG
    /// flattens alpha onto white and encodes at `quality`. Other
    /// extensions are rejected.
    pub fn save(&self, path: &Path, quality: u8) -> Result<(), SessionError> {
        if quality == 0 || quality > 100 {
            return Err(SessionError::InvalidParameter(format!(
                "quality must be in [1, 100], got {}",
                quality
            )));
        }

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_ascii_lowercase())
            .unwrap_or_default();

        match ext.as_str() {
            "png" => {
                png::write_buffer(&self.current, path, &png::PngConfig::default())?;
                Ok(())
            }
            "jpg" | "jpeg" => {
                let rgb = self.current.flatten_to_rgb(palette::WHITE);
                let file = std::fs::File::create(path)?;
                let writer = std::io::BufWriter::new(file);
                image::codecs::jpeg::JpegEncoder::new_with_quality(writer, quality).encode(
                    rgb.data(),
                    rgb.width(),
                    rgb.height(),
                    image::ExtendedColorType::Rgb8,
                )?;
                Ok(())
            }
            other => Err(SessionError::UnsupportedFormat(format!(
                "unsupported output extension '{}', expected png, jpg, or jpeg",
                other
            ))),
        }
    }
}
