//! Noise-field base images.

use crate::base::{validate_resolution, GenerateError, NoiseKind};
use crate::buffer::{Channels, PixelBuffer};
use crate::rng::DeterministicRng;

/// Side length divisor for the low-resolution grid behind
/// [`NoiseKind::Upsampled`].
const UPSAMPLE_FACTOR: u32 = 10;

/// Render a noise field of the given kind.
pub fn noise(
    width: u32,
    height: u32,
    kind: NoiseKind,
    rng: &mut DeterministicRng,
) -> Result<PixelBuffer, GenerateError> {
    validate_resolution(width, height)?;

    let buf = match kind {
        NoiseKind::Color => {
            let mut buf = PixelBuffer::new(width, height, Channels::Rgb);
            for v in buf.data_mut() {
                *v = rng.gen_range(0..=255u8);
            }
            buf
        }
        NoiseKind::Grayscale => {
            let mut buf = PixelBuffer::new(width, height, Channels::Rgb);
            for px in buf.data_mut().chunks_exact_mut(3) {
                let v = rng.gen_range(0..=255u8);
                px.fill(v);
            }
            buf
        }
        NoiseKind::Upsampled => {
            let low_w = (width / UPSAMPLE_FACTOR).max(1);
            let low_h = (height / UPSAMPLE_FACTOR).max(1);
            let mut low = PixelBuffer::new(low_w, low_h, Channels::Rgb);
            for v in low.data_mut() {
                *v = rng.gen_range(0..=255u8);
            }

            let mut buf = PixelBuffer::new(width, height, Channels::Rgb);
            for y in 0..height {
                let v = if height > 1 {
                    f64::from(y) / f64::from(height - 1)
                } else {
                    0.0
                };
                for x in 0..width {
                    let u = if width > 1 {
                        f64::from(x) / f64::from(width - 1)
                    } else {
                        0.0
                    };
                    let c = low.sample_bilinear_rgb(u, v);
                    buf.set(x, y, &c);
                }
            }
            buf
        }
    };

    Ok(buf)
}
