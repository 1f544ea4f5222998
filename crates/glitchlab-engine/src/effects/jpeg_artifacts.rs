//! Generational JPEG re-compression artifacts.

use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::{ExtendedColorType, ImageFormat};

use crate::buffer::{Channels, PixelBuffer};
use crate::palette;

use super::{validate_nonzero, EffectError};

/// Run the image through `iterations` lossy JPEG encode/decode cycles.
///
/// `quality` maps straight to the JPEG encoder: 1 is the blockiest, 100 the
/// cleanest, and each extra iteration compounds the loss. RGBA input is
/// composited over white first, so the result is always RGB.
pub fn jpeg_artifacts(
    buffer: &PixelBuffer,
    quality: u8,
    iterations: u32,
) -> Result<PixelBuffer, EffectError> {
    if quality == 0 || quality > 100 {
        return Err(EffectError::InvalidParameter(format!(
            "quality must be in [1, 100], got {}",
            quality
        )));
    }
    validate_nonzero("iterations", iterations)?;

    let mut rgb = buffer.flatten_to_rgb(palette::WHITE);
    for _ in 0..iterations {
        let mut encoded = Vec::new();
        JpegEncoder::new_with_quality(Cursor::new(&mut encoded), quality).encode(
            rgb.data(),
            rgb.width(),
            rgb.height(),
            ExtendedColorType::Rgb8,
        )?;
        let decoded =
            image::load_from_memory_with_format(&encoded, ImageFormat::Jpeg)?.into_rgb8();
        let (w, h) = decoded.dimensions();
        rgb = PixelBuffer::from_vec(w, h, Channels::Rgb, decoded.into_raw());
    }

    Ok(rgb)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_gradient(width: u32, height: u32) -> PixelBuffer {
        let mut buf = PixelBuffer::new(width, height, Channels::Rgb);
        for y in 0..height {
            for x in 0..width {
                buf.set(x, y, &[(x * 16) as u8, (y * 16) as u8, 200]);
            }
        }
        buf
    }

    #[test]
    fn test_dimensions_and_layout_preserved() {
        let buf = make_gradient(16, 16);
        let out = jpeg_artifacts(&buf, 50, 1).unwrap();
        assert_eq!(out.width(), 16);
        assert_eq!(out.height(), 16);
        assert_eq!(out.channels(), Channels::Rgb);
    }

    #[test]
    fn test_recompression_is_deterministic() {
        let buf = make_gradient(16, 16);
        let out1 = jpeg_artifacts(&buf, 10, 3).unwrap();
        let out2 = jpeg_artifacts(&buf, 10, 3).unwrap();
        assert_eq!(out1, out2);
    }

    #[test]
    fn test_rgba_is_flattened_to_rgb() {
        let rgba = PixelBuffer::from_vec(4, 4, Channels::Rgba, vec![200; 4 * 4 * 4]);
        let out = jpeg_artifacts(&rgba, 90, 1).unwrap();
        assert_eq!(out.channels(), Channels::Rgb);
        assert_eq!(out.width(), 4);
        assert_eq!(out.height(), 4);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let buf = make_gradient(8, 8);
        assert!(jpeg_artifacts(&buf, 0, 1).is_err());
        assert!(jpeg_artifacts(&buf, 101, 1).is_err());
        assert!(jpeg_artifacts(&buf, 50, 0).is_err());
    }
}
