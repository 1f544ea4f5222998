//! CRT-style scan line darkening.

use crate::buffer::PixelBuffer;

use super::{validate_nonzero, validate_unit_interval, EffectError};

/// Darken alternating horizontal bands of `line_height` rows.
///
/// Bands start at row 0 and repeat every `2 * line_height` rows. Every
/// sample in a darkened band (alpha included) is scaled by `1 - intensity`
/// and truncated. Intensity 0 leaves the image byte-identical; intensity 1
/// blacks the bands out.
pub fn scan_lines(
    buffer: &PixelBuffer,
    line_height: u32,
    intensity: f64,
) -> Result<PixelBuffer, EffectError> {
    validate_nonzero("line_height", line_height)?;
    validate_unit_interval("intensity", intensity)?;

    let mut out = buffer.clone();
    let factor = 1.0 - intensity;
    let h = u64::from(buffer.height());
    let row_bytes = buffer.width() as usize * buffer.channel_count();
    let step = u64::from(line_height) * 2;

    let mut band = 0u64;
    while band < h {
        let end = (band + u64::from(line_height)).min(h);
        let range = band as usize * row_bytes..end as usize * row_bytes;
        for v in &mut out.data_mut()[range] {
            *v = (f64::from(*v) * factor) as u8;
        }
        band += step;
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Channels;

    #[test]
    fn test_zero_intensity_is_identity() {
        let buf = PixelBuffer::filled_rgb(4, 4, [100, 150, 200]);
        let out = scan_lines(&buf, 1, 0.0).unwrap();
        assert_eq!(out, buf);
    }

    #[test]
    fn test_alternating_rows_darkened() {
        let buf = PixelBuffer::filled_rgb(4, 4, [100, 100, 100]);
        let out = scan_lines(&buf, 1, 0.5).unwrap();
        for x in 0..4 {
            assert_eq!(out.get(x, 0), &[50, 50, 50], "row 0 is a dark band");
            assert_eq!(out.get(x, 1), &[100, 100, 100], "row 1 is untouched");
            assert_eq!(out.get(x, 2), &[50, 50, 50], "row 2 is a dark band");
            assert_eq!(out.get(x, 3), &[100, 100, 100], "row 3 is untouched");
        }
    }

    #[test]
    fn test_band_taller_than_image_darkens_everything() {
        let buf = PixelBuffer::filled_rgb(2, 4, [100, 100, 100]);
        let out = scan_lines(&buf, 10, 0.5).unwrap();
        for y in 0..4 {
            assert_eq!(out.get(0, y), &[50, 50, 50]);
        }
    }

    #[test]
    fn test_scaling_truncates() {
        let buf = PixelBuffer::filled_rgb(1, 1, [101, 101, 101]);
        let out = scan_lines(&buf, 1, 0.5).unwrap();
        // 101 * 0.5 = 50.5, truncated to 50.
        assert_eq!(out.get(0, 0), &[50, 50, 50]);
    }

    #[test]
    fn test_alpha_darkens_with_the_band() {
        let buf = PixelBuffer::from_vec(1, 1, Channels::Rgba, vec![100, 100, 100, 200]);
        let out = scan_lines(&buf, 1, 0.5).unwrap();
        assert_eq!(out.get(0, 0), &[50, 50, 50, 100]);
    }

    #[test]
    fn test_invalid_parameters_rejected() {
        let buf = PixelBuffer::filled_rgb(2, 2, [100, 100, 100]);
        assert!(scan_lines(&buf, 0, 0.5).is_err());
        assert!(scan_lines(&buf, 1, -0.1).is_err());
        assert!(scan_lines(&buf, 1, 1.5).is_err());
        assert!(scan_lines(&buf, 1, f64::NAN).is_err());
    }
}
