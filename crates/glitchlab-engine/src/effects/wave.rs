//! Sinusoidal wave displacement.

use crate::buffer::PixelBuffer;

use super::{Direction, EffectError};

/// Displace each row (or column) along itself by a sine offset.
///
/// Lane `p` is cyclically shifted by
/// `round(amplitude * sin(2 * PI * frequency * p))` pixels. Content wraps
/// around the edges, so nothing is lost; an amplitude of zero is the
/// identity.
pub fn wave_distortion(
    buffer: &PixelBuffer,
    amplitude: u32,
    frequency: f64,
    direction: Direction,
) -> Result<PixelBuffer, EffectError> {
    if !frequency.is_finite() || frequency <= 0.0 {
        return Err(EffectError::InvalidParameter(format!(
            "frequency must be finite and positive, got {}",
            frequency
        )));
    }

    let mut out = buffer.clone();
    let amp = f64::from(amplitude);
    let tau = 2.0 * std::f64::consts::PI;

    match direction {
        Direction::Horizontal => {
            for y in 0..buffer.height() {
                let shift = (amp * (tau * frequency * f64::from(y)).sin()).round() as i64;
                out.roll_rows_horizontal(y, y + 1, shift);
            }
        }
        Direction::Vertical => {
            for x in 0..buffer.width() {
                let shift = (amp * (tau * frequency * f64::from(x)).sin()).round() as i64;
                out.roll_column_vertical(x, shift);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::Channels;

    fn make_rows() -> PixelBuffer {
        // Two rows of three distinct gray pixels each.
        let mut buf = PixelBuffer::new(3, 2, Channels::Rgb);
        for x in 0..3 {
            let a = (x as u8 + 1) * 10;
            let b = (x as u8 + 1) * 10 + 5;
            buf.set(x, 0, &[a, a, a]);
            buf.set(x, 1, &[b, b, b]);
        }
        buf
    }

    #[test]
    fn test_zero_amplitude_is_identity() {
        let buf = make_rows();
        let out = wave_distortion(&buf, 0, 0.1, Direction::Horizontal).unwrap();
        assert_eq!(out, buf);
    }

    #[test]
    fn test_first_lane_never_moves() {
        // sin(0) = 0, so row 0 keeps its pixels wherever the wave peaks.
        let buf = make_rows();
        let out = wave_distortion(&buf, 15, 0.37, Direction::Horizontal).unwrap();
        for x in 0..3 {
            assert_eq!(out.get(x, 0), buf.get(x, 0));
        }
    }

    #[test]
    fn test_quarter_period_shifts_by_amplitude() {
        // frequency 0.25 puts row 1 at the sine peak: shift = amplitude.
        let buf = make_rows();
        let out = wave_distortion(&buf, 1, 0.25, Direction::Horizontal).unwrap();
        assert_eq!(out.get(0, 1), buf.get(2, 1));
        assert_eq!(out.get(1, 1), buf.get(0, 1));
        assert_eq!(out.get(2, 1), buf.get(1, 1));
    }

    #[test]
    fn test_rows_are_rotations_of_the_input() {
        let buf = make_rows();
        let out = wave_distortion(&buf, 2, 0.13, Direction::Horizontal).unwrap();
        for y in 0..2 {
            let mut before: Vec<&[u8]> = (0..3).map(|x| buf.get(x, y)).collect();
            let mut after: Vec<&[u8]> = (0..3).map(|x| out.get(x, y)).collect();
            before.sort();
            after.sort();
            assert_eq!(before, after, "row {} must keep its pixels", y);
        }
    }

    #[test]
    fn test_vertical_shifts_columns() {
        let mut buf = PixelBuffer::new(2, 2, Channels::Rgb);
        buf.set(0, 0, &[1, 1, 1]);
        buf.set(0, 1, &[2, 2, 2]);
        buf.set(1, 0, &[3, 3, 3]);
        buf.set(1, 1, &[4, 4, 4]);
        // Column 1 sits at the sine peak and rotates down by one.
        let out = wave_distortion(&buf, 1, 0.25, Direction::Vertical).unwrap();
        assert_eq!(out.get(0, 0), &[1, 1, 1]);
        assert_eq!(out.get(1, 0), &[4, 4, 4]);
        assert_eq!(out.get(1, 1), &[3, 3, 3]);
    }

    #[test]
    fn test_invalid_frequency_rejected() {
        let buf = make_rows();
        assert!(wave_distortion(&buf, 5, 0.0, Direction::Horizontal).is_err());
        assert!(wave_distortion(&buf, 5, -0.1, Direction::Horizontal).is_err());
        assert!(wave_distortion(&buf, 5, f64::NAN, Direction::Horizontal).is_err());
        assert!(wave_distortion(&buf, 5, f64::INFINITY, Direction::Horizontal).is_err());
    }
}
