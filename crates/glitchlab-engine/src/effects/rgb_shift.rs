//! Independent cyclic displacement of the red, green, and blue planes.

use crate::buffer::{Channels, PixelBuffer};

/// Cyclically displace each RGB channel plane by its own `[dx, dy]` offset.
///
/// Positive offsets move a plane right and down; pixels leaving one edge
/// re-enter from the opposite edge, so the output at (x, y) reads the input
/// plane at ((x - dx) mod w, (y - dy) mod h). Every output value is some
/// input value. Alpha is dropped; the result is always RGB.
pub fn rgb_shift(
    buffer: &PixelBuffer,
    r_shift: [i32; 2],
    g_shift: [i32; 2],
    b_shift: [i32; 2],
) -> PixelBuffer {
    let src = buffer.to_rgb();
    let w = i64::from(src.width());
    let h = i64::from(src.height());
    let src_data = src.data();
    let mut out = vec![0u8; src_data.len()];

    for (ch, shift) in [r_shift, g_shift, b_shift].into_iter().enumerate() {
        let dx = i64::from(shift[0]);
        let dy = i64::from(shift[1]);
        for y in 0..h {
            let sy = (y - dy).rem_euclid(h);
            for x in 0..w {
                let sx = (x - dx).rem_euclid(w);
                let dst = ((y * w + x) * 3) as usize + ch;
                let srci = ((sy * w + sx) * 3) as usize + ch;
                out[dst] = src_data[srci];
            }
        }
    }

    PixelBuffer::from_vec(src.width(), src.height(), Channels::Rgb, out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_rgb_3x1() -> PixelBuffer {
        PixelBuffer::from_vec(
            3,
            1,
            Channels::Rgb,
            vec![10, 100, 200, 20, 110, 210, 30, 120, 220],
        )
    }

    #[test]
    fn test_zero_shift_is_identity() {
        let buf = make_rgb_3x1();
        let out = rgb_shift(&buf, [0, 0], [0, 0], [0, 0]);
        assert_eq!(out, buf);
    }

    #[test]
    fn test_red_plane_wraps_right() {
        let buf = make_rgb_3x1();
        let out = rgb_shift(&buf, [1, 0], [0, 0], [0, 0]);
        // Red values 10,20,30 rotate to 30,10,20; green and blue stay.
        assert_eq!(out.get(0, 0), &[30, 100, 200]);
        assert_eq!(out.get(1, 0), &[10, 110, 210]);
        assert_eq!(out.get(2, 0), &[20, 120, 220]);
    }

    #[test]
    fn test_opposite_shifts_cancel() {
        let buf = make_rgb_3x1();
        let shifted = rgb_shift(&buf, [2, 0], [-1, 0], [1, 0]);
        let restored = rgb_shift(&shifted, [-2, 0], [1, 0], [-1, 0]);
        assert_eq!(restored, buf);
    }

    #[test]
    fn test_shift_wraps_modulo_extent() {
        let buf = make_rgb_3x1();
        let by_one = rgb_shift(&buf, [1, 0], [0, 0], [0, 0]);
        let by_four = rgb_shift(&buf, [4, 0], [0, 0], [0, 0]);
        assert_eq!(by_one, by_four);
    }

    #[test]
    fn test_vertical_shift_moves_rows() {
        let mut buf = PixelBuffer::new(1, 2, Channels::Rgb);
        buf.set(0, 0, &[1, 2, 3]);
        buf.set(0, 1, &[9, 8, 7]);
        let out = rgb_shift(&buf, [0, 1], [0, 0], [0, 0]);
        assert_eq!(out.get(0, 0), &[9, 2, 3]);
        assert_eq!(out.get(0, 1), &[1, 8, 7]);
    }

    #[test]
    fn test_alpha_is_dropped() {
        let buf = PixelBuffer::from_vec(1, 1, Channels::Rgba, vec![1, 2, 3, 4]);
        let out = rgb_shift(&buf, [0, 0], [0, 0], [0, 0]);
        assert_eq!(out.channels(), Channels::Rgb);
        assert_eq!(out.get(0, 0), &[1, 2, 3]);
    }
}
