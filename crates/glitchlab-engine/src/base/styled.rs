//! Fixed-palette statement styles: vaporwave and cyberpunk.

use crate::base::{draw, gradient, validate_resolution, GenerateError};
use crate::buffer::PixelBuffer;
use crate::palette;
use crate::rng::DeterministicRng;

/// Grid pitch for the vaporwave overlay, in pixels.
const GRID_SPACING: i64 = 50;

/// Number of neon shapes scattered by the cyberpunk style.
const CYBERPUNK_SHAPES: u32 = 100;

/// Pastel vertical gradient under a thin white grid.
///
/// Fully determined by the resolution; no randomness is involved.
pub fn vaporwave(width: u32, height: u32) -> Result<PixelBuffer, GenerateError> {
    validate_resolution(width, height)?;

    let mut buf = gradient::render_stops(width, height, &palette::VAPORWAVE);
    let w = i64::from(width);
    let h = i64::from(height);

    // Two-pixel white grid lines anchored at the top-left corner.
    let mut x = 0;
    while x < w {
        draw::fill_rect(&mut buf, x, 0, x + 1, h - 1, palette::WHITE);
        x += GRID_SPACING;
    }
    let mut y = 0;
    while y < h {
        draw::fill_rect(&mut buf, 0, y, w - 1, y + 1, palette::WHITE);
        y += GRID_SPACING;
    }

    Ok(buf)
}

/// Neon wireframe scatter on a near-black purple canvas.
pub fn cyberpunk(
    width: u32,
    height: u32,
    rng: &mut DeterministicRng,
) -> Result<PixelBuffer, GenerateError> {
    validate_resolution(width, height)?;

    let mut buf = PixelBuffer::filled_rgb(width, height, palette::CYBERPUNK_BACKGROUND);
    let w = i64::from(width);
    let h = i64::from(height);

    for _ in 0..CYBERPUNK_SHAPES {
        let color = *rng.choose(&palette::CYBERPUNK_NEON);
        match rng.gen_range(0..3u32) {
            0 => {
                let x1 = rng.gen_range(0..=w);
                let y1 = rng.gen_range(0..=h);
                let x2 = rng.gen_range(0..=w);
                let y2 = rng.gen_range(0..=h);
                let line_width = rng.gen_range(1..=5u32);
                draw::draw_line(&mut buf, x1, y1, x2, y2, color, line_width);
            }
            1 => {
                let x1 = rng.gen_range(0..=w);
                let y1 = rng.gen_range(0..=h);
                let rw = rng.gen_range(10..=100i64);
                let rh = rng.gen_range(10..=100i64);
                draw::outline_rect(&mut buf, x1, y1, x1 + rw, y1 + rh, color, 2);
            }
            _ => {
                let cx = rng.gen_range(0..=w);
                let cy = rng.gen_range(0..=h);
                let radius = rng.gen_range(5..=50u32);
                draw::outline_circle(&mut buf, cx, cy, radius, color, 2);
            }
        }
    }

    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vaporwave_is_pure_function_of_resolution() {
        let a = vaporwave(64, 64).unwrap();
        let b = vaporwave(64, 64).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_vaporwave_grid_lines_are_white() {
        let buf = vaporwave(120, 120).unwrap();
        // Grid columns at x = 0, 1, 50, 51, 100, 101 and same rows.
        for y in 0..120 {
            assert_eq!(buf.get(0, y), &palette::WHITE);
            assert_eq!(buf.get(50, y), &palette::WHITE);
            assert_eq!(buf.get(51, y), &palette::WHITE);
            assert_eq!(buf.get(101, y), &palette::WHITE);
        }
        for x in 0..120 {
            assert_eq!(buf.get(x, 100), &palette::WHITE);
        }
    }

    #[test]
    fn test_vaporwave_cell_interior_is_gradient() {
        let buf = vaporwave(120, 120).unwrap();
        // Inside a grid cell the pastel gradient shows through.
        let px = buf.get(25, 25);
        assert_ne!(px, &palette::WHITE);
        assert_ne!(px, &palette::BLACK);
    }

    #[test]
    fn test_cyberpunk_background_survives() {
        let mut rng = DeterministicRng::new(42);
        let buf = cyberpunk(200, 200, &mut rng).unwrap();
        let background = buf
            .data()
            .chunks_exact(3)
            .filter(|px| *px == &palette::CYBERPUNK_BACKGROUND)
            .count();
        assert!(background > 0, "wireframes never cover the whole canvas");
    }

    #[test]
    fn test_cyberpunk_uses_only_palette_strokes() {
        let mut rng = DeterministicRng::new(7);
        let buf = cyberpunk(64, 64, &mut rng).unwrap();
        for px in buf.data().chunks_exact(3) {
            let px: [u8; 3] = [px[0], px[1], px[2]];
            let known = px == palette::CYBERPUNK_BACKGROUND
                || palette::CYBERPUNK_NEON.contains(&px);
            assert!(known, "unexpected color {:?}", px);
        }
    }

    #[test]
    fn test_cyberpunk_is_deterministic() {
        let mut rng1 = DeterministicRng::new(9);
        let mut rng2 = DeterministicRng::new(9);
        let a = cyberpunk(48, 48, &mut rng1).unwrap();
        let b = cyberpunk(48, 48, &mut rng2).unwrap();
        assert_eq!(a, b);
    }
}
