//! Random shape scatter over a black canvas.

use crate::base::{draw, validate_resolution, GenerateError};
use crate::buffer::{Channels, PixelBuffer};
use crate::rng::DeterministicRng;

const OUTLINE_STROKE: u32 = 2;

/// Scatter `num_shapes` random shapes over black.
///
/// Each shape draws its kind, color, and geometry from `rng` in a fixed
/// order, so one seed always yields the same composition. Shapes may
/// overhang the canvas; rasterization clips them.
pub fn geometric(
    width: u32,
    height: u32,
    num_shapes: u32,
    rng: &mut DeterministicRng,
) -> Result<PixelBuffer, GenerateError> {
    validate_resolution(width, height)?;
    if num_shapes == 0 {
        return Err(GenerateError::InvalidParameter(
            "num_shapes must be at least 1".to_string(),
        ));
    }

    let mut buf = PixelBuffer::new(width, height, Channels::Rgb);
    let w = i64::from(width);
    let h = i64::from(height);

    for _ in 0..num_shapes {
        let kind = rng.gen_range(0..4u32);
        let color = rng.gen_rgb8();
        match kind {
            0 => {
                let (x1, y1, x2, y2) = sample_box(rng, w, h);
                if rng.gen_f64() < 0.5 {
                    draw::fill_rect(&mut buf, x1, y1, x2, y2, color);
                } else {
                    draw::outline_rect(&mut buf, x1, y1, x2, y2, color, OUTLINE_STROKE);
                }
            }
            1 => {
                let (x1, y1, x2, y2) = sample_box(rng, w, h);
                if rng.gen_f64() < 0.5 {
                    draw::fill_ellipse(&mut buf, x1, y1, x2, y2, color);
                } else {
                    draw::outline_ellipse(&mut buf, x1, y1, x2, y2, color, OUTLINE_STROKE);
                }
            }
            2 => {
                let x1 = rng.gen_range(0..=w);
                let y1 = rng.gen_range(0..=h);
                let x2 = rng.gen_range(0..=w);
                let y2 = rng.gen_range(0..=h);
                let line_width = rng.gen_range(1..=10u32);
                draw::draw_line(&mut buf, x1, y1, x2, y2, color, line_width);
            }
            _ => {
                let n = rng.gen_range(3..=8usize);
                let points: Vec<(i64, i64)> = (0..n)
                    .map(|_| (rng.gen_range(0..=w), rng.gen_range(0..=h)))
                    .collect();
                if rng.gen_f64() < 0.5 {
                    draw::fill_polygon(&mut buf, &points, color);
                } else {
                    draw::outline_polygon(&mut buf, &points, color, OUTLINE_STROKE);
                }
            }
        }
    }

    Ok(buf)
}

/// Draw an axis-aligned inclusive box: x1, y1 first, then the far corner
/// at or beyond them.
fn sample_box(rng: &mut DeterministicRng, w: i64, h: i64) -> (i64, i64, i64, i64) {
    let x1 = rng.gen_range(0..=w);
    let y1 = rng.gen_range(0..=h);
    let x2 = rng.gen_range(x1..=w);
    let y2 = rng.gen_range(y1..=h);
    (x1, y1, x2, y2)
}
