//! Vertical multi-stop gradients.

use crate::base::{validate_resolution, GenerateError};
use crate::buffer::{Channels, PixelBuffer};
use crate::palette;
use crate::rng::DeterministicRng;

/// Paint a vertical blend through `stops` across the full canvas height.
///
/// Row `y` sits at `y / height * (stops - 1)` along the stop chain; a
/// single stop renders as a flat fill.
pub(crate) fn render_stops(width: u32, height: u32, stops: &[[u8; 3]]) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height, Channels::Rgb);
    let last = stops.len() - 1;

    for y in 0..height {
        let color = if last == 0 {
            stops[0]
        } else {
            let pos = f64::from(y) / f64::from(height) * last as f64;
            let idx = pos as usize;
            if idx >= last {
                stops[last]
            } else {
                palette::lerp_rgb8(stops[idx], stops[idx + 1], pos - idx as f64)
            }
        };
        for x in 0..width {
            buf.set(x, y, &color);
        }
    }

    buf
}

/// Render a vertical gradient through the given color stops.
///
/// With `colors: None`, between two and five stops are drawn from `rng`
/// (count first, then each stop in R, G, B channel order).
pub fn gradient(
    width: u32,
    height: u32,
    colors: Option<&[[u8; 3]]>,
    rng: &mut DeterministicRng,
) -> Result<PixelBuffer, GenerateError> {
    validate_resolution(width, height)?;

    let stops: Vec<[u8; 3]> = match colors {
        Some([]) => {
            return Err(GenerateError::InvalidParameter(
                "gradient needs at least one color stop".to_string(),
            ))
        }
        Some(list) => list.to_vec(),
        None => {
            let n = rng.gen_range(2..=5usize);
            (0..n).map(|_| rng.gen_rgb8()).collect()
        }
    };

    Ok(render_stops(width, height, &stops))
}
