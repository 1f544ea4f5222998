//! Horizontal band displacement.

use crate::buffer::PixelBuffer;
use crate::rng::DeterministicRng;

use super::{validate_nonzero, EffectError};

/// Cut the image into `num_slices` horizontal bands and shove each sideways.
///
/// Bands are `height / num_slices` rows tall, with the last band absorbing
/// any remainder rows. Each band is cyclically shifted by a uniform draw
/// from `[-max_shift, max_shift]`; exactly one draw is consumed per band.
pub fn slice_shift(
    buffer: &PixelBuffer,
    num_slices: u32,
    max_shift: u32,
    rng: &mut DeterministicRng,
) -> Result<PixelBuffer, EffectError> {
    validate_nonzero("num_slices", num_slices)?;
    if num_slices > buffer.height() {
        return Err(EffectError::RegionOutOfBounds(format!(
            "num_slices {} exceeds image height {}",
            num_slices,
            buffer.height()
        )));
    }

    let mut out = buffer.clone();
    let slice_height = buffer.height() / num_slices;
    let ms = i64::from(max_shift);

    for i in 0..num_slices {
        let start = i * slice_height;
        let end = if i == num_slices - 1 {
            buffer.height()
        } else {
            start + slice_height
        };
        let shift = rng.gen_range(-ms..=ms);
        out.roll_rows_horizontal(start, end, shift);
    }

    Ok(out)
}
