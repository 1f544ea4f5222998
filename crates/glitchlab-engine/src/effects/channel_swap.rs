//! RGB channel permutations.

use crate::buffer::{Channels, PixelBuffer};
use crate::rng::DeterministicRng;

use super::SwapKind;

/// Permute the red, green, and blue channels of every pixel.
///
/// [`SwapKind::Random`] draws a fresh permutation from the RNG, which may
/// be the identity. Alpha is dropped; the result is always RGB.
pub fn channel_swap(
    buffer: &PixelBuffer,
    swap: SwapKind,
    rng: &mut DeterministicRng,
) -> PixelBuffer {
    let src = buffer.to_rgb();
    let perm = swap.permutation().unwrap_or_else(|| {
        let mut p = [0usize, 1, 2];
        rng.shuffle(&mut p);
        p
    });

    let mut data = Vec::with_capacity(src.data().len());
    for px in src.data().chunks_exact(3) {
        data.push(px[perm[0]]);
        data.push(px[perm[1]]);
        data.push(px[perm[2]]);
    }

    PixelBuffer::from_vec(src.width(), src.height(), Channels::Rgb, data)
}
