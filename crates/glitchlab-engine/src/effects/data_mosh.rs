//! Block corruption in the style of broken video keyframes.

use crate::buffer::PixelBuffer;
use crate::rng::DeterministicRng;

use super::{validate_nonzero, validate_unit_interval, EffectError};

/// Corrupt random square blocks of the image.
///
/// The number of corrupted blocks is
/// `floor(width * height / block_size^2 * corruption_rate)`; a count of
/// zero returns the input unchanged. Each block is hit by one of three
/// corruptions, chosen uniformly: a copy of another randomly placed block,
/// a smear of the block's first row or column, or uniform noise. Blocks
/// are applied in sequence, so later blocks can corrupt earlier ones.
pub fn data_mosh(
    buffer: &PixelBuffer,
    corruption_rate: f64,
    block_size: u32,
    rng: &mut DeterministicRng,
) -> Result<PixelBuffer, EffectError> {
    validate_unit_interval("corruption_rate", corruption_rate)?;
    validate_nonzero("block_size", block_size)?;

    let w = buffer.width();
    let h = buffer.height();
    let pixels = w as f64 * h as f64;
    let per_block = f64::from(block_size) * f64::from(block_size);
    let num_blocks = (pixels / per_block * corruption_rate) as u64;

    let mut out = buffer.clone();
    if num_blocks == 0 {
        return Ok(out);
    }
    if block_size > w || block_size > h {
        return Err(EffectError::RegionOutOfBounds(format!(
            "block_size {} does not fit a {}x{} image",
            block_size, w, h
        )));
    }

    let bs = block_size;
    let c = out.channel_count();
    for _ in 0..num_blocks {
        let x = rng.gen_range(0..=w - bs);
        let y = rng.gen_range(0..=h - bs);
        match rng.gen_range(0..3u32) {
            // Copy of another randomly placed block. The source region is
            // snapshotted first so overlapping src/dst reads stay coherent.
            0 => {
                let sx = rng.gen_range(0..=w - bs);
                let sy = rng.gen_range(0..=h - bs);
                let block = copy_block(&out, sx, sy, bs, bs);
                paste_block(&mut out, x, y, bs, bs, &block);
            }
            // Smear: the block's first row tiled down, or its first
            // column tiled across.
            1 => {
                if rng.gen_f64() > 0.5 {
                    let row = copy_block(&out, x, y, bs, 1);
                    for dy in 0..bs {
                        paste_block(&mut out, x, y + dy, bs, 1, &row);
                    }
                } else {
                    for dy in 0..bs {
                        let px = out.get(x, y + dy).to_vec();
                        for dx in 0..bs {
                            out.set(x + dx, y + dy, &px);
                        }
                    }
                }
            }
            // Uniform noise across every sample of the block.
            _ => {
                let mut px = [0u8; 4];
                for dy in 0..bs {
                    for dx in 0..bs {
                        for s in px[..c].iter_mut() {
                            *s = rng.gen_range(0..=255u8);
                        }
                        out.set(x + dx, y + dy, &px[..c]);
                    }
                }
            }
        }
    }

    Ok(out)
}

fn copy_block(buf: &PixelBuffer, x: u32, y: u32, w_px: u32, h_px: u32) -> Vec<u8> {
    let c = buf.channel_count();
    let mut block = Vec::with_capacity(w_px as usize * h_px as usize * c);
    for dy in 0..h_px {
        for dx in 0..w_px {
            block.extend_from_slice(buf.get(x + dx, y + dy));
        }
    }
    block
}

fn paste_block(buf: &mut PixelBuffer, x: u32, y: u32, w_px: u32, h_px: u32, block: &[u8]) {
    let c = buf.channel_count();
    let mut i = 0;
    for dy in 0..h_px {
        for dx in 0..w_px {
            buf.set(x + dx, y + dy, &block[i..i + c]);
            i += c;
        }
    }
}
