//! Full-frame color grading passes.

use crate::buffer::PixelBuffer;

use super::{validate_unit_interval, ChannelId, EffectError};

/// Blend a flat color over the whole image.
///
/// Each color sample becomes `round(v * (1 - opacity) + color * opacity)`.
/// Alpha is left untouched.
pub fn color_overlay(
    buffer: &PixelBuffer,
    color: [u8; 3],
    opacity: f64,
) -> Result<PixelBuffer, EffectError> {
    validate_unit_interval("opacity", opacity)?;

    let mut out = buffer.clone();
    let c = out.channel_count();
    for px in out.data_mut().chunks_exact_mut(c) {
        for ch in 0..3 {
            let v = f64::from(px[ch]) * (1.0 - opacity) + f64::from(color[ch]) * opacity;
            px[ch] = v.round() as u8;
        }
    }

    Ok(out)
}

/// Boost one channel and pull the other two back.
///
/// The selected channel is scaled by `1 + strength`, the other two by
/// `1 - strength / 2`; results are clamped to [0, 255] and truncated.
/// Alpha is left untouched.
pub fn channel_emphasis(
    buffer: &PixelBuffer,
    channel: ChannelId,
    strength: f64,
) -> Result<PixelBuffer, EffectError> {
    validate_unit_interval("strength", strength)?;

    let boost = 1.0 + strength;
    let cut = 1.0 - strength / 2.0;
    let idx = channel.index();

    let mut out = buffer.clone();
    let c = out.channel_count();
    for px in out.data_mut().chunks_exact_mut(c) {
        for ch in 0..3 {
            let factor = if ch == idx { boost } else { cut };
            px[ch] = (f64::from(px[ch]) * factor).clamp(0.0, 255.0) as u8;
        }
    }

    Ok(out)
}
