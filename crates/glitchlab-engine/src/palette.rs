//! 8-bit color helpers and the fixed palettes used by styled base images.

/// Pure white.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Pure black.
pub const BLACK: [u8; 3] = [0, 0, 0];

/// Vaporwave gradient stops, top to bottom: pink, cyan, magenta, blue, yellow.
pub const VAPORWAVE: [[u8; 3]; 5] = [
    [255, 113, 206],
    [1, 255, 255],
    [255, 71, 255],
    [1, 1, 255],
    [255, 255, 1],
];

/// Neon stroke colors for the cyberpunk style: cyan, magenta, yellow, green.
pub const CYBERPUNK_NEON: [[u8; 3]; 4] = [
    [0, 255, 255],
    [255, 0, 255],
    [255, 255, 0],
    [0, 255, 0],
];

/// Cyberpunk canvas color: near-black purple.
pub const CYBERPUNK_BACKGROUND: [u8; 3] = [10, 0, 20];

/// Linearly interpolate between two colors, truncating each channel.
///
/// `t` is clamped to [0.0, 1.0].
#[inline]
pub fn lerp_rgb8(a: [u8; 3], b: [u8; 3], t: f64) -> [u8; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut out = [0u8; 3];
    for (ch, slot) in out.iter_mut().enumerate() {
        *slot = (a[ch] as f64 * (1.0 - t) + b[ch] as f64 * t) as u8;
    }
    out
}
