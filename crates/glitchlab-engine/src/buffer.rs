//! Interleaved 8-bit pixel buffers.
//!
//! [`PixelBuffer`] is the working image type for every glitch pass and base
//! generator: row-major, interleaved samples, one byte per channel. Effects
//! treat their input as immutable and return a new buffer.

/// Channel layout of a pixel buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channels {
    /// Three samples per pixel: red, green, blue.
    Rgb,
    /// Four samples per pixel: red, green, blue, alpha.
    Rgba,
}

impl Channels {
    /// Number of samples per pixel.
    #[inline]
    pub fn count(&self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }

    /// Whether the layout carries an alpha channel.
    #[inline]
    pub fn has_alpha(&self) -> bool {
        matches!(self, Channels::Rgba)
    }
}

/// A row-major, interleaved 8-bit image buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: Channels,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Create a zero-filled buffer (black, and fully transparent for RGBA).
    pub fn new(width: u32, height: u32, channels: Channels) -> Self {
        let len = width as usize * height as usize * channels.count();
        Self {
            width,
            height,
            channels,
            data: vec![0; len],
        }
    }

    /// Create an RGB buffer filled with a single color.
    pub fn filled_rgb(width: u32, height: u32, color: [u8; 3]) -> Self {
        let pixels = width as usize * height as usize;
        let mut data = Vec::with_capacity(pixels * 3);
        for _ in 0..pixels {
            data.extend_from_slice(&color);
        }
        Self {
            width,
            height,
            channels: Channels::Rgb,
            data,
        }
    }

    /// Create a buffer from raw interleaved samples.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != width * height * channels.count()`.
    pub fn from_vec(width: u32, height: u32, channels: Channels, data: Vec<u8>) -> Self {
        let expected = width as usize * height as usize * channels.count();
        assert_eq!(
            data.len(),
            expected,
            "pixel data length {} does not match {}x{} {:?}",
            data.len(),
            width,
            height,
            channels,
        );
        Self {
            width,
            height,
            channels,
            data,
        }
    }

    /// Buffer width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Buffer height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Channel layout.
    #[inline]
    pub fn channels(&self) -> Channels {
        self.channels
    }

    /// Samples per pixel.
    #[inline]
    pub fn channel_count(&self) -> usize {
        self.channels.count()
    }

    /// Raw interleaved samples, row-major.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable view of the raw samples.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Consume the buffer and return its raw samples.
    pub fn into_vec(self) -> Vec<u8> {
        self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        debug_assert!(
            x < self.width && y < self.height,
            "pixel ({}, {}) out of bounds for {}x{}",
            x,
            y,
            self.width,
            self.height,
        );
        (y as usize * self.width as usize + x as usize) * self.channels.count()
    }

    /// The samples of the pixel at (x, y).
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> &[u8] {
        let i = self.index(x, y);
        &self.data[i..i + self.channels.count()]
    }

    /// Overwrite the pixel at (x, y) with the given samples.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, pixel: &[u8]) {
        let i = self.index(x, y);
        let c = self.channels.count();
        self.data[i..i + c].copy_from_slice(pixel);
    }

    /// Mean of all channel samples of the pixel at (x, y).
    ///
    /// For RGBA buffers the alpha sample participates in the mean.
    #[inline]
    pub fn brightness(&self, x: u32, y: u32) -> f64 {
        let px = self.get(x, y);
        let sum: u32 = px.iter().map(|&v| u32::from(v)).sum();
        sum as f64 / px.len() as f64
    }

    /// Cyclically shift the rows in `[y_start, y_end)` right by `shift` pixels.
    ///
    /// A pixel leaving the right edge re-enters on the left; negative shifts
    /// move pixels left. The output pixel at `x` comes from `(x - shift) mod w`.
    pub fn roll_rows_horizontal(&mut self, y_start: u32, y_end: u32, shift: i64) {
        let w = self.width as i64;
        if w == 0 {
            return;
        }
        let c = self.channels.count();
        let row_bytes = self.width as usize * c;
        let mut scratch = vec![0u8; row_bytes];
        for y in y_start..y_end {
            let start = y as usize * row_bytes;
            scratch.copy_from_slice(&self.data[start..start + row_bytes]);
            for x in 0..w {
                let src = (x - shift).rem_euclid(w) as usize;
                let dst = start + x as usize * c;
                self.data[dst..dst + c].copy_from_slice(&scratch[src * c..src * c + c]);
            }
        }
    }

    /// Cyclically shift column `x` down by `shift` pixels.
    ///
    /// The output pixel at `y` comes from `(y - shift) mod h`.
    pub fn roll_column_vertical(&mut self, x: u32, shift: i64) {
        let h = self.height as i64;
        if h == 0 {
            return;
        }
        let c = self.channels.count();
        let mut scratch = vec![0u8; self.height as usize * c];
        for y in 0..self.height {
            let i = self.index(x, y);
            scratch[y as usize * c..y as usize * c + c].copy_from_slice(&self.data[i..i + c]);
        }
        for y in 0..h {
            let src = (y - shift).rem_euclid(h) as usize;
            let dst = self.index(x, y as u32);
            self.data[dst..dst + c].copy_from_slice(&scratch[src * c..src * c + c]);
        }
    }

    /// Bilinearly sample the first three channels at normalized coordinates.
    ///
    /// `u` and `v` must lie in [0.0, 1.0]: (0, 0) maps to the top-left pixel
    /// center and (1, 1) to the bottom-right. The buffer must be non-empty.
    pub fn sample_bilinear_rgb(&self, u: f64, v: f64) -> [u8; 3] {
        let x = u * (self.width as f64 - 1.0);
        let y = v * (self.height as f64 - 1.0);

        let x0 = x.floor() as u32;
        let y0 = y.floor() as u32;
        let x1 = (x0 + 1).min(self.width - 1);
        let y1 = (y0 + 1).min(self.height - 1);

        let fx = x - x0 as f64;
        let fy = y - y0 as f64;

        let p00 = self.get(x0, y0);
        let p10 = self.get(x1, y0);
        let p01 = self.get(x0, y1);
        let p11 = self.get(x1, y1);

        let mut out = [0u8; 3];
        for (ch, slot) in out.iter_mut().enumerate() {
            let top = p00[ch] as f64 * (1.0 - fx) + p10[ch] as f64 * fx;
            let bottom = p01[ch] as f64 * (1.0 - fx) + p11[ch] as f64 * fx;
            *slot = (top * (1.0 - fy) + bottom * fy).round() as u8;
        }
        out
    }

    /// Return an RGB copy, dropping the alpha channel if present.
    pub fn to_rgb(&self) -> PixelBuffer {
        match self.channels {
            Channels::Rgb => self.clone(),
            Channels::Rgba => {
                let pixels = self.width as usize * self.height as usize;
                let mut data = Vec::with_capacity(pixels * 3);
                for px in self.data.chunks_exact(4) {
                    data.extend_from_slice(&px[..3]);
                }
                PixelBuffer {
                    width: self.width,
                    height: self.height,
                    channels: Channels::Rgb,
                    data,
                }
            }
        }
    }

    /// Return an RGB copy with any alpha channel composited over `background`.
    pub fn flatten_to_rgb(&self, background: [u8; 3]) -> PixelBuffer {
        match self.channels {
            Channels::Rgb => self.clone(),
            Channels::Rgba => {
                let pixels = self.width as usize * self.height as usize;
                let mut data = Vec::with_capacity(pixels * 3);
                for px in self.data.chunks_exact(4) {
                    let a = px[3] as f64 / 255.0;
                    for ch in 0..3 {
                        let v = px[ch] as f64 * a + background[ch] as f64 * (1.0 - a);
                        data.push(v.round() as u8);
                    }
                }
                PixelBuffer {
                    width: self.width,
                    height: self.height,
                    channels: Channels::Rgb,
                    data,
                }
            }
        }
    }
}
