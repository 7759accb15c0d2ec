//! Owned ARGB8888 pixel buffers and skin-asset decoding.

use std::fmt;
use std::io;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

/// Errors that can occur when decoding a skin asset.
#[derive(Debug)]
pub enum AssetError {
    /// Underlying I/O error while reading the asset.
    Io(io::Error),

    /// The PNG stream itself is malformed.
    Decode(png::DecodingError),

    /// Decoded fine, but in a layout this crate does not accept
    /// (e.g. 16-bit channels or an indexed palette left unexpanded).
    Format(&'static str),
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Decode(e) => write!(f, "PNG decode error: {e}"),
            Self::Format(what) => write!(f, "unsupported PNG layout: {what}"),
        }
    }
}

impl std::error::Error for AssetError {}

impl From<io::Error> for AssetError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<png::DecodingError> for AssetError {
    fn from(e: png::DecodingError) -> Self {
        Self::Decode(e)
    }
}

// ---------------------------------------------------------------------------
// Pixmap
// ---------------------------------------------------------------------------

/// Pack channel bytes into an ARGB8888 word.
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// An owned width x height pixel buffer in ARGB8888, row-major.
#[derive(Debug, Clone)]
pub struct Pixmap {
    width: usize,
    height: usize,
    pixels: Vec<u32>,
}

impl Pixmap {
    /// A fully transparent pixmap of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    /// Wrap an existing pixel vector; `pixels.len()` must be `width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Self {
        assert_eq!(pixels.len(), width * height, "pixel count must match size");
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Decode PNG bytes into an ARGB8888 pixmap.
    ///
    /// Accepts 8-bit RGB, RGBA, grayscale, and grayscale-alpha images;
    /// anything else is an [`AssetError::Format`].
    pub fn decode_png(data: &[u8]) -> Result<Self, AssetError> {
        let decoder = png::Decoder::new(data);
        let mut reader = decoder.read_info()?;
        let mut buf = vec![0u8; reader.output_buffer_size()];
        let info = reader.next_frame(&mut buf)?;
        if info.bit_depth != png::BitDepth::Eight {
            return Err(AssetError::Format("bit depth other than 8"));
        }

        let bytes = &buf[..info.buffer_size()];
        let count = info.width as usize * info.height as usize;
        let mut pixels = Vec::with_capacity(count);
        match info.color_type {
            png::ColorType::Rgba => {
                for px in bytes.chunks_exact(4) {
                    pixels.push(argb(px[3], px[0], px[1], px[2]));
                }
            }
            png::ColorType::Rgb => {
                for px in bytes.chunks_exact(3) {
                    pixels.push(argb(0xFF, px[0], px[1], px[2]));
                }
            }
            png::ColorType::Grayscale => {
                for &g in bytes {
                    pixels.push(argb(0xFF, g, g, g));
                }
            }
            png::ColorType::GrayscaleAlpha => {
                for px in bytes.chunks_exact(2) {
                    pixels.push(argb(px[1], px[0], px[0], px[0]));
                }
            }
            png::ColorType::Indexed => {
                return Err(AssetError::Format("unexpanded indexed palette"));
            }
        }

        Ok(Self::from_pixels(
            info.width as usize,
            info.height as usize,
            pixels,
        ))
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Pixel at `(x, y)`; callers keep coordinates in bounds.
    pub fn get(&self, x: usize, y: usize) -> u32 {
        self.pixels[y * self.width + x]
    }

    pub fn put(&mut self, x: usize, y: usize, color: u32) {
        self.pixels[y * self.width + x] = color;
    }

    /// Fill the whole pixmap with one color.
    pub fn fill(&mut self, color: u32) {
        self.pixels.fill(color);
    }

    /// Fill an axis-aligned rectangle, clipped to the pixmap bounds.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: u32) {
        let x1 = (x + w).min(self.width);
        let y1 = (y + h).min(self.height);
        for row in y.min(self.height)..y1 {
            for col in x.min(self.width)..x1 {
                self.pixels[row * self.width + col] = color;
            }
        }
    }

    /// Extract the alpha channel as an opaque grayscale image: each output
    /// pixel's brightness is the source alpha. Combined with additive
    /// composition this reproduces the glass-overlay sheen without keeping
    /// the full-color source resident.
    pub fn extract_alpha(&self) -> Self {
        let pixels = self
            .pixels
            .iter()
            .map(|&px| {
                let a = (px >> 24) as u8;
                argb(0xFF, a, a, a)
            })
            .collect();
        Self::from_pixels(self.width, self.height, pixels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_alpha_turns_coverage_into_brightness() {
        let mut src = Pixmap::new(2, 1);
        src.put(0, 0, argb(0x80, 0x12, 0x34, 0x56));
        src.put(1, 0, argb(0x00, 0xFF, 0xFF, 0xFF));

        let mask = src.extract_alpha();
        assert_eq!(mask.get(0, 0), argb(0xFF, 0x80, 0x80, 0x80));
        assert_eq!(mask.get(1, 0), argb(0xFF, 0x00, 0x00, 0x00));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert!(matches!(
            Pixmap::decode_png(&[0x13, 0x37, 0x00]),
            Err(AssetError::Decode(_))
        ));
    }

    #[test]
    fn fill_rect_clips_to_bounds() {
        let mut pm = Pixmap::new(4, 4);
        pm.fill_rect(2, 2, 10, 10, argb(0xFF, 1, 2, 3));
        assert_eq!(pm.get(3, 3), argb(0xFF, 1, 2, 3));
        assert_eq!(pm.get(1, 1), 0);
    }
}
