//! Decoded RGB pixel buffers.
//!
//! An [`Image`] is the raster every stage of the pipeline works on: row-major
//! pixels, three 8-bit channels each (red, green, blue), stored interleaved in
//! one owned buffer. Alpha never reaches this type, so it never counts toward
//! capacity.
//!
//! Because the buffer is interleaved, walking it front to back visits pixels
//! in row-major order and, within each pixel, channels in R, G, B order. That
//! is exactly the bit placement order of the embedder and the extractor.

use image::{DynamicImage, RgbImage};
use thiserror::Error;

/// Color channels per pixel (R, G, B).
pub const CHANNELS: usize = 3;

/// Errors raised when constructing an [`Image`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("Image dimensions must be positive, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("Pixel buffer has {actual} bytes, expected {expected} for the given dimensions")]
    BufferSize { expected: usize, actual: usize },

    #[error("Image dimensions {width}x{height} are too large for this platform")]
    TooLarge { width: u32, height: u32 },
}

/// An owned, rectangular RGB8 pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl Image {
    /// Creates an image from an interleaved, row-major RGB buffer.
    ///
    /// Fails if either dimension is zero or if `data` is not exactly
    /// `width * height * 3` bytes long.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Result<Self, ImageError> {
        let expected = buffer_len(width, height)?;
        if data.len() != expected {
            return Err(ImageError::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Creates an image by calling `f(x, y)` for every pixel in row-major order.
    pub fn from_fn<F>(width: u32, height: u32, mut f: F) -> Result<Self, ImageError>
    where
        F: FnMut(u32, u32) -> [u8; 3],
    {
        let mut data = Vec::with_capacity(buffer_len(width, height)?);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self::new(width, height, data)
    }

    /// Converts any decoded image into an RGB8 buffer, dropping alpha.
    pub fn from_dynamic(image: DynamicImage) -> Result<Self, ImageError> {
        let rgb: RgbImage = image.to_rgb8();
        let (width, height) = rgb.dimensions();
        Self::new(width, height, rgb.into_raw())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Number of pixels in the image.
    pub fn pixel_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Returns the RGB value of the pixel at `(x, y)`, or `None` when out of bounds.
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 3]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let offset = (y as usize * self.width as usize + x as usize) * CHANNELS;
        let px = &self.data[offset..offset + CHANNELS];
        Some([px[0], px[1], px[2]])
    }

    /// The interleaved channel bytes, row-major, R/G/B per pixel.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns its channel bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Mutable access to channel bytes. Only the embedder writes here, and only
    /// on its own copy.
    pub(crate) fn channels_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }
}

fn buffer_len(width: u32, height: u32) -> Result<usize, ImageError> {
    if width == 0 || height == 0 {
        return Err(ImageError::ZeroDimension { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|pixels| pixels.checked_mul(CHANNELS))
        .ok_or(ImageError::TooLarge { width, height })
}
