//! Image file decoding and encoding.
//!
//! The pipelines never touch files; they take and return [`Image`] buffers.
//! An [`ImageCodec`] sits at the edges and moves those buffers to and from
//! disk. [`PngCodec`] reads anything the `image` crate understands and always
//! writes PNG, because a lossy encoder would destroy the hidden bits.

use std::io;
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};
use thiserror::Error;
use tracing::{debug, warn};

use crate::fs::write_atomic;
use crate::stego::{Image, ImageError};

/// Extensions of formats that would not preserve pixels exactly.
const LOSSY_EXTENSIONS: &[&str] = &["jpg", "jpeg", "jfif", "webp", "avif", "heic", "heif"];

/// Errors that can occur while reading or writing image files.
#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Image load error: {0}")]
    Load(String),

    #[error("Image save error: {0}")]
    Save(String),

    #[error("Refusing to write lossy format '{0}': it would destroy the hidden data (use .png)")]
    LossyFormat(String),

    #[error("Unsupported output extension '{0}': carriers are written as .png")]
    UnsupportedOutput(String),

    #[error("Invalid image: {0}")]
    Image(#[from] ImageError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Reads and writes carrier images.
pub trait ImageCodec {
    fn decode(&self, path: &Path) -> Result<Image, CodecError>;

    fn encode(&self, image: &Image, path: &Path) -> Result<(), CodecError>;
}

/// Decodes any supported format; encodes lossless PNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngCodec;

impl PngCodec {
    /// Decodes an image held in memory.
    pub fn from_bytes(bytes: &[u8]) -> Result<Image, CodecError> {
        let decoded =
            image::load_from_memory(bytes).map_err(|e| CodecError::Load(e.to_string()))?;
        Ok(Image::from_dynamic(decoded)?)
    }

    /// Returns the image as PNG bytes.
    pub fn to_png_bytes(image: &Image) -> Result<Vec<u8>, CodecError> {
        let mut bytes = Vec::new();
        PngEncoder::new(&mut bytes)
            .write_image(
                image.as_bytes(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgb8,
            )
            .map_err(|e| CodecError::Save(e.to_string()))?;
        Ok(bytes)
    }
}

impl ImageCodec for PngCodec {
    fn decode(&self, path: &Path) -> Result<Image, CodecError> {
        // Format is sniffed from content, not the extension.
        let bytes = std::fs::read(path)?;
        let image = Self::from_bytes(&bytes)?;
        debug!(
            path = %path.display(),
            width = image.width(),
            height = image.height(),
            "decoded image"
        );
        Ok(image)
    }

    fn encode(&self, image: &Image, path: &Path) -> Result<(), CodecError> {
        check_lossless_target(path)?;
        let bytes = Self::to_png_bytes(image)?;
        write_atomic(path, &bytes)?;
        debug!(path = %path.display(), bytes = bytes.len(), "wrote PNG carrier");
        Ok(())
    }
}

/// Accepts `.png` (any case) or no extension at all.
pub fn check_lossless_target(path: &Path) -> Result<(), CodecError> {
    let ext = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => ext.to_lowercase(),
        None => return Ok(()),
    };

    if LOSSY_EXTENSIONS.contains(&ext.as_str()) {
        warn!(path = %path.display(), "rejected lossy output format");
        return Err(CodecError::LossyFormat(ext));
    }
    if ext != "png" {
        return Err(CodecError::UnsupportedOutput(ext));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn create_test_image(width: u32, height: u32) -> Image {
        Image::from_fn(width, height, |x, y| {
            [
                ((x * 17) % 256) as u8,
                ((y * 23) % 256) as u8,
                (((x + y) * 31) % 256) as u8,
            ]
        })
        .unwrap()
    }

    #[test]
    fn test_png_bytes_roundtrip_is_exact() {
        let image = create_test_image(33, 17);
        let bytes = PngCodec::to_png_bytes(&image).unwrap();
        assert_eq!(PngCodec::from_bytes(&bytes).unwrap(), image);
    }

    #[test]
    fn test_file_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cover.png");
        let image = create_test_image(20, 20);

        PngCodec.encode(&image, &path).unwrap();
        assert_eq!(PngCodec.decode(&path).unwrap(), image);
    }

    #[test]
    fn test_rejects_lossy_output() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("cover.JPG");
        let image = create_test_image(4, 4);

        let result = PngCodec.encode(&image, &path);
        assert!(matches!(result, Err(CodecError::LossyFormat(ref ext)) if ext == "jpg"));
        assert!(!path.exists());
    }

    #[test]
    fn test_rejects_other_extensions() {
        assert!(matches!(
            check_lossless_target(Path::new("out.bmp")),
            Err(CodecError::UnsupportedOutput(_))
        ));
        assert!(check_lossless_target(Path::new("out.PNG")).is_ok());
        assert!(check_lossless_target(Path::new("out")).is_ok());
    }

    #[test]
    fn test_decode_missing_file() {
        let dir = tempdir().unwrap();
        let result = PngCodec.decode(&dir.path().join("nope.png"));
        assert!(matches!(result, Err(CodecError::Io(_))));
    }

    #[test]
    fn test_decode_without_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("carrier");
        let image = create_test_image(8, 8);

        PngCodec.encode(&image, &path).unwrap();
        assert_eq!(PngCodec.decode(&path).unwrap(), image);
    }

    #[test]
    fn test_decode_garbage_bytes() {
        assert!(matches!(
            PngCodec::from_bytes(b"not an image"),
            Err(CodecError::Load(_))
        ));
    }
}
