//! Carrier capacity.
//!
//! One payload bit per color channel, three channels per pixel, alpha never
//! used.

use thiserror::Error;

use super::bits::BITS_PER_BYTE;
use super::frame::HEADER_LEN;
use super::image::{Image, CHANNELS};

/// Payload bits stored in each channel.
pub const BITS_PER_CHANNEL: u64 = 1;

/// The payload does not fit in the carrier.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Image too small to hide payload: need {needed} bits, have capacity for {available}")]
pub struct CapacityError {
    pub needed: u64,
    pub available: u64,
}

/// Number of payload bits `image` can carry.
pub fn capacity_bits(image: &Image) -> u64 {
    image.pixel_count() * CHANNELS as u64 * BITS_PER_CHANNEL
}

/// Fails unless `payload_bits` fits in `capacity_bits`.
pub fn ensure_fits(capacity_bits: u64, payload_bits: u64) -> Result<(), CapacityError> {
    if payload_bits > capacity_bits {
        return Err(CapacityError {
            needed: payload_bits,
            available: capacity_bits,
        });
    }
    Ok(())
}

/// Bits needed to embed a frame around a ciphertext of `ciphertext_len` bytes.
pub fn framed_bits(ciphertext_len: usize) -> u64 {
    (HEADER_LEN as u64 + ciphertext_len as u64) * BITS_PER_BYTE as u64
}

/// Largest plaintext, in bytes, that fits in `image` when the cipher adds
/// `overhead` bytes to every message.
pub fn max_plaintext_len(image: &Image, overhead: usize) -> u64 {
    let whole_bytes = capacity_bits(image) / BITS_PER_BYTE as u64;
    whole_bytes.saturating_sub((HEADER_LEN + overhead) as u64)
}
