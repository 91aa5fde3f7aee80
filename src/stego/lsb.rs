//! LSB (Least Significant Bit) embedding and extraction.
//!
//! Bits go into the lowest bit of each color channel, pixels in row-major
//! order, channels in R, G, B order. Channels past the end of the payload are
//! left exactly as they were.

use tracing::debug;

use super::bits;
use super::capacity::{self, CapacityError};
use super::frame::{self, FrameError, Payload};
use super::image::Image;

/// Writes `framed` into the LSBs of a copy of `image`.
///
/// Capacity is checked before anything is copied or modified, so on error
/// the caller still holds the only image and it is untouched.
pub fn embed(image: &Image, framed: &[u8]) -> Result<Image, CapacityError> {
    let payload_bits = bits::pack(framed);
    let available = capacity::capacity_bits(image);
    capacity::ensure_fits(available, payload_bits.len() as u64)?;

    let mut output = image.clone();
    for (channel, bit) in output.channels_mut().iter_mut().zip(payload_bits.iter()) {
        *channel = (*channel & 0xFE) | bit;
    }

    debug!(
        bits = payload_bits.len(),
        capacity = available,
        "embedded payload into carrier"
    );
    Ok(output)
}

/// Reads the LSB of every channel in the image, in embedding order.
pub fn read_lsbs(image: &Image) -> Vec<u8> {
    image.as_bytes().iter().map(|channel| channel & 1).collect()
}

/// Reads the whole carrier and parses the frame at its start.
///
/// The extractor does not know the payload size in advance; it unpacks every
/// available bit and lets the frame's length field bound the ciphertext.
pub fn extract(image: &Image) -> Result<Payload, FrameError> {
    let raw = bits::unpack(&read_lsbs(image));
    let payload = frame::unwrap(&raw)?;

    debug!(
        ciphertext_len = payload.length(),
        extracted_bytes = raw.len(),
        "extracted payload frame"
    );
    Ok(payload)
}
