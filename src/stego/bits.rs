//! Byte <-> bit stream conversion.
//!
//! Bits are represented one per `u8` (values 0 or 1) and are ordered most
//! significant bit first within each byte.

/// Bits per byte.
pub const BITS_PER_BYTE: usize = 8;

/// Expands `bytes` into a bit stream, MSB first. The result is always
/// `bytes.len() * 8` long.
pub fn pack(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * BITS_PER_BYTE);
    for &byte in bytes {
        for shift in (0..BITS_PER_BYTE).rev() {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Collapses a bit stream back into bytes, MSB first.
///
/// A trailing group of fewer than 8 bits is discarded, never padded. Only the
/// lowest bit of each input value is used.
pub fn unpack(bits: &[u8]) -> Vec<u8> {
    bits.chunks_exact(BITS_PER_BYTE)
        .map(|group| group.iter().fold(0u8, |byte, &bit| (byte << 1) | (bit & 1)))
        .collect()
}
