//! Payload framing.
//!
//! The frame makes a carrier self-describing without relying on image
//! metadata:
//!
//! ```text
//! [8 bytes ] magic marker  "PXSEAL\0\x01"
//! [4 bytes ] ciphertext length (big-endian u32)
//! [N bytes ] ciphertext (sealed token)
//! ```
//!
//! Anything after the ciphertext is unused carrier capacity and is ignored
//! when parsing.

use thiserror::Error;

/// Marker written at the start of every frame.
pub const MAGIC: [u8; 8] = *b"PXSEAL\x00\x01";

/// Size of the big-endian length field.
pub const LENGTH_FIELD_LEN: usize = 4;

/// Fixed frame overhead: magic + length field.
pub const HEADER_LEN: usize = MAGIC.len() + LENGTH_FIELD_LEN;

/// Errors from building or parsing a frame.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    #[error("Missing marker: no hidden payload found")]
    MissingMarker,

    #[error("Truncated header: need 12 bytes, only {available} available")]
    TruncatedHeader { available: usize },

    #[error("Truncated body: header declares {declared} bytes, only {available} available")]
    TruncatedBody { declared: u32, available: usize },

    #[error("Payload of {0} bytes does not fit the 4-byte length field")]
    TooLong(usize),
}

/// A framed ciphertext. `length()` always equals `ciphertext().len()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    length: u32,
    ciphertext: Vec<u8>,
}

impl Payload {
    /// The declared ciphertext length.
    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    pub fn into_ciphertext(self) -> Vec<u8> {
        self.ciphertext
    }

    /// Total size of the serialized frame in bytes.
    pub fn framed_len(&self) -> usize {
        HEADER_LEN + self.ciphertext.len()
    }

    /// Serializes the frame: magic, big-endian length, ciphertext.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.framed_len());
        out.extend_from_slice(&MAGIC);
        out.extend_from_slice(&self.length.to_be_bytes());
        out.extend_from_slice(&self.ciphertext);
        out
    }
}

/// Wraps a ciphertext into a frame.
///
/// Fails with [`FrameError::TooLong`] if the ciphertext is longer than
/// `u32::MAX` bytes.
pub fn wrap(ciphertext: Vec<u8>) -> Result<Payload, FrameError> {
    let length = length_field(ciphertext.len())?;
    Ok(Payload { length, ciphertext })
}

/// Parses a frame from the start of `raw`.
///
/// Checks are applied in order: the bytes present must agree with the magic
/// marker, then the full 12-byte header must be present, then the declared
/// body must fit in what remains. Trailing bytes past the body are ignored.
pub fn unwrap(raw: &[u8]) -> Result<Payload, FrameError> {
    let marker_len = raw.len().min(MAGIC.len());
    if raw[..marker_len] != MAGIC[..marker_len] {
        return Err(FrameError::MissingMarker);
    }

    if raw.len() < HEADER_LEN {
        return Err(FrameError::TruncatedHeader {
            available: raw.len(),
        });
    }

    let mut length_bytes = [0u8; LENGTH_FIELD_LEN];
    length_bytes.copy_from_slice(&raw[MAGIC.len()..HEADER_LEN]);
    let length = u32::from_be_bytes(length_bytes);

    let body = &raw[HEADER_LEN..];
    let declared = length as usize;
    if declared > body.len() {
        return Err(FrameError::TruncatedBody {
            declared: length,
            available: body.len(),
        });
    }

    Ok(Payload {
        length,
        ciphertext: body[..declared].to_vec(),
    })
}

fn length_field(len: usize) -> Result<u32, FrameError> {
    u32::try_from(len).map_err(|_| FrameError::TooLong(len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_layout() {
        let payload = wrap(vec![0xAA, 0xBB, 0xCC]).unwrap();
        assert_eq!(payload.length(), 3);

        let bytes = payload.to_bytes();
        assert_eq!(&bytes[..8], b"PXSEAL\x00\x01");
        assert_eq!(&bytes[8..12], &[0, 0, 0, 3]);
        assert_eq!(&bytes[12..], &[0xAA, 0xBB, 0xCC]);
        assert_eq!(bytes.len(), payload.framed_len());
    }

    #[test]
    fn test_length_is_big_endian() {
        let payload = wrap(vec![0u8; 0x0102]).unwrap();
        assert_eq!(&payload.to_bytes()[8..12], &[0x00, 0x00, 0x01, 0x02]);
    }

    #[test]
    fn test_unwrap_ignores_trailing_bytes() {
        let mut raw = wrap(b"sealed".to_vec()).unwrap().to_bytes();
        raw.extend_from_slice(&[0x55; 40]);

        let payload = unwrap(&raw).unwrap();
        assert_eq!(payload.ciphertext(), b"sealed");
        assert_eq!(payload.length(), 6);
    }

    #[test]
    fn test_unwrap_empty_body() {
        let raw = wrap(Vec::new()).unwrap().to_bytes();
        let payload = unwrap(&raw).unwrap();
        assert!(payload.ciphertext().is_empty());
    }

    #[test]
    fn test_missing_marker() {
        let mut raw = wrap(b"abc".to_vec()).unwrap().to_bytes();
        raw[0] ^= 0x01;
        assert_eq!(unwrap(&raw), Err(FrameError::MissingMarker));

        assert_eq!(unwrap(&[0u8; 64]), Err(FrameError::MissingMarker));
        // A short buffer that already disagrees with the marker.
        assert_eq!(unwrap(b"PXZ"), Err(FrameError::MissingMarker));
    }

    #[test]
    fn test_truncated_header() {
        assert_eq!(
            unwrap(&MAGIC),
            Err(FrameError::TruncatedHeader { available: 8 })
        );
        assert_eq!(
            unwrap(&MAGIC[..5]),
            Err(FrameError::TruncatedHeader { available: 5 })
        );
        assert_eq!(
            unwrap(&[]),
            Err(FrameError::TruncatedHeader { available: 0 })
        );

        let mut raw = MAGIC.to_vec();
        raw.extend_from_slice(&[0, 0, 0]);
        assert_eq!(
            unwrap(&raw),
            Err(FrameError::TruncatedHeader { available: 11 })
        );
    }

    #[test]
    fn test_truncated_body() {
        let mut raw = MAGIC.to_vec();
        raw.extend_from_slice(&10u32.to_be_bytes());
        raw.extend_from_slice(&[1, 2, 3]);

        assert_eq!(
            unwrap(&raw),
            Err(FrameError::TruncatedBody {
                declared: 10,
                available: 3
            })
        );
    }

    #[test]
    fn test_huge_declared_length() {
        let mut raw = MAGIC.to_vec();
        raw.extend_from_slice(&u32::MAX.to_be_bytes());
        raw.extend_from_slice(&[0u8; 100]);

        assert!(matches!(
            unwrap(&raw),
            Err(FrameError::TruncatedBody { declared: u32::MAX, .. })
        ));
    }

    #[test]
    fn test_length_field_limits() {
        assert_eq!(length_field(0), Ok(0));
        assert_eq!(length_field(u32::MAX as usize), Ok(u32::MAX));
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_length_field_overflow() {
        let too_long = u32::MAX as usize + 1;
        assert_eq!(length_field(too_long), Err(FrameError::TooLong(too_long)));
    }
}
