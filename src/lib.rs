//! # pixelseal - sealed messages in image pixels
//!
//! pixelseal hides a passphrase-protected message in the least significant
//! bits of an image's color channels.
//!
//! ## Overview
//!
//! - The passphrase is hashed into a 256-bit key (SHA-256)
//! - The message is sealed with ChaCha20Poly1305 (random nonce per message)
//! - The sealed token is framed: 8-byte marker + 4-byte big-endian length
//! - Frame bits go into channel LSBs, row-major, R then G then B
//! - Decoding reads every LSB, finds the frame, and opens the token
//!
//! ## Failure Model
//!
//! - **Capacity**: checked before any pixel is touched
//! - **Format**: a missing marker or truncated frame is reported, not guessed at
//! - **Authentication**: wrong passphrase and tampering fail identically
//! - **Lossless only**: carriers must be saved as PNG; JPEG destroys the bits
//!
//! ## Example Usage
//!
//! ```rust
//! use pixelseal::{decode, encode, Image};
//!
//! let cover = Image::from_fn(64, 64, |x, y| [x as u8, y as u8, 128]).unwrap();
//!
//! let carrier = encode(&cover, b"meet at the usual place", "correct horse").unwrap();
//! let message = decode(&carrier, "correct horse").unwrap();
//!
//! assert_eq!(message, b"meet at the usual place");
//! ```
//!
//! ## Modules
//!
//! - [`crypto`]: key derivation and authenticated encryption
//! - [`stego`]: pixel buffers, bit streams, framing, capacity, LSB embedding
//! - [`encoder`]: encode pipeline
//! - [`decoder`]: decode pipeline
//! - [`codec`]: image file reading and lossless writing
//! - [`config`]: output path configuration for the CLI

pub mod codec;
pub mod config;
pub mod crypto;
pub mod decoder;
pub mod encoder;
pub mod fs;
pub mod stego;

// Re-export commonly used types at the crate root
pub use codec::{CodecError, ImageCodec, PngCodec};
pub use config::OutputConfig;
pub use crypto::{AuthenticatedCipher, ChaChaCipher, CipherError, Key, KeyError, SealedMessage};
pub use decoder::{decode, decode_with_cipher, DecoderError};
pub use encoder::{encode, encode_with_cipher, required_bits, EncoderError};
pub use stego::{CapacityError, FrameError, Image, ImageError, Payload};
