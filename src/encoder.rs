//! Message encoding.
//!
//! This module orchestrates the encoding process:
//! 1. Derive the key from the passphrase
//! 2. Seal the plaintext (authenticated encryption)
//! 3. Frame the sealed token (magic + length)
//! 4. Check capacity, then embed the frame into a copy of the cover image

use thiserror::Error;
use tracing::debug;

use crate::crypto::{derive, AuthenticatedCipher, ChaChaCipher, CipherError, KeyError};
use crate::stego::capacity::{self, CapacityError};
use crate::stego::frame::{self, FrameError};
use crate::stego::{lsb, Image};

/// Errors that can occur during encoding.
#[derive(Error, Debug)]
pub enum EncoderError {
    #[error("Empty message")]
    EmptyMessage,

    #[error("Key derivation error: {0}")]
    Key(#[from] KeyError),

    #[error("Encryption error: {0}")]
    Cipher(#[from] CipherError),

    #[error("Encoding error: {0}")]
    Encoding(#[from] FrameError),

    #[error(transparent)]
    Capacity(#[from] CapacityError),
}

/// Hides `plaintext` in `image` using the default cipher.
///
/// Returns a new image; `image` itself is never modified. Write the result
/// with a lossless codec or the message is lost.
pub fn encode(image: &Image, plaintext: &[u8], passphrase: &str) -> Result<Image, EncoderError> {
    encode_with_cipher(&ChaChaCipher, image, plaintext, passphrase)
}

/// Hides `plaintext` in `image` using the given cipher.
pub fn encode_with_cipher<C>(
    cipher: &C,
    image: &Image,
    plaintext: &[u8],
    passphrase: &str,
) -> Result<Image, EncoderError>
where
    C: AuthenticatedCipher + ?Sized,
{
    if plaintext.is_empty() {
        return Err(EncoderError::EmptyMessage);
    }

    let key = derive(passphrase)?;
    let sealed = cipher.seal(&key, plaintext)?;
    drop(key);

    let payload = frame::wrap(sealed.into_bytes())?;
    let framed = payload.to_bytes();
    debug!(
        plaintext_len = plaintext.len(),
        framed_len = framed.len(),
        "sealed and framed message"
    );

    Ok(lsb::embed(image, &framed)?)
}

/// Bits an encoded message of `plaintext_len` bytes occupies in the carrier
/// when sealed with `cipher`.
pub fn required_bits<C>(cipher: &C, plaintext_len: usize) -> u64
where
    C: AuthenticatedCipher + ?Sized,
{
    capacity::framed_bits(plaintext_len + cipher.overhead())
}
