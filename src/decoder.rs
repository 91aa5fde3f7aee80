//! Message decoding.
//!
//! Unlike encoding, every failure here is reported: a missing or damaged
//! frame is a [`DecoderError::Format`] error, a wrong passphrase or tampered
//! ciphertext is [`DecoderError::Authentication`]. The two authentication
//! causes are deliberately indistinguishable.

use thiserror::Error;
use tracing::debug;

use crate::crypto::{derive, AuthenticatedCipher, ChaChaCipher, CipherError, KeyError};
use crate::stego::frame::FrameError;
use crate::stego::{lsb, Image};

/// Errors that can occur during decoding.
#[derive(Error, Debug)]
pub enum DecoderError {
    #[error("Key derivation error: {0}")]
    Key(#[from] KeyError),

    #[error("Format error: {0}")]
    Format(#[from] FrameError),

    #[error(transparent)]
    Authentication(#[from] CipherError),
}

/// Recovers the message hidden in `image` using the default cipher.
pub fn decode(image: &Image, passphrase: &str) -> Result<Vec<u8>, DecoderError> {
    decode_with_cipher(&ChaChaCipher, image, passphrase)
}

/// Recovers the message hidden in `image` using the given cipher.
pub fn decode_with_cipher<C>(
    cipher: &C,
    image: &Image,
    passphrase: &str,
) -> Result<Vec<u8>, DecoderError>
where
    C: AuthenticatedCipher + ?Sized,
{
    let payload = lsb::extract(image)?;
    debug!(ciphertext_len = payload.length(), "found payload frame");

    let key = derive(passphrase)?;
    let plaintext = cipher.open(&key, payload.ciphertext())?;

    debug!(plaintext_len = plaintext.len(), "opened sealed message");
    Ok(plaintext)
}
