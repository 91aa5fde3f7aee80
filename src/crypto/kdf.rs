//! Passphrase key derivation.
//!
//! The key is the SHA-256 digest of the passphrase bytes. There is no salt and
//! no work factor: the same passphrase always yields the same key, so a
//! carrier can be opened from the passphrase alone. Nonce uniqueness in the
//! cipher is what keeps repeated use of one passphrase safe.

use std::fmt;

use sha2::digest::generic_array::GenericArray;
use sha2::{Digest, Sha256};
use thiserror::Error;
use zeroize::Zeroizing;

/// Length of a derived key in bytes (the ChaCha20-Poly1305 key size).
pub const KEY_LEN: usize = 32;

/// Errors that can occur during key derivation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KeyError {
    #[error("Passphrase must not be empty")]
    EmptyPassphrase,
}

/// Symmetric key material. Wiped from memory on drop.
pub struct Key(Zeroizing<[u8; KEY_LEN]>);

impl Key {
    /// Wraps raw key bytes.
    pub fn from_bytes(bytes: [u8; KEY_LEN]) -> Self {
        Self(Zeroizing::new(bytes))
    }

    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Key([REDACTED])")
    }
}

/// Derives the symmetric key for `passphrase`.
pub fn derive(passphrase: &str) -> Result<Key, KeyError> {
    if passphrase.is_empty() {
        return Err(KeyError::EmptyPassphrase);
    }

    // Hash straight into the wiped buffer so no stray digest copy remains.
    let mut key = Zeroizing::new([0u8; KEY_LEN]);
    Sha256::new()
        .chain_update(passphrase.as_bytes())
        .finalize_into(GenericArray::from_mut_slice(&mut key[..]));
    Ok(Key(key))
}
