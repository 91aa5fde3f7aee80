//! Authenticated encryption of the hidden message.
//!
//! [`AuthenticatedCipher`] is the seam the pipelines are generic over.
//! [`ChaChaCipher`] is the default: ChaCha20-Poly1305 with a fresh random
//! nonce per message.

use chacha20poly1305::{
    aead::{Aead, KeyInit},
    ChaCha20Poly1305, Nonce,
};
use rand::rngs::OsRng;
use rand::RngCore;
use thiserror::Error;

use super::kdf::Key;

/// Nonce size for ChaCha20Poly1305.
pub const NONCE_LEN: usize = 12;

/// Poly1305 authentication tag size.
pub const TAG_LEN: usize = 16;

/// Errors that can occur while sealing or opening a message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Wrong key, tampered token and malformed token all end up here.
    #[error("Authentication failed: wrong passphrase or corrupted payload")]
    AuthenticationFailed,
}

/// Opaque, self-authenticating ciphertext token.
#[derive(Clone, PartialEq, Eq)]
pub struct SealedMessage(Vec<u8>);

impl SealedMessage {
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SealedMessage {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Debug for SealedMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SealedMessage({} bytes)", self.0.len())
    }
}

/// Seals and opens messages under a symmetric key.
///
/// `open` must reject any token that was not produced by `seal` under the same
/// key, including tokens with a single flipped bit.
pub trait AuthenticatedCipher {
    /// Bytes a sealed token adds on top of its plaintext.
    fn overhead(&self) -> usize;

    fn seal(&self, key: &Key, plaintext: &[u8]) -> Result<SealedMessage, CipherError>;

    fn open(&self, key: &Key, token: &[u8]) -> Result<Vec<u8>, CipherError>;
}

/// ChaCha20-Poly1305 with the token layout `nonce (12) || ciphertext || tag (16)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ChaChaCipher;

impl AuthenticatedCipher for ChaChaCipher {
    fn overhead(&self) -> usize {
        NONCE_LEN + TAG_LEN
    }

    fn seal(&self, key: &Key, plaintext: &[u8]) -> Result<SealedMessage, CipherError> {
        let mut nonce_bytes = [0u8; NONCE_LEN];
        OsRng.fill_bytes(&mut nonce_bytes);
        let nonce = Nonce::from_slice(&nonce_bytes);

        let cipher = ChaCha20Poly1305::new_from_slice(key.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let ciphertext = cipher
            .encrypt(nonce, plaintext)
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut token = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        token.extend_from_slice(&nonce_bytes);
        token.extend_from_slice(&ciphertext);

        Ok(SealedMessage(token))
    }

    fn open(&self, key: &Key, token: &[u8]) -> Result<Vec<u8>, CipherError> {
        if token.len() < NONCE_LEN + TAG_LEN {
            return Err(CipherError::AuthenticationFailed);
        }

        let (nonce_bytes, ciphertext) = token.split_at(NONCE_LEN);
        let nonce = Nonce::from_slice(nonce_bytes);

        let cipher = ChaCha20Poly1305::new_from_slice(key.as_bytes())
            .map_err(|_| CipherError::AuthenticationFailed)?;

        cipher
            .decrypt(nonce, ciphertext)
            .map_err(|_| CipherError::AuthenticationFailed)
    }
}
