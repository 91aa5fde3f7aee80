//! Cryptographic operations for pixelseal.
//!
//! This module provides:
//! - Passphrase key derivation (unsalted SHA-256)
//! - Authenticated encryption behind the [`AuthenticatedCipher`] trait
//!   (ChaCha20Poly1305 by default)

pub mod cipher;
pub mod kdf;

pub use cipher::{AuthenticatedCipher, ChaChaCipher, CipherError, SealedMessage, NONCE_LEN, TAG_LEN};
pub use kdf::{derive, Key, KeyError, KEY_LEN};
