//! # Symmetric Encryption
//!
//! AES-256-GCM seal/open used by the ECIES engine.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      AES-256-GCM                                        │
//! ├─────────────────────────────────────────────────────────────────────────┤
//! │                                                                         │
//! │  seal(key, nonce, plaintext)                                           │
//! │           ↓                                                             │
//! │  body (same length as plaintext) || tag (16 bytes)                     │
//! │                                                                         │
//! │  open(key, nonce, body || tag)                                         │
//! │           ↓                                                             │
//! │  tag checked in constant time, then plaintext (or AuthenticationFailure)│
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Security Properties
//!
//! | Property | Guarantee |
//! |----------|-----------|
//! | Confidentiality | AES-256 in counter mode |
//! | Integrity | 128-bit GHASH tag over the whole body |
//! | No partial output | `open` returns nothing unless the tag verifies |

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Key, Nonce as AesNonce,
};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{Error, Result};

/// Size of the AES-GCM nonce in bytes (96 bits)
pub const NONCE_SIZE: usize = 12;

/// Size of the AES-GCM authentication tag in bytes (128 bits)
pub const TAG_SIZE: usize = 16;

/// Size of the encryption key in bytes (256 bits)
pub const SYMMETRIC_KEY_SIZE: usize = 32;

/// A nonce (number used once) for AES-GCM encryption
///
/// ## Critical Security Requirement
///
/// **NEVER reuse a nonce with the same key!**
///
/// ECIES derives both the key and the nonce from a fresh ephemeral shared
/// secret, so every (key, nonce) pair is used for exactly one message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct Nonce([u8; NONCE_SIZE]);

impl Nonce {
    /// Create from existing bytes
    pub fn from_bytes(bytes: [u8; NONCE_SIZE]) -> Self {
        Self(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; NONCE_SIZE] {
        &self.0
    }
}

/// An AES-256-GCM encryption key
///
/// Zeroized when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EncryptionKey([u8; SYMMETRIC_KEY_SIZE]);

impl EncryptionKey {
    /// Create from raw bytes
    pub fn from_bytes(bytes: [u8; SYMMETRIC_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    fn cipher(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(&self.0))
    }
}

/// Encrypt `plaintext`, returning `body || tag`
///
/// ## Errors
///
/// `EncryptionFailure` only if the cipher itself reports an error, which the
/// AEAD crate does for messages beyond the GCM length limit.
pub fn seal(key: &EncryptionKey, nonce: &Nonce, plaintext: &[u8]) -> Result<Vec<u8>> {
    key.cipher()
        .encrypt(AesNonce::from_slice(&nonce.0), plaintext)
        .map_err(|e| Error::EncryptionFailure(format!("AES-GCM: {}", e)))
}

/// Verify and decrypt `body || tag`
///
/// ## Errors
///
/// Returns `AuthenticationFailure` if:
/// - The ciphertext or tag was tampered with
/// - The key is wrong
/// - The nonce is wrong
pub fn open(key: &EncryptionKey, nonce: &Nonce, sealed: &[u8]) -> Result<Vec<u8>> {
    key.cipher()
        .decrypt(AesNonce::from_slice(&nonce.0), sealed)
        .map_err(|_| Error::AuthenticationFailure)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (EncryptionKey, Nonce) {
        (
            EncryptionKey::from_bytes([42u8; 32]),
            Nonce::from_bytes([7u8; NONCE_SIZE]),
        )
    }

    #[test]
    fn test_seal_open_basic() {
        let (key, nonce) = fixture();
        let plaintext = b"Hello, World!";

        let sealed = seal(&key, &nonce, plaintext).unwrap();
        assert_eq!(sealed.len(), plaintext.len() + TAG_SIZE);

        let opened = open(&key, &nonce, &sealed).unwrap();
        assert_eq!(opened, plaintext);
    }

    #[test]
    fn test_seal_open_empty() {
        let (key, nonce) = fixture();

        let sealed = seal(&key, &nonce, b"").unwrap();
        assert_eq!(sealed.len(), TAG_SIZE);
        assert!(open(&key, &nonce, &sealed).unwrap().is_empty());
    }

    #[test]
    fn test_tampered_tag_fails() {
        let (key, nonce) = fixture();
        let mut sealed = seal(&key, &nonce, b"Hello, World!").unwrap();

        let last = sealed.len() - 1;
        sealed[last] ^= 0x01;

        assert_eq!(open(&key, &nonce, &sealed), Err(Error::AuthenticationFailure));
    }

    #[test]
    fn test_wrong_key_fails() {
        let (key, nonce) = fixture();
        let sealed = seal(&key, &nonce, b"secret").unwrap();

        let other = EncryptionKey::from_bytes([99u8; 32]);
        assert_eq!(open(&other, &nonce, &sealed), Err(Error::AuthenticationFailure));
    }

    #[test]
    fn test_wrong_nonce_fails() {
        let (key, nonce) = fixture();
        let sealed = seal(&key, &nonce, b"secret").unwrap();

        let other = Nonce::from_bytes([8u8; NONCE_SIZE]);
        assert_eq!(open(&key, &other, &sealed), Err(Error::AuthenticationFailure));
    }

    #[test]
    fn test_short_input_fails() {
        let (key, nonce) = fixture();
        assert_eq!(open(&key, &nonce, &[0u8; 3]), Err(Error::AuthenticationFailure));
    }
}
