//! # Byte-Level Boundary
//!
//! The contract a host (FFI layer, WASM glue, CLI) calls into. Everything
//! here takes raw byte buffers and strings, validates them, and forwards to
//! the typed API.
//!
//! | Function | Input | Output |
//! |----------|-------|--------|
//! | [`generate_keypair`] | mnemonic, optional path string | [`RawKeypair`] |
//! | [`encrypt`] / [`decrypt`] | 32-byte key, bytes | bytes |
//! | [`encrypt_string`] / [`decrypt_string`] | 32-byte key, text / hex | hex / text |
//! | [`encrypt_file`] / [`decrypt_file`] | 32-byte key, name + bytes | bytes / [`DecryptedFile`] |

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::codec;
use crate::crypto::{self, PrivateKey, PublicKey, KEY_SIZE};
use crate::error::Result;
use crate::files::{self, DecryptedFile};
use crate::identity::{self, DerivationPath};

/// Keypair as plain arrays
///
/// The private half is zeroized when dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RawKeypair {
    /// X25519 public key
    #[zeroize(skip)]
    pub public_key: [u8; KEY_SIZE],
    /// X25519 private key
    pub private_key: [u8; KEY_SIZE],
}

impl std::fmt::Debug for RawKeypair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawKeypair")
            .field("public_key", &codec::encode_hex(&self.public_key))
            .field("private_key", &"[REDACTED]")
            .finish()
    }
}

/// Derive a keypair from a mnemonic, optionally along `path` (e.g. `"m/0'"`)
pub fn generate_keypair(mnemonic: &str, path: Option<&str>) -> Result<RawKeypair> {
    let path = path.map(str::parse::<DerivationPath>).transpose()?;
    let keypair = identity::generate_keypair(mnemonic, path.as_ref())?;

    Ok(RawKeypair {
        public_key: keypair.public_key.as_bytes(),
        private_key: keypair.private_key.as_bytes(),
    })
}

/// Encrypt bytes for a raw public key
pub fn encrypt(public_key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    crypto::encrypt(&PublicKey::from_bytes(public_key)?, plaintext)
}

/// Decrypt bytes with a raw private key
pub fn decrypt(private_key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    crypto::decrypt(&PrivateKey::from_bytes(private_key)?, ciphertext)
}

/// Encrypt text, returning hex ciphertext
pub fn encrypt_string(public_key: &[u8], text: &str) -> Result<String> {
    codec::encrypt_string(&PublicKey::from_bytes(public_key)?, text)
}

/// Decrypt hex ciphertext back to text
pub fn decrypt_string(private_key: &[u8], hex_ciphertext: &str) -> Result<String> {
    codec::decrypt_string(&PrivateKey::from_bytes(private_key)?, hex_ciphertext)
}

/// Encrypt a named file's contents
pub fn encrypt_file(public_key: &[u8], file_name: &str, data: &[u8]) -> Result<Vec<u8>> {
    files::encrypt_file(&PublicKey::from_bytes(public_key)?, file_name, data)
}

/// Decrypt a file envelope
pub fn decrypt_file(private_key: &[u8], ciphertext: &[u8]) -> Result<DecryptedFile> {
    files::decrypt_file(&PrivateKey::from_bytes(private_key)?, ciphertext)
}

// ============================================================================
// TESTS
// ============================================================================
